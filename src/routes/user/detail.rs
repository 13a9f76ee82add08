use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use crate::utils::authz::{parse_id, require_self_or_admin};
use crate::utils::token::verify_token;

#[get("/{id}")]
pub async fn detail(
    db: web::Data<Arc<DbService>>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
    path: web::Path<String>,
) -> ApiResult<UserRes> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    let id = parse_id(&path)?;
    require_self_or_admin(&claims, id)?;

    let user = db.get_user_by_id(&id).await?;
    Ok(ApiResponse::Ok(user.into()))
}
