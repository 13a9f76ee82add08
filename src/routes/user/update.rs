use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUser, UserRes};
use crate::utils::authz::{parse_id, require_self_or_admin};
use crate::utils::password::hash_password;
use crate::utils::token::verify_token;
use crate::validation::Schemas;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<DbService>>,
    schemas: web::Data<Schemas>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
    path: web::Path<String>,
    body: web::Json<RUser>,
) -> ApiResult<UserRes> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    let id = parse_id(&path)?;
    require_self_or_admin(&claims, id)?;
    schemas.user.validate(&body)?;

    let password_hash = hash_password(&body.password)?;
    let user = db.update_user(id, &body, password_hash).await?;

    Ok(ApiResponse::Ok(user.into()))
}
