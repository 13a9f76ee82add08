use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RRole, UserRes};
use crate::utils::authz::{parse_id, require_admin};
use crate::utils::token::verify_token;

/// Role changes are admin-only; handing the role to whoever sent the request
/// body was an escalation hole.
#[patch("/{id}")]
pub async fn set_role(
    db: web::Data<Arc<DbService>>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
    path: web::Path<String>,
    body: web::Json<RRole>,
) -> ApiResult<UserRes> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    require_admin(&claims)?;
    let id = parse_id(&path)?;

    if body.user_type.trim().is_empty() {
        return Err(AppError::Validation("userType must not be empty".to_string()));
    }

    let user = db.set_user_role(id, body.user_type.clone()).await?;
    Ok(ApiResponse::Ok(user.into()))
}
