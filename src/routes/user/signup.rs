use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::claims::Claims;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUser, TokenRes};
use crate::utils::password::hash_password;
use crate::utils::token::issue_token;
use crate::validation::Schemas;

#[post("")]
pub async fn signup(
    db: web::Data<Arc<DbService>>,
    schemas: web::Data<Schemas>,
    config: web::Data<EnvConfig>,
    body: web::Json<RUser>,
) -> ApiResult<TokenRes> {
    schemas.user.validate(&body)?;

    let password_hash = hash_password(&body.password)?;
    let user = db.create_user(&body, password_hash).await?;

    let claims = Claims::for_user(&user, config.token_expiry_secs);
    let token = issue_token(&claims, &config.jwt_secret)?;

    Ok(ApiResponse::Created(TokenRes { token }))
}
