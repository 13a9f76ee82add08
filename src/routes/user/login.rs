use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::claims::Claims;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RLogin, TokenRes};
use crate::utils::password::verify_password;
use crate::utils::token::issue_token;
use crate::validation::Schemas;

#[post("/login")]
pub async fn login(
    db: web::Data<Arc<DbService>>,
    schemas: web::Data<Schemas>,
    config: web::Data<EnvConfig>,
    body: web::Json<RLogin>,
) -> ApiResult<TokenRes> {
    schemas.login.validate(&body)?;

    // unknown email is a 404, wrong password a 400
    let user = db.get_user_by_email(&body.email).await?;
    if !verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::BadRequest("Wrong email or password".to_string()));
    }

    let claims = Claims::for_user(&user, config.token_expiry_secs);
    let token = issue_token(&claims, &config.jwt_secret)?;

    Ok(ApiResponse::Ok(TokenRes { token }))
}
