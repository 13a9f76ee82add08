use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::card::CardRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::verify_token;

#[get("/my-cards")]
pub async fn my_cards(
    db: web::Data<Arc<DbService>>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
) -> ApiResult<Vec<CardRes>> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    let cards = db.list_cards_by_owner(claims.sub).await?;
    Ok(ApiResponse::Ok(cards.into_iter().map(CardRes::from).collect()))
}
