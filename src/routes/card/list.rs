use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::card::CardRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(db: web::Data<Arc<DbService>>) -> ApiResult<Vec<CardRes>> {
    let cards = db.list_cards().await?;
    Ok(ApiResponse::Ok(cards.into_iter().map(CardRes::from).collect()))
}
