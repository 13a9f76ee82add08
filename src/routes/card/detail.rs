use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::card::CardRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::authz::parse_id;

#[get("/{id}")]
pub async fn detail(db: web::Data<Arc<DbService>>, path: web::Path<String>) -> ApiResult<CardRes> {
    let id = parse_id(&path)?;
    let card = db.get_card_by_id(&id).await?;
    Ok(ApiResponse::Ok(card.into()))
}
