use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::card::{CardFullRes, RCard};
use crate::types::response::{ApiResponse, ApiResult};
use crate::validation::Schemas;

#[post("")]
pub async fn create(
    db: web::Data<Arc<DbService>>,
    schemas: web::Data<Schemas>,
    body: web::Json<RCard>,
) -> ApiResult<CardFullRes> {
    schemas.card.validate(&body)?;
    let card = db.create_card(&body).await?;
    Ok(ApiResponse::Created(CardFullRes::from_parts(card, Vec::new())))
}
