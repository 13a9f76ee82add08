use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::card::CardFullRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::authz::parse_id;
use crate::utils::token::verify_token;

/// Adds the caller to the card's favorite set. Favoriting twice is a no-op.
#[patch("/{id}")]
pub async fn favorite(
    db: web::Data<Arc<DbService>>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
    path: web::Path<String>,
) -> ApiResult<CardFullRes> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    let id = parse_id(&path)?;

    let (card, favorited_by) = db.favorite_card(id, claims.sub).await?;
    Ok(ApiResponse::Ok(CardFullRes::from_parts(card, favorited_by)))
}
