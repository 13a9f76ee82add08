use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::card::CardFullRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::authz::{parse_id, require_owner_or_admin};
use crate::utils::token::verify_token;

#[delete("/{id}")]
pub async fn remove(
    db: web::Data<Arc<DbService>>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
    path: web::Path<String>,
) -> ApiResult<CardFullRes> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    let id = parse_id(&path)?;

    let card = db.get_card_by_id(&id).await?;
    require_owner_or_admin(&claims, card.owner_id)?;

    let favorited_by = db.card_favorites(&id).await?;
    let card = db.delete_card(id).await?;
    Ok(ApiResponse::Ok(CardFullRes::from_parts(card, favorited_by)))
}
