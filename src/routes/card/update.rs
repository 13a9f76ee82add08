use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::service::DbService;
use crate::types::card::{CardFullRes, RCard};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::authz::{parse_id, require_owner_or_admin};
use crate::utils::token::verify_token;
use crate::validation::Schemas;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<DbService>>,
    schemas: web::Data<Schemas>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
    path: web::Path<String>,
    body: web::Json<RCard>,
) -> ApiResult<CardFullRes> {
    let claims = verify_token(auth.token(), &config.jwt_secret)?;
    let id = parse_id(&path)?;
    schemas.card.validate(&body)?;

    let card = db.get_card_by_id(&id).await?;
    require_owner_or_admin(&claims, card.owner_id)?;

    let card = db.update_card(card, &body).await?;
    let favorited_by = db.card_favorites(&id).await?;
    Ok(ApiResponse::Ok(CardFullRes::from_parts(card, favorited_by)))
}
