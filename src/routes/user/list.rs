use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("")]
pub async fn list(db: web::Data<Arc<DbService>>) -> ApiResult<Vec<UserRes>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}
