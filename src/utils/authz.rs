use uuid::Uuid;

use crate::types::claims::Claims;
use crate::types::error::AppError;

pub const ADMIN_ROLE: &str = "admin";

/// Ids are opaque strings at the API surface; anything that does not name a
/// stored document is a 404.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

pub fn require_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.user_type == ADMIN_ROLE {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// A user record is visible to the user it belongs to and to admins.
pub fn require_self_or_admin(claims: &Claims, id: Uuid) -> Result<(), AppError> {
    if claims.sub == id || claims.user_type == ADMIN_ROLE {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Cards are mutated by their owner or an admin. Ownerless cards are
/// admin-only.
pub fn require_owner_or_admin(claims: &Claims, owner: Option<Uuid>) -> Result<(), AppError> {
    if owner == Some(claims.sub) || claims.user_type == ADMIN_ROLE {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
