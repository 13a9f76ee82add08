use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::common::{Address, Name};

/// Identity attributes embedded in a session token. Trusted for the token's
/// lifetime without a store lookup; there is no revocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: Uuid,
    pub name: Name,
    pub email: String,
    pub phone: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    pub fn for_user(user: &entity::user::Model, expires_in_secs: Option<u64>) -> Self {
        Claims {
            sub: user.id,
            name: Name {
                first: user.first_name.clone(),
                middle: user.middle_name.clone(),
                last: user.last_name.clone(),
            },
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: Address {
                state: user.state.clone(),
                country: user.country.clone(),
                city: user.city.clone(),
                street: user.street.clone(),
                house_number: user.house_number,
                zip: None,
            },
            gender: user.gender.clone(),
            user_type: user.user_type.clone(),
            exp: expires_in_secs.map(|secs| Utc::now().timestamp() as u64 + secs),
        }
    }
}
