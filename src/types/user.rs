use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::common::{Address, Image, Name};

/// Full user payload, accepted by signup and PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RUser {
    pub name: Name,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub address: Address,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub gender: Option<String>,
    pub user_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RRole {
    pub user_type: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenRes {
    pub token: String,
}

/// Allow-list projection of a stored user. The password hash never crosses
/// this boundary.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRes {
    pub id: Uuid,
    pub name: Name,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub image: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub user_type: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(user: entity::user::Model) -> Self {
        UserRes {
            id: user.id,
            name: Name {
                first: user.first_name,
                middle: user.middle_name,
                last: user.last_name,
            },
            email: user.email,
            phone: user.phone,
            address: Address {
                state: user.state,
                country: user.country,
                city: user.city,
                street: user.street,
                house_number: user.house_number,
                zip: None,
            },
            image: Image {
                url: user.image_url,
                alt: user.image_alt,
            },
            gender: user.gender,
            user_type: user.user_type,
        }
    }
}
