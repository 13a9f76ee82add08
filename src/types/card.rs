use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::common::{Address, Image};

/// Full card payload, accepted by create and PUT. `user_id` only matters at
/// creation; updates never move a card between owners.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RCard {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    pub address: Address,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Allow-list projection used by the public listing and detail routes.
/// Address and image are always present.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRes {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    pub image: Image,
    pub address: Address,
}

impl From<entity::card::Model> for CardRes {
    fn from(card: entity::card::Model) -> Self {
        CardRes {
            id: card.id,
            title: card.title,
            subtitle: card.subtitle,
            description: card.description,
            phone: card.phone,
            email: card.email,
            web: card.web,
            image: Image {
                url: card.image_url,
                alt: card.image_alt,
            },
            address: Address {
                state: card.state,
                country: card.country,
                city: card.city,
                street: card.street,
                house_number: card.house_number,
                zip: card.zip,
            },
        }
    }
}

/// Full card document returned by the mutating routes, owner and favorite
/// set included.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFullRes {
    #[serde(flatten)]
    pub card: CardRes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub favorited_by: Vec<Uuid>,
}

impl CardFullRes {
    pub fn from_parts(card: entity::card::Model, favorited_by: Vec<Uuid>) -> Self {
        let user_id = card.owner_id;
        CardFullRes {
            card: card.into(),
            user_id,
            favorited_by,
        }
    }
}
