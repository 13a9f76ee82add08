use crate::db::service::DbService;
use crate::types::{card::RCard, error::AppError};
use chrono::Utc;
use entity::card::{ActiveModel as CardActive, Entity as Card, Model as CardModel};
use entity::card_favorite::{ActiveModel as FavoriteActive, Entity as CardFavorite};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    pub async fn list_cards(&self) -> Result<Vec<CardModel>, AppError> {
        Ok(Card::find().all(&self.db).await?)
    }

    pub async fn list_cards_by_owner(&self, owner_id: Uuid) -> Result<Vec<CardModel>, AppError> {
        Ok(Card::find()
            .filter(entity::card::Column::OwnerId.eq(owner_id))
            .all(&self.db)
            .await?)
    }

    pub async fn get_card_by_id(&self, id: &Uuid) -> Result<CardModel, AppError> {
        Ok(Card::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Card does not exist".into()))?)
    }

    pub async fn create_card(&self, payload: &RCard) -> Result<CardModel, AppError> {
        let now = Utc::now();
        let image = payload.image.clone().unwrap_or_default();

        Ok(CardActive {
            id: Set(Uuid::new_v4()),
            title: Set(payload.title.clone()),
            subtitle: Set(payload.subtitle.clone()),
            description: Set(payload.description.clone()),
            phone: Set(payload.phone.clone()),
            email: Set(payload.email.clone()),
            web: Set(payload.web.clone()),
            image_url: Set(image.url),
            image_alt: Set(image.alt),
            state: Set(payload.address.state.clone()),
            country: Set(payload.address.country.clone()),
            city: Set(payload.address.city.clone()),
            street: Set(payload.address.street.clone()),
            house_number: Set(payload.address.house_number),
            zip: Set(payload.address.zip.clone()),
            owner_id: Set(payload.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    /// Content fields only; ownership and favorites never change on PUT.
    pub async fn update_card(
        &self,
        current: CardModel,
        payload: &RCard,
    ) -> Result<CardModel, AppError> {
        let image = payload.image.clone().unwrap_or_default();

        let mut am: CardActive = current.into();
        am.title = Set(payload.title.clone());
        am.subtitle = Set(payload.subtitle.clone());
        am.description = Set(payload.description.clone());
        am.phone = Set(payload.phone.clone());
        am.email = Set(payload.email.clone());
        am.web = Set(payload.web.clone());
        am.image_url = Set(image.url);
        am.image_alt = Set(image.alt);
        am.state = Set(payload.address.state.clone());
        am.country = Set(payload.address.country.clone());
        am.city = Set(payload.address.city.clone());
        am.street = Set(payload.address.street.clone());
        am.house_number = Set(payload.address.house_number);
        am.zip = Set(payload.address.zip.clone());
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_card(&self, id: Uuid) -> Result<CardModel, AppError> {
        let card = self.get_card_by_id(&id).await?;
        Card::delete_by_id(id).exec(&self.db).await?;
        Ok(card)
    }

    /// Atomic set-add on the favorite join table. The composite primary key
    /// plus ON CONFLICT DO NOTHING makes repeated favoriting idempotent.
    pub async fn favorite_card(
        &self,
        card_id: Uuid,
        user_id: Uuid,
    ) -> Result<(CardModel, Vec<Uuid>), AppError> {
        let card = self.get_card_by_id(&card_id).await?;

        CardFavorite::insert(FavoriteActive {
            card_id: Set(card_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::card_favorite::Column::CardId,
                entity::card_favorite::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await?;

        let favorited_by = self.card_favorites(&card_id).await?;
        Ok((card, favorited_by))
    }

    pub async fn card_favorites(&self, card_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(CardFavorite::find()
            .filter(entity::card_favorite::Column::CardId.eq(*card_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|favorite| favorite.user_id)
            .collect())
    }
}
