use crate::db::service::DbService;
use crate::types::{error::AppError, user::RUser};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find().all(&self.db).await?)
    }

    /// Signup: reject duplicate emails before touching the table.
    pub async fn create_user(
        &self,
        payload: &RUser,
        password_hash: String,
    ) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        let image = payload.image.clone().unwrap_or_default();

        Ok(UserActive {
            id: Set(Uuid::new_v4()),
            first_name: Set(payload.name.first.clone()),
            middle_name: Set(payload.name.middle.clone()),
            last_name: Set(payload.name.last.clone()),
            phone: Set(payload.phone.clone()),
            email: Set(payload.email.clone()),
            password_hash: Set(password_hash),
            state: Set(payload.address.state.clone()),
            country: Set(payload.address.country.clone()),
            city: Set(payload.address.city.clone()),
            street: Set(payload.address.street.clone()),
            house_number: Set(payload.address.house_number),
            image_url: Set(image.url),
            image_alt: Set(image.alt),
            gender: Set(payload.gender.clone()),
            user_type: Set(payload.user_type.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    /// Full replace from a PUT body. The password arrives rehashed; an email
    /// change is checked against the unique constraint first.
    pub async fn update_user(
        &self,
        id: Uuid,
        payload: &RUser,
        password_hash: String,
    ) -> Result<UserModel, AppError> {
        let current = self.get_user_by_id(&id).await?;
        if payload.email != current.email && self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let image = payload.image.clone().unwrap_or_default();

        let mut am: UserActive = current.into();
        am.first_name = Set(payload.name.first.clone());
        am.middle_name = Set(payload.name.middle.clone());
        am.last_name = Set(payload.name.last.clone());
        am.phone = Set(payload.phone.clone());
        am.email = Set(payload.email.clone());
        am.password_hash = Set(password_hash);
        am.state = Set(payload.address.state.clone());
        am.country = Set(payload.address.country.clone());
        am.city = Set(payload.address.city.clone());
        am.street = Set(payload.address.street.clone());
        am.house_number = Set(payload.address.house_number);
        am.image_url = Set(image.url);
        am.image_alt = Set(image.alt);
        am.gender = Set(payload.gender.clone());
        am.user_type = Set(payload.user_type.clone());
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn set_user_role(&self, id: Uuid, user_type: String) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(&id).await?.into();
        am.user_type = Set(user_type);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(&id).await?;
        User::delete_by_id(id).exec(&self.db).await?;
        Ok(user)
    }
}
