use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use bcard::{
    config::EnvConfig, db::service::DbService, routes::configure_routes, types::claims::Claims,
    utils::password::hash_password, utils::token::issue_token, validation::Schemas,
};

pub struct TestClient {
    pub db: Arc<DbService>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient {
            db,
            config: super::get_test_config(),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Schemas::new()))
            .app_data(web::Data::new(self.config.clone()))
            .configure(configure_routes)
    }

    /// Seeds a user straight into the store and mints a token for it.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>, user_type: &str) -> (Uuid, String) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let mut payload = super::test_data::sample_user_with_email(&email);
        payload.user_type = user_type.to_string();

        let password_hash = hash_password(&payload.password).expect("Failed to hash password");
        let user = self
            .db
            .create_user(&payload, password_hash)
            .await
            .expect("Failed to create user");

        let claims = Claims::for_user(&user, None);
        let token = issue_token(&claims, &self.config.jwt_secret).expect("Failed to issue token");

        (user.id, token)
    }

    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (Uuid, String) {
        self.create_test_user(None, "admin").await
    }

    #[allow(dead_code)]
    pub async fn create_test_card(&self, owner: Option<Uuid>) -> entity::card::Model {
        self.db
            .create_card(&super::test_data::sample_card_with_owner(owner))
            .await
            .expect("Failed to create card")
    }
}
