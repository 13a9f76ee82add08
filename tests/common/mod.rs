use std::sync::Arc;

use bcard::config::EnvConfig;
use bcard::db::service::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
    _db_file: tempfile::NamedTempFile,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db_file = tempfile::NamedTempFile::new().expect("Failed to create temp db file");
        let db_url = format!("sqlite://{}?mode=rwc", db_file.path().display());

        let db = Arc::new(
            DbService::new(&db_url)
                .await
                .expect("Failed to initialize DbService"),
        );

        TestContext {
            db,
            _db_file: db_file,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 4000,
        db_url: "test".to_string(), // Not used in tests
        jwt_secret: "test-jwt-secret".to_string(),
        token_expiry_secs: None,
    }
}

// Test data helpers
pub mod test_data {
    use bcard::types::card::RCard;
    use bcard::types::common::{Address, Image, Name};
    use bcard::types::user::RUser;
    use uuid::Uuid;

    #[allow(dead_code)]
    pub fn sample_user() -> RUser {
        sample_user_with_email("test@example.com")
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUser {
        RUser {
            name: Name {
                first: "Test".to_string(),
                middle: None,
                last: "User".to_string(),
            },
            phone: "0501234567".to_string(),
            email: email.to_string(),
            password: "Strong1!Pass".to_string(),
            address: Address {
                state: None,
                country: "Israel".to_string(),
                city: "Tel Aviv".to_string(),
                street: "Herzl".to_string(),
                house_number: 12,
                zip: None,
            },
            image: Some(Image {
                url: Some("https://example.com/avatar.png".to_string()),
                alt: Some("avatar".to_string()),
            }),
            gender: None,
            user_type: "regular".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_card() -> RCard {
        sample_card_with_owner(None)
    }

    #[allow(dead_code)]
    pub fn sample_card_with_owner(owner: Option<Uuid>) -> RCard {
        RCard {
            title: "Test Business".to_string(),
            subtitle: "Quality since 1999".to_string(),
            description: "A business that does business things".to_string(),
            phone: "0521234567".to_string(),
            email: "biz@example.com".to_string(),
            web: Some("https://example.com".to_string()),
            image: Some(Image {
                url: Some("https://example.com/card.png".to_string()),
                alt: Some("storefront".to_string()),
            }),
            address: Address {
                state: None,
                country: "Israel".to_string(),
                city: "Haifa".to_string(),
                street: "HaNamal".to_string(),
                house_number: 3,
                zip: Some("31000".to_string()),
            },
            user_id: owner,
        }
    }
}
