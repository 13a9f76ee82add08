use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt_secret: String,
    /// Tokens carry no expiry unless this is set.
    pub token_expiry_secs: Option<u64>,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            db_url: Self::get_env("DATABASE_URL"),
            jwt_secret: Self::get_env("JWT_SECRET"),
            token_expiry_secs: env::var("TOKEN_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}
