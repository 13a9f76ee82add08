use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connection handle shared by every handler. Schema migrations run at
/// startup; the same migrator covers Postgres in production and SQLite in
/// tests.
#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}
