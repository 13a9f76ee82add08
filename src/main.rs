use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use bcard::config::EnvConfig;
use bcard::db::service::DbService;
use bcard::routes::configure_routes;
use bcard::validation::Schemas;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DbService::new(&config.db_url)
            .await
            .expect("Failed to initialize DbService"),
    );

    // Schemas are immutable; built once and handed to every worker
    let schemas = web::Data::new(Schemas::new());
    let config_data = web::Data::new(config);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(schemas.clone())
            .app_data(config_data.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
