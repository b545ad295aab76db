mod api;
mod config;
mod error;
mod logger;
mod pages;
mod setup;
mod views;

#[cfg(test)]
mod test_helpers;

use actix_web::{web, App, HttpServer};
use config::AppConfig;
use pages::Templates;
use setup::set_up_db;
use tracing_actix_web::TracingLogger;

#[actix_web::main] // The "main" function of the program
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            std::process::exit(2);
        }
    };
    logger::init(config.log_format);

    let db = set_up_db(&config).await.map_err(std::io::Error::other)?;
    let templates = web::Data::new(Templates::new().map_err(std::io::Error::other)?);
    let schema = web::Data::new(graphql::build_schema(db.clone()));
    let db = web::Data::new(db);

    tracing::info!(address = %config.bind_address, "listening");
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(db.clone())
            .app_data(templates.clone())
            .app_data(schema.clone())
            .configure(views::configure)
            .configure(api::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
