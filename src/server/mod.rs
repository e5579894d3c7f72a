//! HTTP adapter.
//!
//! ## Routes
//!
//! - `GET  /`        — greeting
//! - `POST /`        — play a match (`?hand=stone&user=taro`)
//! - `GET  /health`  — backend liveness
//! - `GET  /{id}`    — a previously played match
pub mod handlers;

use crate::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

/// Greeting prefix served on `GET /`.
#[derive(Debug, Clone)]
pub struct Greeting(pub String);

/// Route table, shared by the server and tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handlers::malformed))
        .route("/", web::get().to(handlers::greet))
        .route("/", web::post().to(handlers::play))
        .route("/health", web::get().to(handlers::health))
        .route("/{id}", web::get().to(handlers::lookup));
}

/// Pick the backend the configuration asks for.
pub async fn backend(config: &Config) -> anyhow::Result<Arc<dyn Backend>> {
    match config.db_url.as_deref() {
        #[cfg(feature = "database")]
        Some(url) => {
            let client: Arc<dyn Backend> = db(url).await?;
            Ok(client)
        }
        #[cfg(not(feature = "database"))]
        Some(_) => Err(anyhow::anyhow!("built without database support")),
        None => {
            log::warn!("DB_URL not set, matches will only be kept in memory");
            Ok(Arc::new(Memory::default()))
        }
    }
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = Store::new(backend(&config).await?);
    let janken = web::Data::new(Janken::new(store, Arc::new(Random)));
    let greeting = web::Data::new(Greeting(config.greeting.clone()));
    log::info!("starting janken server on {}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(janken.clone())
            .app_data(greeting.clone())
            .configure(routes)
    })
    .workers(config.workers)
    .bind(&config.bind)?
    .run()
    .await?;
    Ok(())
}
