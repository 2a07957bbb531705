mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::post_service::PostService;
use crate::application::tag_service::TagService;
use crate::data::post_repository::SqlitePostRepository;
use crate::data::tag_repository::SqliteTagRepository;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use infrastructure::config::AppConfig;
use infrastructure::database::{create_pool, reset_and_seed};
use infrastructure::fixtures::Fixtures;
use infrastructure::logging::init_logging;
use presentation::middleware::{RequestIdMiddleware, TimingMiddleware};
use presentation::routes;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    if config.seed_on_start {
        reset_and_seed(&pool, &Fixtures::demo()).await?;
    }

    let post_service = PostService::new(Arc::new(SqlitePostRepository::new(pool.clone())));
    let tag_service = TagService::new(Arc::new(SqliteTagRepository::new(pool)));

    let config_data = config.clone();

    info!(host = %config.host, port = config.port, "HTTP server starting");

    HttpServer::new(move || {
        let cors = routes::build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(cors)
            .app_data(web::Data::new(post_service.clone()))
            .app_data(web::Data::new(tag_service.clone()))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
