use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use rootdown::{
    api::{openapi::ApiDoc, routes},
    config::ServerConfig,
    store::{GameStore, MemoryStore},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_addr = config.bind_addr.clone();
    info!(
        "🌱 RootDown started at http://{bind_addr} ({} mode, {}x{} lawn)",
        config.game.mode, config.game.grid_width, config.game.grid_height
    );
    info!("   GET  /gamestate");
    info!("   POST /reset /water /plant /move /mow /nextday");
    info!("   GET  /plants");
    info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");

    let store: Arc<dyn GameStore> = Arc::new(MemoryStore::with_capacity(
        config.game,
        config.max_sessions,
    ));
    let store = web::Data::from(store);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(routes::json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
