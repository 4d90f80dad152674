use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use quiz_session_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;
    let state = web::Data::new(Arc::new(state));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
