use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_session::{
    app_state::AppState,
    config::Config,
    handlers::{configure_session_routes, health_check},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;

    let session_service = state.session_service.clone();
    tokio::spawn(async move {
        let snapshot = session_service.load().await;
        log::info!("Initial load finished in phase {:?}", snapshot.phase);
    });

    log::info!("Starting quiz session server on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(health_check)
            .configure(configure_session_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
