mod model;
mod server;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, data::deck::DeckRepository, error::AppError, router,
    service::deck::DeckService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let deck_service = DeckService::new(Arc::new(DeckRepository::new(db.clone())));

    let app = router::router()
        .with_state(AppState::new(deck_service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connection closed");

    Ok(())
}
