use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use nlg_core::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/sources", get(handlers::list_sources))
        .route("/api/articles", get(handlers::search_articles))
        .route("/api/newsletter", post(handlers::create_newsletter))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use nlg_core::{Article, Newsletter, Result};
}
