//! Yalla Nadrus HTTP Server
//!
//! Axum-based server for the marketplace landing page: serves the built
//! WASM front end and a small read-only JSON API over the tutor catalog.

mod handlers;
mod state;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutor_directory::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};

use crate::handlers::{
    booking_link, get_tutor, health_check, list_subjects, list_tutors, search_tutors,
};
use crate::state::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Load the catalog once; it is never mutated afterwards
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => {
            tracing::info!("TUTOR_CATALOG_PATH not set - serving embedded catalog");
            Box::new(EmbeddedCatalog::new())
        }
    };
    let catalog = source.load()?;
    tracing::info!("✓ Loaded {} tutors from {}", catalog.len(), source.name());

    if !config.static_dir.exists() {
        tracing::warn!("⚠ Static dir {} not found - front end will 404", config.static_dir.display());
        tracing::warn!("  Build it with: trunk build --release --dist {}", config.static_dir.display());
    }

    tracing::info!("Booking link: {}", config.booking.url(None));

    let state = AppState::new(catalog, source.name(), config.booking.clone());
    let app = router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 tutor-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  GET  /api/subjects        - Subject catalog");
    tracing::info!("  GET  /api/tutors          - Full tutor catalog");
    tracing::info!("  GET  /api/tutors/search   - Filtered, sorted tutors");
    tracing::info!("  GET  /api/tutors/{{id}}     - Single tutor");
    tracing::info!("  GET  /api/booking-link    - Booking deep link");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths fall through to the single-page app
    let front_end = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Directory API
        .route("/api/subjects", get(list_subjects))
        .route("/api/tutors", get(list_tutors))
        .route("/api/tutors/search", get(search_tutors))
        .route("/api/tutors/{id}", get(get_tutor))
        .route("/api/booking-link", get(booking_link))

        // Static files (WASM frontend)
        .fallback_service(front_end)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use tutor_directory::BookingLink;

    fn test_app() -> Router {
        let catalog = EmbeddedCatalog::new().load().unwrap();
        let config = ServerConfig::default();
        router(
            AppState::new(catalog, "embedded", BookingLink::default()),
            &config.static_dir,
        )
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(tutors: &serde_json::Value) -> Vec<u64> {
        tutors
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tutors"], 6);
        assert_eq!(body["catalog_source"], "embedded");
    }

    #[tokio::test]
    async fn test_subjects_and_tutors() {
        let (status, subjects) = get_json("/api/subjects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(subjects.as_array().unwrap().len(), 12);
        assert_eq!(subjects[0]["key"], "math");

        let (status, tutors) = get_json("/api/tutors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&tutors), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(tutors[1]["delivery_mode"], "in-person");
    }

    #[tokio::test]
    async fn test_search() {
        let (status, body) = get_json("/api/tutors/search?subject=math&sort=price").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(ids(&body["tutors"]), vec![2]);

        let (_, body) = get_json("/api/tutors/search?q=IGCSE&sort=reviews").await;
        assert_eq!(ids(&body["tutors"]), vec![2, 3]);
        assert_eq!(body["filters"]["sort_key"], "review-count");

        let (_, body) = get_json("/api/tutors/search?q=zzz").await;
        assert_eq!(body["count"], 0);
        assert_eq!(ids(&body["tutors"]), Vec::<u64>::new());
    }

    #[tokio::test]
    async fn test_search_rejects_unknown_values() {
        let (status, body) = get_json("/api/tutors/search?mode=hybrid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_FILTER");
    }

    #[tokio::test]
    async fn test_get_tutor() {
        let (status, body) = get_json("/api/tutors/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rating"], 5.0);

        let (status, body) = get_json("/api/tutors/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_booking_link() {
        let (_, body) = get_json("/api/booking-link?message=hello%20there").await;
        assert_eq!(body["url"], "https://wa.me/00966507267217?text=hello%20there");

        let (_, body) = get_json("/api/booking-link").await;
        assert_eq!(body["url"], "https://wa.me/00966507267217");
    }
}
