use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use spa_reservations::config::AppConfig;
use spa_reservations::handlers;
use spa_reservations::services::content;
use spa_reservations::services::email::emailjs::EmailJsProvider;
use spa_reservations::services::reservation::ReservationFlow;
use spa_reservations::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let reservations = match config.reservation_settings()? {
        Some(settings) => {
            tracing::info!(
                service_id = %settings.service_id,
                owner_whatsapp = %settings.owner_whatsapp_number,
                "reservations enabled (EmailJS)"
            );
            let email = EmailJsProvider::new(
                config.emailjs_api_url.clone(),
                config.emailjs_public_key.clone(),
                config.emailjs_private_key.clone(),
            );
            Some(ReservationFlow::new(settings, Box::new(email)))
        }
        None => {
            tracing::warn!("EMAILJS_PUBLIC_KEY not set, reservations are disabled");
            None
        }
    };

    let content = content::load_all(Path::new(&config.data_dir)).await;

    let cors = match &config.allowed_origin {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<HeaderValue>()
                .context("ALLOWED_ORIGIN is not a valid header value")?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST])
    .allow_headers(Any);

    let state = Arc::new(AppState {
        reservations,
        content,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/reservations",
            post(handlers::reservation::submit_reservation),
        )
        .route("/api/site/config", get(handlers::content::get_site_config))
        .route("/api/services", get(handlers::content::get_services))
        .route("/api/pricing", get(handlers::content::get_pricing))
        .route("/api/testimonials", get(handlers::content::get_testimonials))
        .route("/api/gallery", get(handlers::content::get_gallery))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
