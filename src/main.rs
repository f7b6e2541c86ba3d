use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barberbook::config::AppConfig;
use barberbook::handlers;
use barberbook::services::auth::StaticPasswordAuth;
use barberbook::services::booking::BookingRepository;
use barberbook::services::notify::{ConsoleNotifier, Notifier, TwilioSmsNotifier};
use barberbook::state::AppState;
use barberbook::store::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = SqliteStore::open(&config.database_url)?;

    let notifier: Box<dyn Notifier> = if config.twilio_account_sid.is_empty() {
        tracing::info!("using console notifier (to: {})", config.notify_phone);
        Box::new(ConsoleNotifier::new(config.notify_phone.clone()))
    } else {
        tracing::info!("using Twilio SMS notifier (to: {})", config.notify_phone);
        Box::new(TwilioSmsNotifier::new(
            config.twilio_account_sid.clone(),
            config.twilio_auth_token.clone(),
            config.twilio_phone_number.clone(),
            config.notify_phone.clone(),
        ))
    };

    let state = Arc::new(AppState {
        repo: BookingRepository::new(Box::new(store), notifier),
        auth: Box::new(StaticPasswordAuth::new(config.admin_password.clone())),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/", get(handlers::pages::index_page))
        .route("/admin", get(handlers::pages::admin_page))
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::booking::get_services))
        .route("/api/gallery", get(handlers::booking::get_gallery))
        .route("/api/slots", get(handlers::booking::get_slots))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/:id",
            delete(handlers::admin::delete_booking),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
