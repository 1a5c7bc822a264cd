//! DNG Booking HTTP Server
//!
//! Main entry point for the booking API server.

use std::{sync::Arc, time::Duration};

use application::ports::BookingSinkPort;
use application::services::BookingService;
use infrastructure::{AppConfig, SheetsBookingSink, SqliteCounterStore, create_pool};
use integration_whatsapp::PaymentHandoff;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dng_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("DNG Booking v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.path,
        "Configuration loaded"
    );

    // A bad route sheet should stop the server before it takes bookings.
    let catalog = Arc::new(
        config
            .catalog
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid destination catalog: {e}"))?,
    );
    info!(destinations = catalog.len(), "Destination catalog loaded");

    // Counter store
    let pool = create_pool(&config.database)
        .map_err(|e| anyhow::anyhow!("Failed to open counter database: {e}"))?;
    let counters = Arc::new(SqliteCounterStore::new(Arc::new(pool)));

    // Optional spreadsheet bridge
    let booking_sink: Option<Arc<dyn BookingSinkPort>> = match &config.sheets {
        Some(sheets) => {
            let sink = SheetsBookingSink::from_config(sheets)
                .map_err(|e| anyhow::anyhow!("Failed to initialize sheets bridge: {e}"))?;
            info!(base_url = %sheets.base_url, "Spreadsheet bridge enabled");
            Some(Arc::new(sink))
        },
        None => {
            warn!("No spreadsheet bridge configured; bookings will not be saved remotely");
            None
        },
    };

    // Booking pipeline
    let mut booking_service = BookingService::new(Arc::clone(&catalog), counters);
    if let Some(sink) = &booking_sink {
        booking_service = booking_service.with_sink(Arc::clone(sink));
    }

    // Payment handoff
    let handoff = PaymentHandoff::new(config.momo.to_handoff_config())
        .map_err(|e| anyhow::anyhow!("Invalid payment handoff config: {e}"))?;

    let state = AppState {
        booking_service: Arc::new(booking_service),
        catalog,
        handoff: Arc::new(handoff),
        booking_sink,
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => warn!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to finish"
    );
}
