/**
 * Server Entry Point
 *
 * Loads environment configuration, initializes tracing, assembles the
 * application, and serves it.
 */

use panelkit::backend::{create_app, ServerSettings};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panelkit=info,tower_http=info".into()),
        )
        .init();

    let settings = match ServerSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };
    let port = settings.port;

    let app = match create_app(settings).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Startup failed: {}", err);
            std::process::exit(1);
        }
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
