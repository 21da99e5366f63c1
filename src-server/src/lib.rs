//! Todo Backend
//!
//! Layered architecture:
//! - domain: Core entity and business rules
//! - repository: Data access abstractions and the SQLite implementation
//! - routes: HTTP handlers consumed by the browser client and the CLI
//! - cli: the `todo` command-line client

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod routes;

use tokio::signal;

use config::Config;
use error::ServerError;
use repository::{init_db, TodoRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_repo: TodoRepository,
}

impl AppState {
    pub async fn open(config: &Config) -> Result<Self, ServerError> {
        let db_state = init_db(&config.database_url).await?;
        Ok(Self {
            todo_repo: TodoRepository::new(db_state.connection()),
        })
    }
}

/// Install the tracing subscriber, honoring `RUST_LOG` when set
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Serve the API and static client until Ctrl+C or SIGTERM
pub async fn run(config: Config) -> Result<(), ServerError> {
    let state = AppState::open(&config).await?;
    let app = routes::setup_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        db = %config.database_url.display(),
        static_dir = %config.static_dir.display(),
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
}
