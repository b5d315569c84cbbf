#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    config::RuntimeConfiguration,
    error::{BindListenerSnafu, MahasiswaResult, ServeSnafu, TracingSnafu},
    routes::router,
    state::MahasiswaState,
};
use snafu::ResultExt;
use sqlx::mysql::MySqlPoolOptions;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;
mod views;

async fn shutdown_signal(state: MahasiswaState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
    state.sensible_shutdown().await;
}

fn setup_tracing() -> MahasiswaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(FmtSubscriber::builder().with_env_filter(filter).finish())
        .context(TracingSnafu)
}

async fn run() -> MahasiswaResult<()> {
    let config = RuntimeConfiguration::new()?;

    info!(db = %config.db_config(), "Connecting to MySQL");
    let options = MySqlPoolOptions::new().max_connections(config.max_connections());
    let state = MahasiswaState::new(options, &config).await?;
    info!("Connected to MySQL!");

    let app = router(state.clone());

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip)
        .await
        .context(BindListenerSnafu { addr: server_ip })?;

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .context(ServeSnafu)
}

#[tokio::main]
async fn main() -> ExitCode {
    //a missing .env is fine, the real environment may have everything
    let dotenv = dotenvy::dotenv();

    if let Err(e) = setup_tracing() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    info!("`tracing` online");

    match dotenv {
        Ok(path) => info!(?path, "Loaded env vars from file"),
        Err(e) if e.not_found() => info!("No .env file, using the process environment"),
        Err(e) => {
            error!(?e, "Unable to load .env file");
            return ExitCode::FAILURE;
        }
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(?e, "{e}");
            ExitCode::FAILURE
        }
    }
}
