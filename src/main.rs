use aussieeat_backend_rs::{app::App, types::Config};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let app = match App::new(config).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = app.serve().await {
        tracing::error!("Server stopped: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
