use serde::Deserialize;
use std::process::ExitCode;
use tablefor_db::client::{DbClient, DbConfig, DbError};
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod data;
mod seed;

#[derive(Debug, Error)]
enum SeedError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
    #[error(transparent)]
    Database(#[from] DbError),
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
struct Env {
    tablefor_project_id: String,
    tablefor_api_key: String,
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tablefor_seed=debug,reqwest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn get_env() -> Result<Env, SeedError> {
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            debug!("No .dotenv file found");
        } else {
            return Err(e.into());
        }
    }

    envy::from_env().map_err(SeedError::from)
}

async fn run() -> Result<(), SeedError> {
    let env = get_env()?;

    let db = DbClient::new(DbConfig {
        project_id: env.tablefor_project_id,
        api_key: env.tablefor_api_key,
    })?;

    seed::reseed(&db).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    install_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}
