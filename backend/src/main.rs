//! Backend entry-point: wires the insights API together with the browser
//! client page and the OpenAPI docs.

use std::env;
use std::net::SocketAddr;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use insights_backend::outbound::persistence::{DbPool, DieselInsightRepository, PoolConfig};
use insights_backend::server::{ServerConfig, create_server};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "tmp/db.sqlite3";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let port = match env::var("SERVER_PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| {
            std::io::Error::other(format!("invalid SERVER_PORT value {raw:?}: {e}"))
        })?,
        Err(_) => DEFAULT_PORT,
    };
    let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

    let pool = DbPool::new(PoolConfig::new(database_path))
        .await
        .map_err(std::io::Error::other)?;
    DieselInsightRepository::new(pool.clone())
        .ensure_schema()
        .await
        .map_err(std::io::Error::other)?;

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));
    create_server(ServerConfig::new(bind_addr, pool))?.await
}
