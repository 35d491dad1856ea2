//! Backend entry-point: loads settings, prepares the store, and serves `POST /`.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobboard::outbound::persistence::{DbPool, PoolConfig, create_schema};
use server::{ServerConfig, ServerSettings, create_server};

/// Create the schema and open the connection pool.
async fn connect(database_url: &str, max_size: u32) -> std::io::Result<DbPool> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || create_schema(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("schema setup task failed: {err}")))?
        .map_err(std::io::Error::other)?;

    DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(url) => {
            let pool = connect(url, settings.pool_max_size()).await?;
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("JOBBOARD_DATABASE_URL not set; users are kept in process memory");
        }
    }

    info!(%bind_addr, "starting job board server");
    create_server(config)?.await
}
