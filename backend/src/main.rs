//! Service entry-point: configuration, tracing, pool, and server startup.

use std::net::SocketAddr;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig};
use user_service::server::{ServerConfig, create_server};

/// Command-line and environment configuration.
#[derive(Parser, Debug)]
#[command(name = "user-service", about = "CRUD HTTP service over the user directory")]
struct Cli {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,

    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pool_size: u32,
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

    let cli = Cli::parse();

    let pool_config = PoolConfig::new(&cli.database_url).with_max_size(cli.pool_size);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(cli.bind_addr, pool),
    )?;

    info!(bind_addr = %cli.bind_addr, "user-service listening");
    let result = server.await;

    // Fail liveness probes while the process drains; the pool closes when
    // the server's clone of the handle is dropped.
    health_state.mark_unhealthy();
    result
}
