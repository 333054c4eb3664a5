//! Example demonstrating explicit and implicit fields
//!
//! Run with `RUST_LOG=envfield=debug` to see how each field was resolved.

use envfield::{EnvConfig, EnvField};
use tracing_subscriber::EnvFilter;

#[derive(Debug, EnvConfig)]
struct Config {
    // Explicit: read from DATABASE_URL as soon as the struct is built
    pub database_url: EnvField<String>,

    // Explicit with a fallback
    pub port: EnvField<u16>,

    // Implicit: max_connections, MAX_CONNECTIONS or max_connections
    pub max_connections: EnvField<u32>,

    // Implicit with a fallback
    pub debug: EnvField<bool>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    std::env::set_var("DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MAX_CONNECTIONS", "42");

    let mut config = Config {
        database_url: EnvField::named("DATABASE_URL")?,
        port: EnvField::named_or("PORT", 8080),
        max_connections: EnvField::implicit(),
        debug: EnvField::implicit_or(false),
    };
    config.load_env()?;

    println!("Configuration:");
    println!("  Database URL: {}", config.database_url.get()?);
    println!("  Port: {}", config.port.get()?);
    println!("  Max connections: {}", config.max_connections.get()?);
    println!("  Debug: {}", config.debug.get()?);

    Ok(())
}
