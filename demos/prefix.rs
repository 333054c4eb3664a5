//! Example demonstrating prefixes

use envfield::{load, EnvConfig, EnvField};

#[derive(Debug, EnvConfig)]
#[env(prefix = "MYAPP")]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    pub database_url: EnvField<String>,
    pub api_key: EnvField<String>,
    pub port: EnvField<u16>,
}

impl Config {
    fn new() -> Self {
        Self {
            database_url: EnvField::implicit(),
            api_key: EnvField::implicit(),
            port: EnvField::implicit_or(8080),
        }
    }
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("STAGING_DATABASE_URL", "postgres://staging/db");
    std::env::set_var("STAGING_API_KEY", "staging-key");

    // Prefix from #[env(prefix = "MYAPP")]
    let mut config = Config::new();
    config.load_env()?;

    println!("Configuration with prefix 'MYAPP':");
    println!("  Database URL: {}", config.database_url.get()?);
    println!("  API Key: {}", config.api_key.get()?);
    println!("  Port: {}", config.port.get()?);

    // Prefix chosen at runtime; the trailing underscore is optional
    let mut staging = Config::new();
    load(&mut staging, Some("STAGING_"))?;

    println!("Configuration with prefix 'STAGING_':");
    println!("  Database URL: {}", staging.database_url.get()?);
    println!("  API Key: {}", staging.api_key.get()?);

    Ok(())
}
