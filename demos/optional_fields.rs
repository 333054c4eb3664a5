//! Example demonstrating Option<T> for optional fields

use envfield::{EnvConfig, EnvField};

#[derive(Debug, EnvConfig)]
struct Config {
    // Required field
    pub app_name: EnvField<String>,

    // Optional fields - None if not set, because None is their default
    pub api_key: EnvField<Option<String>>,
    pub port: EnvField<Option<u16>>,
    pub debug: EnvField<Option<bool>>,

    // Explicit optional field resolving to None when unset
    pub region: EnvField<Option<String>>,
}

fn main() -> anyhow::Result<()> {
    // Set only some environment variables
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("PORT", "8080");
    // API_KEY, DEBUG, DEPLOY_REGION not set

    let mut config = Config {
        app_name: EnvField::implicit(),
        api_key: EnvField::implicit_or(None),
        port: EnvField::implicit_or(None),
        debug: EnvField::implicit_or(None),
        region: EnvField::named_optional("DEPLOY_REGION"),
    };
    config.load_env()?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name.get()?);
    println!("  API Key: {:?}", config.api_key.get()?); // None
    println!("  Port: {:?}", config.port.get()?); // Some(8080)
    println!("  Debug: {:?}", config.debug.get()?); // None
    println!("  Region: {:?}", config.region.get()?); // None

    Ok(())
}
