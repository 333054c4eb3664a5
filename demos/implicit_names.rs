//! Example demonstrating how implicit names are matched

use envfield::{keys, EnvConfig, EnvField};

#[derive(Debug, EnvConfig)]
#[allow(non_snake_case)]
struct Config {
    // Tried as: apiURL, APIURL, apiurl, api_url, API_URL, api_url
    pub apiURL: EnvField<String>,

    // Snake case members only have case variants: retries, RETRIES
    pub retries: EnvField<u8>,

    // Look up a different logical name
    #[env(rename = "requestTimeout")]
    pub timeout: EnvField<u64>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("API_URL", "https://api.example.com");
    std::env::set_var("RETRIES", "3");
    std::env::set_var("request_timeout", "30");

    println!("Candidates for apiURL: {:?}", keys::expand_cases(&keys::candidate_keys("apiURL", None)));

    let mut config = Config {
        apiURL: EnvField::implicit(),
        retries: EnvField::implicit(),
        timeout: EnvField::implicit(),
    };
    config.load_env()?;

    println!("Configuration:");
    println!("  API URL: {}", config.apiURL);
    println!("  Retries: {}", config.retries);
    println!("  Timeout: {}", config.timeout);

    Ok(())
}
