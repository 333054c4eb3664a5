//! Example demonstrating a hand-written field table and a custom value type

use envfield::{load, DisplayEnvValue, EnvConfig, EnvError, EnvField, FieldSlot, FromEnvValue};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LogFormat {
    Text,
    Json,
}

impl FromEnvValue for LogFormat {
    fn from_env_value(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl DisplayEnvValue for LogFormat {
    fn fmt_env_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

struct Config {
    log_format: EnvField<LogFormat>,
    worker_threads: EnvField<usize>,
}

impl EnvConfig for Config {
    fn fields(&mut self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::new("logFormat", &mut self.log_format),
            FieldSlot::new("workerThreads", &mut self.worker_threads),
        ]
    }
}

fn main() {
    std::env::set_var("SVC_LOG_FORMAT", "JSON");

    let mut config = Config {
        log_format: EnvField::implicit_or(LogFormat::Text),
        worker_threads: EnvField::implicit(),
    };

    // SVC_WORKER_THREADS is not set and has no default
    match load(&mut config, Some("SVC")) {
        Ok(()) => println!("Loaded"),
        Err(err @ EnvError::MissingOrUnparsable { .. }) => println!("Failed: {}", err),
        Err(err) => println!("Unexpected error: {}", err),
    }

    println!("Log format: {}", config.log_format);
    println!("Worker threads: {}", config.worker_threads);

    // Explicit fields without a default are startup preconditions
    if let Err(err) = EnvField::<usize>::named("SVC_REQUIRED_SHARDS") {
        eprintln!("{}", err);
        if err.is_fatal() {
            std::process::exit(1);
        }
    }
}
