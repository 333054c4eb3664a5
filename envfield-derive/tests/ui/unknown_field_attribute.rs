// Explicit names are given to EnvField::named, not through attributes

use envfield::{EnvConfig, EnvField};

#[derive(EnvConfig)]
struct Config {
    #[env(name = "PORT")]
    port: EnvField<u16>,
}

fn main() {
    let config = Config {
        port: EnvField::implicit(),
    };
    let _ = config.port;
}
