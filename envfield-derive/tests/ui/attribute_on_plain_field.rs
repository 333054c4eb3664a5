// Members that are not EnvField are never loaded, so attributes on them are mistakes

use envfield::{EnvConfig, EnvField};

#[derive(EnvConfig)]
struct Config {
    port: EnvField<u16>,

    #[env(rename = "hostName")]
    host: String,
}

fn main() {
    let config = Config {
        port: EnvField::implicit(),
        host: String::new(),
    };
    let _ = (config.port, config.host);
}
