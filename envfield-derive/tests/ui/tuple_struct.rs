// Tuple structs have no member names to derive lookups from

use envfield::{EnvConfig, EnvField};

#[derive(EnvConfig)]
struct Config(EnvField<String>);

fn main() {
    let config = Config(EnvField::implicit());
    let _ = config.0;
}
