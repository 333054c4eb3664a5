// Only structs can be loaded

use envfield::EnvConfig;

#[derive(EnvConfig)]
enum Mode {
    Fast,
}

fn main() {
    let _ = Mode::Fast;
}
