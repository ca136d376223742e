use std::io;

use calbox_app::app::{run, AppConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let config = AppConfig::from_env();
    if let Err(err) = run(config, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Failed to start Calbox: {err:#}");
    }
}
