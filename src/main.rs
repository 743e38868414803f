pub use error::Error;
mod command;
mod conf;
mod error;
mod model;
mod service;
use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let conf_path = args.get(1).map(String::as_str).unwrap_or("config.toml");

    let conf = conf::Conf::load(conf_path)?;
    command::reconcile::run(&conf).await
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
