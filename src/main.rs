use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hello_backend::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hello_backend=info,tower_http=info")),
        )
        .init();

    // a malformed PORT stops the process before anything binds
    let cfg = Config::from_env()?;

    server::run(cfg).await

}
