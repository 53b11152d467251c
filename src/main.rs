use hello_principal::{Config, Error, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = Config::load()?.socket_addr()?;

    Server::bind(addr)
        .await?
        .serve(hello_principal::app())
        .await
}
