use sample_service::{app, config};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    config::load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "sample service listening");

    // Held for the lifetime of the process; the server runs until killed.
    let (_shutdown_tx, shutdown_rx) = oneshot::channel();
    app::run(listener, shutdown_rx).await;

    Ok(())
}
