use anyhow::Context;

use usuarios_api::{app, banner, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    usuarios_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    let addr = listener.local_addr()?;

    println!("{}", banner::render(addr));
    tracing::info!(%addr, seed = config.seed, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
