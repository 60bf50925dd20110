use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    raro_observability::init();

    let config = raro_api::config::ApiConfig::from_env();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = raro_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("showcase listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
