mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "kharcha={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let ledger = match engine::Ledger::open(settings.store.to_store()) {
        Ok(ledger) => ledger,
        Err(err) => {
            tracing::error!("failed to open ledger: {err}");
            return Err(err.into());
        }
    };

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(ledger, listener).await?;

    Ok(())
}
