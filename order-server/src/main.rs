use order_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration
    let config = Config::from_env()?;

    // 3. Logging
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        backend = %config.backend,
        "Order server starting..."
    );

    // 4. State (repository backend + order service)
    let state = ServerState::initialize(&config).await?;

    // 5. HTTP server
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
