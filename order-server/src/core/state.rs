//! Server state shared by every handler

use std::sync::Arc;

use crate::core::{Backend, Config};
use crate::db::DbService;
use crate::db::repository::{MemoryOrderRepository, OrderRepository, SurrealOrderRepository};
use crate::services::{IdGenerator, OrderService, UuidGenerator};
use crate::utils::AppResult;

/// Application state, cheap to clone
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub orders: OrderService,
}

impl ServerState {
    /// Build the repository selected by `config.backend` and the service on top
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

        let repo: Arc<dyn OrderRepository> = match config.backend {
            Backend::Memory => Arc::new(MemoryOrderRepository::new(ids)),
            Backend::Surreal => {
                let db = DbService::new(&config.database).await?;
                Arc::new(SurrealOrderRepository::new(db.db))
            }
        };

        tracing::info!(backend = repo.backend(), "Order repository ready");
        Ok(Self::with_repository(config.clone(), repo))
    }

    /// State over an existing repository with default id and clock sources
    pub fn with_repository(config: Config, repo: Arc<dyn OrderRepository>) -> Self {
        let orders = OrderService::with_defaults(repo, config.request_timeout());
        Self { config, orders }
    }

    /// State over a fully assembled service
    pub fn with_service(config: Config, orders: OrderService) -> Self {
        Self { config, orders }
    }
}
