//! Database Module
//!
//! Connection bootstrap for the SurrealDB backend and the order repositories.

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;

use crate::core::config::DatabaseConfig;
use crate::utils::{AppError, AppResult};

/// Database service - owns a SurrealDB client handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect, sign in when credentials are configured, select
    /// namespace/database and check the connection with a ping query
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let db = connect(config.url.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {}: {e}", config.url)))?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Database sign-in failed: {e}")))?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        let mut ping = db
            .query("RETURN 1")
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        let _: Option<i64> = ping
            .take(0)
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let service = DbService::new(&DatabaseConfig::default()).await.unwrap();
        let mut result = service.db.query("RETURN 41 + 1").await.unwrap();
        let value: Option<i64> = result.take(0).unwrap();
        assert_eq!(value, Some(42));
    }

    #[tokio::test]
    async fn test_unsupported_scheme_fails() {
        let config = DatabaseConfig {
            url: "bogus://nowhere".into(),
            ..Default::default()
        };
        let err = DbService::new(&config).await.err().unwrap();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
