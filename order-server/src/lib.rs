//! Order Server - HTTP service for order records
//!
//! # Architecture
//!
//! ```text
//! order-server/src/
//! ├── core/          # config, state, server bootstrap
//! ├── db/            # SurrealDB connection and order repositories
//! ├── services/      # OrderService, id and clock generators
//! ├── api/           # HTTP handlers and extractors
//! ├── routes/        # router assembly and tower middleware
//! ├── middleware/    # request logging
//! └── utils/         # logger, validation
//! ```
//!
//! Requests flow handler → [`OrderService`] → [`OrderRepository`]; the
//! repository is either the in-memory store or a SurrealDB table, chosen
//! by [`Config::backend`].

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

pub use core::{Backend, Config, Server, ServerState};
pub use db::repository::{OrderRepository, RepoError, RepoResult};
pub use services::{Clock, IdGenerator, OrderService, SystemClock, UuidGenerator};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
