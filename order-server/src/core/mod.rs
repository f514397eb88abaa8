//! Core module - configuration, state and server
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared application state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Backend, Config, DatabaseConfig};
pub use server::Server;
pub use state::ServerState;
