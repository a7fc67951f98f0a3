//! # Blog API Server
//!
//! Actix-web implementation of the `/posts` CRUD API.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::build_server;
pub use state::{AppState, StoreKind};
