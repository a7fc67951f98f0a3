//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! post storage (in-memory and PostgreSQL) and random fixture generation.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM; without it only
//!   the in-memory store is built

pub mod database;
pub mod fixtures;

pub use database::{DatabaseConfig, InMemoryBlogPostRepository};
pub use fixtures::RandomFixtureGenerator;

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresBlogPostRepository};
