//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod fixtures;
mod repository;

pub use fixtures::FixtureGenerator;
pub use repository::{BaseRepository, BlogPostRepository};
