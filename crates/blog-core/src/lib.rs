//! # Blog Core
//!
//! The domain layer of the blog post API.
//! Entities, validation rules and the ports that storage and fixture
//! backends implement. No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
