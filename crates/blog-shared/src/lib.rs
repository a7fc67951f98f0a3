//! # Blog Shared
//!
//! Wire types shared by the API server and the contract verifier.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
