//! # Blog Verifier
//!
//! Checks that a running `/posts` API honours its CRUD contract.
//!
//! Every case follows the same lifecycle: seed the store with synthetic
//! posts, exercise one endpoint over HTTP, compare the response against the
//! store, then tear the store down again. The store is reached through the
//! [`BlogPostRepository`](blog_core::ports::BlogPostRepository) port and
//! synthetic values come from a
//! [`FixtureGenerator`](blog_core::ports::FixtureGenerator).

/// Fail the current check with an assertion message.
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::VerifyError::Assertion(format!($($arg)+)));
        }
    };
}

pub mod client;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod verifier;

pub use client::{ApiClient, ApiReply};
pub use error::VerifyError;
pub use report::{Case, CaseOutcome, SuiteReport};
pub use verifier::{ContractVerifier, DEFAULT_SEED_COUNT};
