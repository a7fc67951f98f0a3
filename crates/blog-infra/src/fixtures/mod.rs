//! Fixture generation for seeding and request payloads.

mod random;
mod words;

pub use random::RandomFixtureGenerator;
