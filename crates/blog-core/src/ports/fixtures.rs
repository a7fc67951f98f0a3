use chrono::{DateTime, Utc};

/// Source of synthetic field values for seeding and request payloads.
///
/// Kept free of any particular faking library so callers can plug in
/// deterministic generators in tests.
pub trait FixtureGenerator: Send + Sync {
    /// A short sentence, suitable for a title.
    fn sentence(&self) -> String;

    /// A few sentences, suitable for post content.
    fn paragraph(&self) -> String;

    fn first_name(&self) -> String;

    fn last_name(&self) -> String;

    /// A timestamp strictly before now.
    fn past_timestamp(&self) -> DateTime<Utc>;
}
