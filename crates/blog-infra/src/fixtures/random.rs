use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use blog_core::ports::FixtureGenerator;

use super::words::{FIRST_NAMES, LAST_NAMES, LOREM};

/// How far back `past_timestamp` may reach.
const PAST_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Word-list fixture generator driven by `rand`.
///
/// Build with [`RandomFixtureGenerator::seeded`] for reproducible output.
pub struct RandomFixtureGenerator {
    rng: Mutex<StdRng>,
}

impl RandomFixtureGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }

    fn pick(rng: &mut StdRng, words: &[&'static str]) -> &'static str {
        words.choose(rng).copied().unwrap_or_default()
    }

    fn sentence_with(rng: &mut StdRng) -> String {
        let len = rng.gen_range(4..=9);
        let words: Vec<&str> = (0..len).map(|_| Self::pick(rng, LOREM)).collect();
        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }
}

impl Default for RandomFixtureGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureGenerator for RandomFixtureGenerator {
    fn sentence(&self) -> String {
        self.with_rng(Self::sentence_with)
    }

    fn paragraph(&self) -> String {
        self.with_rng(|rng| {
            let len = rng.gen_range(3..=6);
            (0..len)
                .map(|_| Self::sentence_with(rng))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    fn first_name(&self) -> String {
        self.with_rng(|rng| Self::pick(rng, FIRST_NAMES).to_string())
    }

    fn last_name(&self) -> String {
        self.with_rng(|rng| Self::pick(rng, LAST_NAMES).to_string())
    }

    fn past_timestamp(&self) -> DateTime<Utc> {
        let offset = self.with_rng(|rng| rng.gen_range(1..=PAST_WINDOW_SECS));
        Utc::now() - Duration::seconds(offset)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_shape() {
        let generator = RandomFixtureGenerator::new();
        for _ in 0..20 {
            let sentence = generator.sentence();
            assert!(sentence.ends_with('.'));
            assert!(sentence.chars().next().unwrap().is_uppercase());
            let words = sentence.split_whitespace().count();
            assert!((4..=9).contains(&words), "{sentence}");
        }
    }

    #[test]
    fn test_names_are_non_empty() {
        let generator = RandomFixtureGenerator::new();
        for _ in 0..20 {
            assert!(!generator.first_name().is_empty());
            assert!(!generator.last_name().is_empty());
        }
    }

    #[test]
    fn test_timestamps_are_in_the_past() {
        let generator = RandomFixtureGenerator::new();
        let now = Utc::now();
        for _ in 0..50 {
            let ts = generator.past_timestamp();
            assert!(ts < now);
            assert!(ts >= now - Duration::seconds(PAST_WINDOW_SECS + 5));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = RandomFixtureGenerator::seeded(42);
        let b = RandomFixtureGenerator::seeded(42);
        assert_eq!(a.sentence(), b.sentence());
        assert_eq!(a.paragraph(), b.paragraph());
        assert_eq!(a.first_name(), b.first_name());
        assert_eq!(a.last_name(), b.last_name());
    }
}
