//! Per-day seeding of the selection generator.
//!
//! The seed is the sum of the character codes of the `YYYY-MM-DD` calendar
//! string. Every selection builds its own generator from it, so two calls on
//! the same day draw the same stream and concurrent calls share nothing.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the selection seed for `date`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use ryv_recommender::date_seed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// // "2024-01-01": digits plus two hyphens.
/// assert_eq!(date_seed(date), 50 + 48 + 50 + 52 + 45 + 48 + 49 + 45 + 48 + 49);
/// ```
#[must_use]
pub fn date_seed(date: NaiveDate) -> u64 {
    date.format("%Y-%m-%d")
        .to_string()
        .chars()
        .map(u64::from)
        .sum()
}

/// Build a fresh generator seeded for `date`.
#[must_use]
pub fn daily_rng(date: NaiveDate) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(date_seed(date))
}
