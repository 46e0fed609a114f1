//! Deterministic "today's recommendation" for the wellness blog.
//!
//! Every published article is scored on category affinity, title curiosity,
//! emotional wording, recency and popularity, plus a small jitter drawn from a
//! generator seeded by the calendar date. The highest score wins and receives
//! a reading-time label and a motivational caption drawn from the same
//! generator. Article age is measured from the start of the reference's UTC
//! day, so identical inputs on the same UTC day always yield the same pick.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use ryv_core::{ArticleSummary, Category};
//! use ryv_recommender::{RecommendationPayload, select_daily};
//!
//! let articles = vec![
//!     ArticleSummary::new(1, "Como dormir melhor").with_category(Category::HealthTips),
//! ];
//! let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
//! let pick = select_daily(&articles, at).unwrap();
//! let payload = RecommendationPayload::from(pick);
//! assert_eq!(payload.id, 1);
//! assert_eq!(payload.reading_time.label(), "1 min");
//! ```

#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use ryv_core::ArticleSummary;

mod error;
mod motivation;
mod reading_time;
mod score;
mod seed;
mod selector;
mod weights;

pub use error::RecommendationError;
pub use motivation::{DEFAULT_MOTIVATION, captions, pick_motivation};
pub use reading_time::ReadingTime;
pub use score::{ScoreBreakdown, base_score, day_start};
pub use seed::{daily_rng, date_seed};
pub use selector::{DailySelector, Recommendation, RecommendationPayload, ScoredCandidate};
pub use weights::SelectionWeights;

/// Select today's recommendation with the default weights.
///
/// Only the UTC date of `reference` affects the result.
///
/// # Errors
/// Returns [`RecommendationError::EmptyCandidateSet`] when `candidates` is
/// empty.
pub fn select_daily(
    candidates: &[ArticleSummary],
    reference: DateTime<Utc>,
) -> Result<Recommendation<'_>, RecommendationError> {
    DailySelector::default().select(candidates, reference)
}
