//! Deterministic part of the selection score.
//!
//! Each term is kept separately so callers can see why an article ranked
//! where it did. Jitter is added by the selector, not here.
//!
//! Only the UTC calendar date of the reference instant matters: article age is
//! measured from the start of that day, so every call on the same day sees
//! the same scores.

use chrono::{DateTime, NaiveTime, Utc};
use ryv_core::ArticleSummary;

use crate::SelectionWeights;

const MILLIS_PER_DAY: f64 = 86_400_000.0_f64;

/// Score terms for one article, before jitter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Category affinity multiplier.
    pub affinity: f64,
    /// Curiosity-word bonus from the title.
    pub curiosity: f64,
    /// Emotional-word bonus from the title or excerpt.
    pub emotional: f64,
    /// Recency bonus.
    pub recency: f64,
    /// View-count bonus.
    pub popularity: f64,
}

impl ScoreBreakdown {
    /// Compute every term for `article` on the UTC day of `reference`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use ryv_core::{ArticleSummary, Category};
    /// use ryv_recommender::{ScoreBreakdown, SelectionWeights};
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    /// let article = ArticleSummary::new(1, "Descubra a terapia")
    ///     .with_category(Category::MentalHealth)
    ///     .with_published_at(now - Duration::days(3));
    /// let terms = ScoreBreakdown::compute(&article, now, &SelectionWeights::default());
    /// assert_eq!(terms.affinity, 1.5);
    /// assert_eq!(terms.recency, 0.5);
    /// ```
    #[must_use]
    pub fn compute(
        article: &ArticleSummary,
        reference: DateTime<Utc>,
        weights: &SelectionWeights,
    ) -> Self {
        Self {
            affinity: weights.affinity(article.category()),
            curiosity: curiosity_bonus(article, weights),
            emotional: emotional_bonus(article, weights),
            recency: recency_bonus(article, reference, weights),
            popularity: popularity_bonus(article, weights),
        }
    }

    /// Sum of all terms.
    #[expect(clippy::float_arithmetic, reason = "the score is a weighted sum")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.affinity + self.curiosity + self.emotional + self.recency + self.popularity
    }
}

/// Deterministic score of `article`: every term except jitter.
#[must_use]
pub fn base_score(
    article: &ArticleSummary,
    reference: DateTime<Utc>,
    weights: &SelectionWeights,
) -> f64 {
    ScoreBreakdown::compute(article, reference, weights).total()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "word hits are small counts scaled by a bonus"
)]
fn curiosity_bonus(article: &ArticleSummary, weights: &SelectionWeights) -> f64 {
    let hits = weights
        .curiosity_words
        .iter()
        .filter(|word| article.title.contains(word.as_str()))
        .count();
    hits as f64 * weights.curiosity_bonus
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "word hits are small counts scaled by a bonus"
)]
fn emotional_bonus(article: &ArticleSummary, weights: &SelectionWeights) -> f64 {
    let hits = weights
        .emotional_words
        .iter()
        .filter(|word| {
            article.title.contains(word.as_str()) || article.excerpt.contains(word.as_str())
        })
        .count();
    hits as f64 * weights.emotional_bonus
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "age is measured in fractional days"
)]
fn recency_bonus(
    article: &ArticleSummary,
    reference: DateTime<Utc>,
    weights: &SelectionWeights,
) -> f64 {
    let Some(published_at) = article.published_at else {
        return 0.0_f64;
    };
    let age_days = day_start(reference)
        .signed_duration_since(published_at)
        .num_milliseconds() as f64
        / MILLIS_PER_DAY;
    if age_days < weights.week_days {
        weights.week_bonus
    } else if age_days < weights.month_days {
        weights.month_bonus
    } else {
        0.0_f64
    }
}

/// Midnight UTC at the start of the day containing `reference`.
#[must_use]
pub fn day_start(reference: DateTime<Utc>) -> DateTime<Utc> {
    reference.date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "views are scaled into a fractional bonus"
)]
fn popularity_bonus(article: &ArticleSummary, weights: &SelectionWeights) -> f64 {
    article.view_count as f64 * weights.view_bonus
}
