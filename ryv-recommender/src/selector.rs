//! Daily selection: score every candidate, rank, and caption the winner.

use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use ryv_core::ArticleSummary;
use serde::Serialize;

use crate::{
    RecommendationError, ReadingTime, SelectionWeights, base_score, daily_rng, pick_motivation,
};

/// An article paired with its total score for one selection call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// The scored article.
    pub article: &'a ArticleSummary,
    /// Base score plus jitter.
    pub score: f64,
}

/// Result of a daily selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    /// The chosen article, borrowed from the candidate slice.
    pub article: &'a ArticleSummary,
    /// Winning score including jitter.
    pub score: f64,
    /// Estimated reading time of the article body.
    pub reading_time: ReadingTime,
    /// Caption shown alongside the recommendation.
    pub motivation: &'static str,
}

/// Picks one article per calendar day.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use ryv_core::{ArticleSummary, Category};
/// use ryv_recommender::DailySelector;
///
/// let articles = vec![
///     ArticleSummary::new(1, "Lentes").with_category(Category::Optics),
///     ArticleSummary::new(2, "Ansiedade").with_category(Category::MentalHealth),
/// ];
/// let at = Utc.with_ymd_and_hms(2025, 4, 2, 8, 0, 0).unwrap();
/// let selector = DailySelector::default();
/// let first = selector.select(&articles, at).unwrap();
/// let again = selector.select(&articles, at).unwrap();
/// assert_eq!(first.article.id, again.article.id);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DailySelector {
    weights: SelectionWeights,
}

impl DailySelector {
    /// Create a selector with custom weights.
    #[must_use]
    pub const fn new(weights: SelectionWeights) -> Self {
        Self { weights }
    }

    /// Weights used for scoring.
    #[must_use]
    pub const fn weights(&self) -> &SelectionWeights {
        &self.weights
    }

    /// Score every candidate for `reference`, in input order.
    ///
    /// One jitter value is drawn per candidate from `rng`, so the stream is
    /// consumed in the order of `candidates`.
    #[must_use]
    pub fn score_all<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [ArticleSummary],
        reference: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<ScoredCandidate<'a>> {
        candidates
            .iter()
            .map(|article| {
                let base = base_score(article, reference, &self.weights);
                let score = jittered(base, self.weights.jitter_span, rng);
                debug!(
                    "scored article {} at {score:.4} (base {base:.4})",
                    article.id
                );
                ScoredCandidate { article, score }
            })
            .collect()
    }

    /// Select the recommendation for the calendar day of `reference` (UTC).
    ///
    /// # Errors
    /// Returns [`RecommendationError::EmptyCandidateSet`] when `candidates`
    /// is empty.
    pub fn select<'a>(
        &self,
        candidates: &'a [ArticleSummary],
        reference: DateTime<Utc>,
    ) -> Result<Recommendation<'a>, RecommendationError> {
        if candidates.is_empty() {
            return Err(RecommendationError::EmptyCandidateSet);
        }
        let mut rng = daily_rng(reference.date_naive());
        let mut scored = self.score_all(candidates, reference, &mut rng);
        // Stable: equal scores keep input order.
        scored.sort_by(|left, right| right.score.total_cmp(&left.score));
        let winner = scored
            .first()
            .copied()
            .ok_or(RecommendationError::EmptyCandidateSet)?;
        let motivation = pick_motivation(winner.article.category(), &mut rng);
        debug!(
            "selected article {} for {} from {} candidates",
            winner.article.id,
            reference.date_naive(),
            candidates.len()
        );
        Ok(Recommendation {
            article: winner.article,
            score: winner.score,
            reading_time: ReadingTime::estimate(&winner.article.content),
            motivation,
        })
    }
}

#[expect(clippy::float_arithmetic, reason = "jitter scales a unit draw")]
fn jittered<R: Rng + ?Sized>(base: f64, span: f64, rng: &mut R) -> f64 {
    let unit: f64 = Standard.sample(rng);
    base + unit * span
}

/// Serialisable response for the daily recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPayload {
    /// Article identifier.
    pub id: u64,
    /// Article title.
    pub title: String,
    /// Article excerpt.
    pub excerpt: String,
    /// Category label as stored.
    pub category: String,
    /// URL slug.
    pub slug: String,
    /// Image reference.
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Reading-time label.
    pub reading_time: ReadingTime,
    /// Motivation caption.
    pub motivation: String,
}

impl From<&Recommendation<'_>> for RecommendationPayload {
    fn from(recommendation: &Recommendation<'_>) -> Self {
        let article = recommendation.article;
        Self {
            id: article.id,
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            category: article.category.clone(),
            slug: article.slug.clone(),
            image_url: article.image_url.clone(),
            reading_time: recommendation.reading_time,
            motivation: recommendation.motivation.to_owned(),
        }
    }
}

impl From<Recommendation<'_>> for RecommendationPayload {
    fn from(recommendation: Recommendation<'_>) -> Self {
        Self::from(&recommendation)
    }
}
