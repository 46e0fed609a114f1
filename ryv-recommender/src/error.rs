//! Error types raised while selecting the daily recommendation.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by [`DailySelector::select`](crate::DailySelector::select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// No published articles were supplied.
    #[error("no published articles to recommend")]
    EmptyCandidateSet,
}
