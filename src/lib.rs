//! Facade crate for the Ryv content engine.
//!
//! This crate re-exports the core domain types and exposes the content
//! pipeline and the daily recommender behind feature flags.

#![forbid(unsafe_code)]

pub use ryv_core::{
    ArticleSummary, CandidateArticle, Category, RawScrapedRecord, RecordSource, SiteConfig,
    UnknownCategory, default_sites,
};

#[cfg(feature = "content")]
pub use ryv_content::{
    BatchReport, ContentPipeline, KeywordTable, SiteFailure, classify, collect_candidates,
    excerpt, process_record, sanitise,
};

#[cfg(feature = "recommender")]
pub use ryv_recommender::{
    DailySelector, ReadingTime, Recommendation, RecommendationError, RecommendationPayload,
    SelectionWeights, select_daily,
};

#[cfg(feature = "test-support")]
pub use ryv_core::test_support;
