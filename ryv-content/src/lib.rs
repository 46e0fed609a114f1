//! Cleaning and classification of scraped wellness content.
//!
//! The crate turns [`RawScrapedRecord`](ryv_core::RawScrapedRecord) values
//! into [`CandidateArticle`](ryv_core::CandidateArticle) suggestions:
//! - [`sanitise`] strips markup and entities and normalises whitespace;
//! - [`excerpt`] produces the listing teaser;
//! - [`KeywordTable::classify`] assigns a category by keyword voting;
//! - [`collect_candidates`] walks the configured sites, skipping any that
//!   fail.
//!
//! Everything except the record source is a pure function of its input.
//!
//! # Examples
//!
//! ```
//! use ryv_content::{classify, sanitise};
//! use ryv_core::Category;
//!
//! let body = sanitise("<p>Exercícios de <b>mindfulness</b> &amp; meditação</p>");
//! assert_eq!(body, "Exercícios de mindfulness & meditação");
//! assert_eq!(classify("Respire fundo", &body), Category::MentalHealth);
//! ```

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use ryv_core::{CandidateArticle, Category, RawScrapedRecord};

mod batch;
mod classify;
mod pipeline;
mod sanitise;

pub use batch::{BatchReport, SiteFailure, collect_candidates};
pub use classify::KeywordTable;
pub use pipeline::{ContentPipeline, normalise_tags, resolve_link};
pub use sanitise::{DEFAULT_EXCERPT_LEN, ELLIPSIS, excerpt, sanitise};

static DEFAULT_PIPELINE: LazyLock<ContentPipeline> = LazyLock::new(ContentPipeline::default);

/// Classify `title` and `body` with the default keyword table.
#[must_use]
pub fn classify(title: &str, body: &str) -> Category {
    DEFAULT_PIPELINE.keywords().classify(title, body)
}

/// Run one record through the default pipeline.
#[must_use]
pub fn process_record(record: &RawScrapedRecord) -> Option<CandidateArticle> {
    DEFAULT_PIPELINE.process(record)
}
