//! Core domain types for the RYV content engine.
//!
//! The types here are shared by the content pipeline (which turns scraped
//! records into classified candidates) and the recommender (which picks the
//! daily article from published summaries). They carry no I/O; the fetch
//! layer plugs in through [`RecordSource`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod article;
pub mod category;
pub mod record;
pub mod site;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use article::ArticleSummary;
pub use category::{Category, UnknownCategory};
pub use record::{CandidateArticle, RawScrapedRecord};
pub use site::{SiteConfig, default_sites};
pub use source::RecordSource;
