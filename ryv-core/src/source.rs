//! Boundary to the fetch layer.
//!
//! Network access and DOM traversal live behind [`RecordSource`]; everything
//! downstream works on the [`RawScrapedRecord`] values it yields.

use crate::{RawScrapedRecord, SiteConfig};

/// Produce raw records for a configured site.
///
/// Implementations must be `Send + Sync` so a source can be shared between
/// request handlers. Errors are opaque to the content pipeline: a failing site
/// is reported and skipped, never retried.
///
/// # Examples
///
/// ```rust
/// use ryv_core::{Category, RawScrapedRecord, RecordSource, SiteConfig};
///
/// struct Fixed;
///
/// impl RecordSource for Fixed {
///     type Error = std::io::Error;
///
///     fn fetch(&self, site: &SiteConfig) -> Result<Vec<RawScrapedRecord>, Self::Error> {
///         Ok(vec![RawScrapedRecord::new("Title", "Body", site.url.clone(), site.category)])
///     }
/// }
///
/// let site = SiteConfig::new("demo", "https://example.org", ".card", Category::Optics);
/// assert_eq!(Fixed.fetch(&site).map(|records| records.len()).ok(), Some(1));
/// ```
pub trait RecordSource: Send + Sync {
    /// Error raised when a site cannot be fetched or parsed.
    type Error: std::error::Error;

    /// Fetch every record currently listed by `site`.
    ///
    /// # Errors
    /// Returns [`RecordSource::Error`] when the site is unreachable or its
    /// payload cannot be turned into records.
    fn fetch(&self, site: &SiteConfig) -> Result<Vec<RawScrapedRecord>, Self::Error>;
}
