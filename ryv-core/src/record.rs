//! Scraped records and the cleaned candidates derived from them.

use crate::Category;

/// Raw text fields produced by the fetch layer for one scraped item.
///
/// Nothing here has been cleaned: `body` may still carry markup and entity
/// references, and each `tags` entry may hold several comma-separated tags.
///
/// # Examples
/// ```
/// use ryv_core::{Category, RawScrapedRecord};
///
/// let record = RawScrapedRecord::new(
///     "<h2>Ansiedade</h2>",
///     "<p>Dicas &amp; truques</p>",
///     "https://example.org",
///     Category::MentalHealth,
/// )
/// .with_link("/posts/ansiedade");
/// assert_eq!(record.link.as_deref(), Some("/posts/ansiedade"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawScrapedRecord {
    /// Headline text.
    pub title: String,
    /// Body text, possibly containing markup.
    pub body: String,
    /// Extracted tag strings.
    pub tags: Vec<String>,
    /// Base URL of the site the record came from.
    pub source_url: String,
    /// Category of the originating site.
    pub category_hint: Category,
    /// Article link as found on the page, absolute or relative.
    pub link: Option<String>,
    /// Cover image reference, if one was found.
    pub image_url: Option<String>,
}

impl RawScrapedRecord {
    /// Construct a record without tags, link or image.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        source_url: impl Into<String>,
        category_hint: Category,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            source_url: source_url.into(),
            category_hint,
            ..Self::default()
        }
    }

    /// Attach tag strings.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the article link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Attach a cover image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A cleaned and classified article suggestion ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateArticle {
    /// Cleaned headline.
    pub title: String,
    /// Cleaned body text.
    pub content: String,
    /// Truncated teaser derived from `content`.
    pub excerpt: String,
    /// Category assigned by keyword voting.
    pub category: Category,
    /// Category of the originating site.
    pub category_hint: Category,
    /// Normalised tags.
    pub tags: Vec<String>,
    /// Absolute article URL.
    pub url: String,
    /// Base URL of the originating site.
    pub source_url: String,
    /// Cover image reference.
    pub image_url: Option<String>,
    /// Whether the row is an editorial suggestion awaiting review.
    pub suggested: bool,
}
