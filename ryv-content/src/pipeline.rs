//! Turn raw scraped records into persistence-ready candidates.

use std::collections::HashSet;

use log::debug;
use ryv_core::{CandidateArticle, RawScrapedRecord};

use crate::{DEFAULT_EXCERPT_LEN, KeywordTable, excerpt, sanitise};

/// Cleaning and classification settings applied to every record.
///
/// # Examples
/// ```
/// use ryv_content::ContentPipeline;
/// use ryv_core::{Category, RawScrapedRecord};
///
/// let record = RawScrapedRecord::new(
///     "<h2>Miopia na infância</h2>",
///     "<p>Quando fazer o exame ocular?</p>",
///     "https://www.aoa.org/news",
///     Category::Optometry,
/// )
/// .with_link("/miopia");
/// let candidate = ContentPipeline::default().process(&record).unwrap();
/// assert_eq!(candidate.title, "Miopia na infância");
/// assert_eq!(candidate.category, Category::Optometry);
/// assert_eq!(candidate.url, "https://www.aoa.org/news/miopia");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPipeline {
    keywords: KeywordTable,
    excerpt_len: usize,
}

impl ContentPipeline {
    /// Build a pipeline from a keyword table and an excerpt length.
    #[must_use]
    pub const fn new(keywords: KeywordTable, excerpt_len: usize) -> Self {
        Self {
            keywords,
            excerpt_len,
        }
    }

    /// Keyword table used for classification.
    #[must_use]
    pub const fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Maximum excerpt length in characters.
    #[must_use]
    pub const fn excerpt_len(&self) -> usize {
        self.excerpt_len
    }

    /// Clean, classify and normalise one record.
    ///
    /// Returns `None` when the title or the body is empty once cleaned; such
    /// records are not worth suggesting.
    #[must_use]
    pub fn process(&self, record: &RawScrapedRecord) -> Option<CandidateArticle> {
        let title = sanitise(&record.title);
        let content = sanitise(&record.body);
        if title.is_empty() || content.is_empty() {
            debug!(
                "dropping record from {} with empty title or body",
                record.source_url
            );
            return None;
        }

        let category = self.keywords.classify(&title, &content);
        debug!("classified '{title}' as {category}");
        Some(CandidateArticle {
            excerpt: excerpt(&content, self.excerpt_len),
            category,
            category_hint: record.category_hint,
            tags: normalise_tags(&record.tags),
            url: resolve_link(&record.source_url, record.link.as_deref()),
            source_url: record.source_url.clone(),
            image_url: record
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_owned),
            suggested: true,
            title,
            content,
        })
    }
}

impl Default for ContentPipeline {
    fn default() -> Self {
        Self::new(KeywordTable::default(), DEFAULT_EXCERPT_LEN)
    }
}

/// Split comma-joined tag strings, trim them and drop blanks and repeats.
///
/// First occurrences keep their position.
///
/// # Examples
/// ```
/// use ryv_content::normalise_tags;
///
/// let tags = vec!["visão, lentes".to_owned(), " lentes ".to_owned(), ",".to_owned()];
/// assert_eq!(normalise_tags(&tags), vec!["visão", "lentes"]);
/// ```
#[must_use]
pub fn normalise_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .flat_map(|tag| tag.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && seen.insert(*tag))
        .map(str::to_owned)
        .collect()
}

/// Resolve a scraped link against the site's base URL.
///
/// Absolute `http(s)` links pass through, relative ones are appended to
/// `base`, and a missing or blank link falls back to `base` itself.
///
/// # Examples
/// ```
/// use ryv_content::resolve_link;
///
/// let base = "https://www.verywellmind.com";
/// assert_eq!(resolve_link(base, Some("/stress")), "https://www.verywellmind.com/stress");
/// assert_eq!(resolve_link(base, Some("https://cdn.example/x")), "https://cdn.example/x");
/// assert_eq!(resolve_link(base, None), base);
/// ```
#[must_use]
pub fn resolve_link(base: &str, href: Option<&str>) -> String {
    let Some(link) = href.map(str::trim).filter(|link| !link.is_empty()) else {
        return base.to_owned();
    };
    if link.starts_with("http") {
        return link.to_owned();
    }
    match (base.strip_suffix('/'), link.strip_prefix('/')) {
        (Some(trimmed), Some(_)) => format!("{trimmed}{link}"),
        (None, None) => format!("{base}/{link}"),
        _ => format!("{base}{link}"),
    }
}
