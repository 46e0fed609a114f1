//! Scrape targets.
//!
//! Selectors are interpreted by the fetch layer only; this crate just carries
//! them around.

use crate::Category;

/// One configured scrape target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteConfig {
    /// Short identifier, used in logs and by file-backed sources.
    pub name: String,
    /// Listing page to fetch.
    pub url: String,
    /// CSS selector matching one article card.
    pub selector: String,
    /// Category hint attached to every record from this site.
    pub category: Category,
}

impl SiteConfig {
    /// Construct a site entry.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        selector: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            selector: selector.into(),
            category,
        }
    }
}

/// The wellness sites scraped by the blog out of the box.
///
/// # Examples
/// ```
/// use ryv_core::{Category, default_sites};
///
/// let sites = default_sites();
/// assert_eq!(sites.len(), 5);
/// assert!(sites.iter().any(|site| site.category == Category::Optometry));
/// ```
#[must_use]
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig::new(
            "psychologytoday",
            "https://www.psychologytoday.com/us/blog",
            ".blog-post",
            Category::MentalHealth,
        ),
        SiteConfig::new(
            "verywellmind",
            "https://www.verywellmind.com",
            ".article-card",
            Category::MentalHealth,
        ),
        SiteConfig::new(
            "allaboutvision",
            "https://www.allaboutvision.com",
            ".article",
            Category::Optics,
        ),
        SiteConfig::new(
            "aoa",
            "https://www.aoa.org/news",
            ".news-item",
            Category::Optometry,
        ),
        SiteConfig::new(
            "healthline",
            "https://www.healthline.com/health/mental-health",
            ".article-card",
            Category::MentalHealth,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn default_site_names_are_unique() {
        let sites = default_sites();
        let names: HashSet<_> = sites.iter().map(|site| site.name.as_str()).collect();
        assert_eq!(names.len(), sites.len());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_site_lists() {
        let json = r#"[{"name":"aoa","url":"https://www.aoa.org/news","selector":".news-item","category":"Optometria"}]"#;
        let sites: Vec<SiteConfig> = serde_json::from_str(json).unwrap();
        assert_eq!(sites.first().map(|site| site.category), Some(Category::Optometry));
    }
}
