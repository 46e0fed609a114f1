//! Test-only fixtures shared by unit, behaviour and benchmark code.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::{ArticleSummary, Category, RawScrapedRecord, RecordSource, SiteConfig};

/// In-memory `RecordSource` keyed by site name.
///
/// Sites without an entry fail with [`MemorySourceError::UnknownSite`], which
/// makes it easy to script partial outages.
#[derive(Debug, Default, Clone)]
pub struct MemoryRecordSource {
    records: HashMap<String, Vec<RawScrapedRecord>>,
}

/// Failure raised by [`MemoryRecordSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemorySourceError {
    /// No records were registered for the site.
    #[error("no records registered for site '{name}'")]
    UnknownSite {
        /// Name of the requested site.
        name: String,
    },
}

impl MemoryRecordSource {
    /// Create an empty source; every fetch fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the records returned for `site`.
    #[must_use]
    pub fn with_site<I>(mut self, site: impl Into<String>, records: I) -> Self
    where
        I: IntoIterator<Item = RawScrapedRecord>,
    {
        self.records
            .insert(site.into(), records.into_iter().collect());
        self
    }
}

impl RecordSource for MemoryRecordSource {
    type Error = MemorySourceError;

    fn fetch(&self, site: &SiteConfig) -> Result<Vec<RawScrapedRecord>, Self::Error> {
        self.records
            .get(&site.name)
            .cloned()
            .ok_or_else(|| MemorySourceError::UnknownSite {
                name: site.name.clone(),
            })
    }
}

/// A small, varied set of published articles relative to `reference`.
///
/// Covers every category, one unknown label, a spread of publication ages and
/// view counts.
#[must_use]
pub fn sample_articles(reference: DateTime<Utc>) -> Vec<ArticleSummary> {
    vec![
        ArticleSummary::new(1, "Como lidar com a ansiedade no trabalho")
            .with_category(Category::MentalHealth)
            .with_excerpt("Pequenos passos para o bem-estar emocional")
            .with_slug("ansiedade-no-trabalho")
            .with_content("texto ".repeat(400))
            .with_published_at(reference - Duration::days(2))
            .with_view_count(12),
        ArticleSummary::new(2, "Lentes progressivas explicadas")
            .with_category(Category::Optics)
            .with_excerpt("Tudo sobre adaptação")
            .with_slug("lentes-progressivas")
            .with_content("texto ".repeat(1500))
            .with_published_at(reference - Duration::days(20))
            .with_view_count(80),
        ArticleSummary::new(3, "Miopia em crianças")
            .with_category(Category::Optometry)
            .with_excerpt("Sinais de alerta")
            .with_slug("miopia-criancas")
            .with_content("texto ".repeat(5000))
            .with_published_at(reference - Duration::days(90))
            .with_view_count(300),
        ArticleSummary::new(4, "Descubra hábitos para uma vida leve")
            .with_category(Category::HealthTips)
            .with_excerpt("Saúde começa em casa")
            .with_slug("habitos-vida-leve")
            .with_content("texto ".repeat(100))
            .with_published_at(reference - Duration::days(45))
            .with_view_count(5),
        ArticleSummary::new(5, "Parceiros da clínica")
            .with_category_label("Notícias Relacionadas")
            .with_slug("parceiros")
            .with_content("texto"),
    ]
}
