//! Sequential multi-site collection.
//!
//! Sites are visited one after another. A site that fails is logged and
//! recorded, and the batch moves on; there is no retry.

use log::{info, warn};
use ryv_core::{CandidateArticle, RecordSource, SiteConfig};

use crate::ContentPipeline;

/// A site that could not be fetched during a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFailure {
    /// Name of the failing site.
    pub site: String,
    /// Rendered error from the record source.
    pub message: String,
}

/// Outcome of one collection run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Candidates produced across all reachable sites, in site order.
    pub candidates: Vec<CandidateArticle>,
    /// Sites that failed to fetch.
    pub failures: Vec<SiteFailure>,
    /// Records discarded because they cleaned to an empty title or body.
    pub dropped: usize,
}

impl BatchReport {
    /// Report whether every site was fetched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch every site through `source` and run the records through `pipeline`.
///
/// # Examples
/// ```
/// use ryv_content::{ContentPipeline, collect_candidates};
/// use ryv_core::test_support::MemoryRecordSource;
/// use ryv_core::{Category, RawScrapedRecord, SiteConfig};
///
/// let sites = vec![
///     SiteConfig::new("down", "https://down.example", ".card", Category::Optics),
///     SiteConfig::new("up", "https://up.example", ".card", Category::Optometry),
/// ];
/// let source = MemoryRecordSource::new().with_site(
///     "up",
///     [RawScrapedRecord::new("Glaucoma", "Exame ocular", "https://up.example", Category::Optometry)],
/// );
/// let report = collect_candidates(&source, &sites, &ContentPipeline::default());
/// assert_eq!(report.candidates.len(), 1);
/// assert_eq!(report.failures.len(), 1);
/// ```
pub fn collect_candidates<S>(
    source: &S,
    sites: &[SiteConfig],
    pipeline: &ContentPipeline,
) -> BatchReport
where
    S: RecordSource + ?Sized,
{
    let mut report = BatchReport::default();
    for site in sites {
        let records = match source.fetch(site) {
            Ok(records) => records,
            Err(err) => {
                warn!("skipping site {} ({}): {err}", site.name, site.url);
                report.failures.push(SiteFailure {
                    site: site.name.clone(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        let fetched = records.len();
        let before = report.candidates.len();
        report
            .candidates
            .extend(records.iter().filter_map(|record| pipeline.process(record)));
        let kept = report.candidates.len().saturating_sub(before);
        report.dropped = report
            .dropped
            .saturating_add(fetched.saturating_sub(kept));
        info!("site {}: kept {kept} of {fetched} records", site.name);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use ryv_core::test_support::MemoryRecordSource;
    use ryv_core::{Category, RawScrapedRecord};

    #[fixture]
    fn sites() -> Vec<SiteConfig> {
        vec![
            SiteConfig::new("a", "https://a.example", ".card", Category::MentalHealth),
            SiteConfig::new("b", "https://b.example", ".card", Category::Optics),
        ]
    }

    #[rstest]
    fn counts_dropped_records(sites: Vec<SiteConfig>) {
        let source = MemoryRecordSource::new()
            .with_site(
                "a",
                [
                    RawScrapedRecord::new("Terapia", "Texto", "https://a.example", Category::MentalHealth),
                    RawScrapedRecord::new("<b></b>", "Texto", "https://a.example", Category::MentalHealth),
                ],
            )
            .with_site("b", Vec::new());
        let report = collect_candidates(&source, &sites, &ContentPipeline::default());
        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.dropped, 1);
        assert!(report.is_complete());
    }

    #[rstest]
    fn all_sites_failing_yields_an_empty_report(sites: Vec<SiteConfig>) {
        let report = collect_candidates(
            &MemoryRecordSource::new(),
            &sites,
            &ContentPipeline::default(),
        );
        assert!(report.candidates.is_empty());
        let failed: Vec<&str> = report.failures.iter().map(|f| f.site.as_str()).collect();
        assert_eq!(failed, vec!["a", "b"]);
    }
}
