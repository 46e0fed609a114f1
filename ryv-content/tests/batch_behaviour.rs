//! Behavioural coverage for multi-site candidate collection.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use ryv_content::{BatchReport, ContentPipeline, collect_candidates};
use ryv_core::test_support::MemoryRecordSource;
use ryv_core::{Category, RawScrapedRecord, SiteConfig, default_sites};

/// Sites visited by the batch.
#[fixture]
pub fn sites() -> RefCell<Vec<SiteConfig>> {
    RefCell::new(Vec::new())
}

/// Scripted record source.
#[fixture]
pub fn source() -> RefCell<MemoryRecordSource> {
    RefCell::new(MemoryRecordSource::new())
}

/// Report captured after collection.
#[fixture]
pub fn report() -> RefCell<Option<BatchReport>> {
    RefCell::new(None)
}

fn record_for(site: &SiteConfig) -> RawScrapedRecord {
    RawScrapedRecord::new(
        format!("Novidades de {}", site.name),
        "<p>Óculos, lentes e cuidados com a visão.</p>",
        site.url.clone(),
        site.category,
    )
    .with_link("/artigo")
}

fn collected(report: &RefCell<Option<BatchReport>>) -> BatchReport {
    report
        .borrow()
        .as_ref()
        .cloned()
        .unwrap_or_else(|| panic!("candidates must be collected first"))
}

#[given("the default scrape targets")]
fn default_targets(sites: &RefCell<Vec<SiteConfig>>) {
    *sites.borrow_mut() = default_sites();
}

#[given("only the optics site responds")]
fn only_optics(sites: &RefCell<Vec<SiteConfig>>, source: &RefCell<MemoryRecordSource>) {
    let targets = sites.borrow();
    let optics = targets
        .iter()
        .find(|site| site.category == Category::Optics)
        .unwrap_or_else(|| panic!("an optics site must be configured"));
    let scripted = MemoryRecordSource::new().with_site(optics.name.clone(), [record_for(optics)]);
    *source.borrow_mut() = scripted;
}

#[given("every site responds with one record")]
fn all_respond(sites: &RefCell<Vec<SiteConfig>>, source: &RefCell<MemoryRecordSource>) {
    let scripted = sites
        .borrow()
        .iter()
        .fold(MemoryRecordSource::new(), |acc, site| {
            acc.with_site(site.name.clone(), [record_for(site)])
        });
    *source.borrow_mut() = scripted;
}

#[when("candidates are collected")]
fn collect(
    sites: &RefCell<Vec<SiteConfig>>,
    source: &RefCell<MemoryRecordSource>,
    report: &RefCell<Option<BatchReport>>,
) {
    let outcome = collect_candidates(
        &*source.borrow(),
        &sites.borrow(),
        &ContentPipeline::default(),
    );
    *report.borrow_mut() = Some(outcome);
}

#[then("one candidate is collected")]
fn one_candidate(report: &RefCell<Option<BatchReport>>) {
    let outcome = collected(report);
    assert_eq!(outcome.candidates.len(), 1);
    let Some(candidate) = outcome.candidates.first() else {
        panic!("candidate expected");
    };
    assert_eq!(candidate.category, Category::Optics);
    assert_eq!(candidate.url, "https://www.allaboutvision.com/artigo");
}

#[then("four sites are reported as failed")]
fn four_failures(report: &RefCell<Option<BatchReport>>) {
    let outcome = collected(report);
    assert_eq!(outcome.failures.len(), 4);
    assert!(!outcome.is_complete());
}

#[then("five candidates are collected")]
fn five_candidates(report: &RefCell<Option<BatchReport>>) {
    assert_eq!(collected(report).candidates.len(), 5);
}

#[then("no site is reported as failed")]
fn no_failures(report: &RefCell<Option<BatchReport>>) {
    assert!(collected(report).is_complete());
}

#[scenario(path = "tests/features/batch.feature", index = 0)]
fn failing_sites_are_skipped(
    sites: RefCell<Vec<SiteConfig>>,
    source: RefCell<MemoryRecordSource>,
    report: RefCell<Option<BatchReport>>,
) {
    let _ = (sites, source, report);
}

#[scenario(path = "tests/features/batch.feature", index = 1)]
fn complete_batch(
    sites: RefCell<Vec<SiteConfig>>,
    source: RefCell<MemoryRecordSource>,
    report: RefCell<Option<BatchReport>>,
) {
    let _ = (sites, source, report);
}
