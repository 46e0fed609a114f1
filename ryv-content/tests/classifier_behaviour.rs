//! Behavioural coverage for cleaning and classifying single records.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use ryv_content::ContentPipeline;
use ryv_core::{CandidateArticle, Category, RawScrapedRecord};

const SOURCE: &str = "https://www.verywellmind.com";

/// Pipeline under test.
#[fixture]
pub fn pipeline() -> ContentPipeline {
    ContentPipeline::default()
}

/// Record prepared by the `given` steps.
#[fixture]
pub fn record() -> RefCell<Option<RawScrapedRecord>> {
    RefCell::new(None)
}

/// Pipeline outcome captured for assertions.
#[fixture]
pub fn outcome() -> RefCell<Option<Option<CandidateArticle>>> {
    RefCell::new(None)
}

fn set_record(record: &RefCell<Option<RawScrapedRecord>>, title: &str, body: &str) {
    *record.borrow_mut() = Some(RawScrapedRecord::new(
        title,
        body,
        SOURCE,
        Category::MentalHealth,
    ));
}

fn candidate(outcome: &RefCell<Option<Option<CandidateArticle>>>) -> CandidateArticle {
    let binding = outcome.borrow();
    match binding.as_ref() {
        Some(Some(candidate)) => candidate.clone(),
        Some(None) => panic!("expected a candidate, the record was dropped"),
        None => panic!("the record must be processed first"),
    }
}

#[given("a scraped record about anxiety and stress")]
fn anxiety_record(record: &RefCell<Option<RawScrapedRecord>>) {
    set_record(record, "Tratamento para ansiedade e estresse", "...");
}

#[given("a scraped record without any known keywords")]
fn neutral_record(record: &RefCell<Option<RawScrapedRecord>>) {
    set_record(record, "Receita de pão", "Farinha, água e fermento.");
}

#[given("a scraped record wrapped in markup and entities")]
fn markup_record(record: &RefCell<Option<RawScrapedRecord>>) {
    set_record(
        record,
        "<h2>Sono&nbsp;&amp; descanso</h2>",
        "<div>\n  <p>Durma &lt;b&gt;bem&lt;/b&gt;.</p>\n</div>",
    );
}

#[given("a scraped record whose body is only markup")]
fn empty_body_record(record: &RefCell<Option<RawScrapedRecord>>) {
    set_record(record, "Título", "<p>\n</p>");
}

#[when("the record is processed")]
fn process(
    pipeline: &ContentPipeline,
    record: &RefCell<Option<RawScrapedRecord>>,
    outcome: &RefCell<Option<Option<CandidateArticle>>>,
) {
    let binding = record.borrow();
    let raw = binding
        .as_ref()
        .unwrap_or_else(|| panic!("record must be initialised"));
    *outcome.borrow_mut() = Some(pipeline.process(raw));
}

#[then("the candidate is categorised as Mental Health")]
fn is_mental_health(outcome: &RefCell<Option<Option<CandidateArticle>>>) {
    assert_eq!(candidate(outcome).category, Category::MentalHealth);
}

#[then("the candidate is categorised as Health Tips")]
fn is_health_tips(outcome: &RefCell<Option<Option<CandidateArticle>>>) {
    assert_eq!(candidate(outcome).category, Category::HealthTips);
}

#[then("the candidate text is free of markup")]
fn free_of_markup(outcome: &RefCell<Option<Option<CandidateArticle>>>) {
    let cleaned = candidate(outcome);
    assert_eq!(cleaned.title, "Sono & descanso");
    assert_eq!(cleaned.content, "Durma bem.");
    assert_eq!(cleaned.excerpt, cleaned.content);
}

#[then("no candidate is produced")]
fn dropped(outcome: &RefCell<Option<Option<CandidateArticle>>>) {
    assert!(matches!(*outcome.borrow(), Some(None)));
}

#[scenario(path = "tests/features/classifier.feature", index = 0)]
fn anxiety_classifies_as_mental_health(
    pipeline: ContentPipeline,
    record: RefCell<Option<RawScrapedRecord>>,
    outcome: RefCell<Option<Option<CandidateArticle>>>,
) {
    let _ = (pipeline, record, outcome);
}

#[scenario(path = "tests/features/classifier.feature", index = 1)]
fn neutral_text_defaults(
    pipeline: ContentPipeline,
    record: RefCell<Option<RawScrapedRecord>>,
    outcome: RefCell<Option<Option<CandidateArticle>>>,
) {
    let _ = (pipeline, record, outcome);
}

#[scenario(path = "tests/features/classifier.feature", index = 2)]
fn markup_is_removed(
    pipeline: ContentPipeline,
    record: RefCell<Option<RawScrapedRecord>>,
    outcome: RefCell<Option<Option<CandidateArticle>>>,
) {
    let _ = (pipeline, record, outcome);
}

#[scenario(path = "tests/features/classifier.feature", index = 3)]
fn empty_body_is_dropped(
    pipeline: ContentPipeline,
    record: RefCell<Option<RawScrapedRecord>>,
    outcome: RefCell<Option<Option<CandidateArticle>>>,
) {
    let _ = (pipeline, record, outcome);
}
