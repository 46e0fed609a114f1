//! Test helpers for building temporary catalogues and record directories.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, TimeZone, Utc};
use ryv_core::test_support::sample_articles;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

/// Create a temporary directory and return it with its UTF-8 path.
pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Fixed reference instant for deterministic selections.
pub(super) fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 6, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

/// Write the shared sample catalogue to `path`.
pub(super) fn write_catalogue(path: &Utf8Path) {
    let payload =
        serde_json::to_string_pretty(&sample_articles(reference())).expect("serialise articles");
    write_utf8(path, payload.as_bytes());
}

/// A scraped entry as the fetch layer stores it on disk.
pub(super) fn scraped_entry(title: &str, body: &str, link: &str) -> Value {
    json!({
        "title": title,
        "body": body,
        "tags": ["saúde, bem-estar", "saúde"],
        "link": link,
    })
}

/// Write `entries` as the record file for `site` under `dir`.
pub(super) fn write_site_records(dir: &Utf8Path, site: &str, entries: &[Value]) {
    let payload = serde_json::to_string(entries).expect("serialise entries");
    write_utf8(&dir.join(format!("{site}.json")), payload.as_bytes());
}
