//! `classify` command: turn per-site scraped records into candidates.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ryv_content::{BatchReport, ContentPipeline, collect_candidates};
use ryv_core::{RawScrapedRecord, RecordSource, SiteConfig, default_sites};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ARG_CLASSIFY_OUTPUT, ARG_CLASSIFY_RECORDS_DIR, ARG_CLASSIFY_SITES, CliError,
    ENV_CLASSIFY_RECORDS_DIR, io, load_json, require_dir, require_file, write_json,
};

/// CLI arguments for the `classify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read `<records-dir>/<site name>.json` for every configured \
                 site, clean and classify each record, and write the \
                 resulting candidate articles as JSON. Sites whose file is \
                 missing or malformed are reported and skipped.",
    about = "Classify scraped records into candidate articles"
)]
#[ortho_config(prefix = "RYV")]
pub(crate) struct ClassifyArgs {
    /// Directory holding one JSON file of scraped records per site.
    #[arg(long = ARG_CLASSIFY_RECORDS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) records_dir: Option<Utf8PathBuf>,
    /// JSON array of site configurations; defaults to the built-in sites.
    #[arg(long = ARG_CLASSIFY_SITES, value_name = "path")]
    #[serde(default)]
    pub(crate) sites: Option<Utf8PathBuf>,
    /// Write candidates here instead of standard output.
    #[arg(long = ARG_CLASSIFY_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ClassifyArgs {
    pub(crate) fn into_config(self) -> Result<ClassifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ClassifyConfig::try_from(merged)
    }
}

/// Resolved `classify` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifyConfig {
    /// Directory of per-site record files.
    pub(crate) records_dir: Utf8PathBuf,
    /// Optional site list override.
    pub(crate) sites: Option<Utf8PathBuf>,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ClassifyConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_dir(&self.records_dir, ARG_CLASSIFY_RECORDS_DIR)?;
        if let Some(sites) = &self.sites {
            require_file(sites, ARG_CLASSIFY_SITES)?;
        }
        Ok(())
    }

    /// Load the configured sites, or the built-in list.
    pub(crate) fn load_sites(&self) -> Result<Vec<SiteConfig>, CliError> {
        self.sites
            .as_deref()
            .map_or_else(|| Ok(default_sites()), load_json)
    }
}

impl TryFrom<ClassifyArgs> for ClassifyConfig {
    type Error = CliError;

    fn try_from(args: ClassifyArgs) -> Result<Self, Self::Error> {
        let records_dir = args.records_dir.ok_or(CliError::MissingArgument {
            field: ARG_CLASSIFY_RECORDS_DIR,
            env: ENV_CLASSIFY_RECORDS_DIR,
        })?;
        Ok(Self {
            records_dir,
            sites: args.sites,
            output: args.output,
        })
    }
}

/// One scraped entry as stored on disk.
///
/// The site supplies the source URL and category hint.
#[derive(Debug, Clone, Deserialize)]
struct ScrapedEntry {
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl ScrapedEntry {
    fn into_record(self, site: &SiteConfig) -> RawScrapedRecord {
        let mut record =
            RawScrapedRecord::new(self.title, self.body, site.url.clone(), site.category)
                .with_tags(self.tags);
        if let Some(link) = self.link {
            record = record.with_link(link);
        }
        if let Some(image_url) = self.image_url {
            record = record.with_image_url(image_url);
        }
        record
    }
}

/// Failure reading one site's record file.
#[derive(Debug, Error)]
pub(crate) enum FileSourceError {
    /// The file could not be opened.
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of scraped entries.
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Record source reading `<dir>/<site name>.json`.
#[derive(Debug, Clone)]
pub(crate) struct FileRecordSource {
    dir: Utf8PathBuf,
}

impl FileRecordSource {
    pub(crate) fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn path_for(&self, site: &SiteConfig) -> Utf8PathBuf {
        self.dir.join(format!("{}.json", site.name))
    }
}

impl RecordSource for FileRecordSource {
    type Error = FileSourceError;

    fn fetch(&self, site: &SiteConfig) -> Result<Vec<RawScrapedRecord>, Self::Error> {
        let path = self.path_for(site);
        let file = io::open_utf8_file(&path).map_err(|source| FileSourceError::Open {
            path: path.clone(),
            source,
        })?;
        let entries: Vec<ScrapedEntry> = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|source| FileSourceError::Parse { path, source })?;
        Ok(entries
            .into_iter()
            .map(|entry| entry.into_record(site))
            .collect())
    }
}

pub(crate) fn run_classify_with(
    args: ClassifyArgs,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_classify(&config)?;
    match &config.output {
        Some(path) => write_report_file(path, &report),
        None => write_json(stdout, &report.candidates),
    }
}

/// Run a resolved configuration and return the batch report.
pub(crate) fn execute_classify(config: &ClassifyConfig) -> Result<BatchReport, CliError> {
    config.validate_sources()?;
    let sites = config.load_sites()?;
    let source = FileRecordSource::new(config.records_dir.clone());
    let report = collect_candidates(&source, &sites, &ContentPipeline::default());
    info!(
        "classified {} candidates from {} sites ({} dropped)",
        report.candidates.len(),
        sites.len(),
        report.dropped
    );
    if !report.is_complete() {
        warn!("{} of {} sites failed", report.failures.len(), sites.len());
    }
    Ok(report)
}

fn write_report_file(path: &Utf8Path, report: &BatchReport) -> Result<(), CliError> {
    let mut file = io::create_utf8_file(path).map_err(CliError::WriteOutput)?;
    write_json(&mut file, &report.candidates)
}
