//! Command-line interface for the Ryv content engine.
//!
//! Two subcommands wrap the library crates:
//! - `recommend` reads published article summaries from JSON and prints the
//!   daily recommendation payload;
//! - `classify` reads scraped records per site from a directory, runs them
//!   through the content pipeline and writes the candidates as JSON.
//!
//! Options layer CLI flags over environment variables (`RYV_CMDS_*`) and
//! configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod classify;
mod error;
mod io;
mod recommend;

pub use error::CliError;

use classify::ClassifyArgs;
use recommend::RecommendArgs;

const ARG_RECOMMEND_ARTICLES: &str = "articles";
const ARG_RECOMMEND_AT: &str = "at";
const ENV_RECOMMEND_ARTICLES: &str = "RYV_CMDS_RECOMMEND_ARTICLES_PATH";
const ARG_CLASSIFY_RECORDS_DIR: &str = "records-dir";
const ARG_CLASSIFY_SITES: &str = "sites";
const ARG_CLASSIFY_OUTPUT: &str = "output";
const ENV_CLASSIFY_RECORDS_DIR: &str = "RYV_CMDS_CLASSIFY_RECORDS_DIR";

/// Run the Ryv CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading
/// or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend_with(args, &mut stdout),
        Command::Classify(args) => classify::run_classify_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ryv",
    about = "Daily recommendations and scraped-content classification for the Ryv blog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick today's recommended article.
    Recommend(RecommendArgs),
    /// Clean and classify scraped records into candidate articles.
    Classify(ClassifyArgs),
}

/// Check that `path` is an existing regular file.
fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match io::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::WrongPathKind {
            field,
            path: path.to_path_buf(),
            expected: "file",
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourcePath {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Check that `path` is an existing directory.
fn require_dir(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match io::dir_is_dir(path) {
        Ok(true) => Ok(()),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourcePath {
                field,
                path: path.to_path_buf(),
            })
        }
        Ok(false) | Err(_) => Err(CliError::WrongPathKind {
            field,
            path: path.to_path_buf(),
            expected: "directory",
        }),
    }
}

/// Decode a JSON document from `path`.
fn load_json<T>(path: &Utf8Path) -> Result<T, CliError>
where
    T: serde::de::DeserializeOwned,
{
    let file = io::open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| {
        CliError::ParseInput {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Pretty-print `value` as JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
