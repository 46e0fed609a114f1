//! Error types emitted by the Ryv CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use ryv_recommender::RecommendationError;
use thiserror::Error;

/// Errors emitted by the Ryv CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourcePath {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but has the wrong kind.
    #[error("{field} path {path:?} is not a {expected}")]
    WrongPathKind {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that was inspected.
        path: Utf8PathBuf,
        /// Expected kind, `file` or `directory`.
        expected: &'static str,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that was inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The reference timestamp is not valid RFC 3339.
    #[error("invalid --at timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// Rejected input.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Opening a JSON input failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A JSON input could not be decoded.
    #[error("failed to parse JSON in {path:?}: {source}")]
    ParseInput {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// Selection failed.
    #[error(transparent)]
    Recommend(#[from] RecommendationError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
