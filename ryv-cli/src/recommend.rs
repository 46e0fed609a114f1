//! `recommend` command: pick today's article from a JSON catalogue.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ryv_core::ArticleSummary;
use ryv_recommender::{RecommendationPayload, select_daily};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RECOMMEND_ARTICLES, ARG_RECOMMEND_AT, CliError, ENV_RECOMMEND_ARTICLES, load_json,
    require_file, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Select the daily recommendation from a JSON array of \
                 published article summaries. The pick is stable for the \
                 whole UTC day of the reference instant.",
    about = "Pick today's recommended article"
)]
#[ortho_config(prefix = "RYV")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of published article summaries.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) articles_path: Option<Utf8PathBuf>,
    /// Reference instant in RFC 3339 form; defaults to now.
    #[arg(long = ARG_RECOMMEND_AT, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) at: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the article catalogue.
    pub(crate) articles_path: Utf8PathBuf,
    /// Fixed reference instant, or `None` for the current time.
    pub(crate) at: Option<DateTime<Utc>>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let articles_path = args.articles_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_ARTICLES,
            env: ENV_RECOMMEND_ARTICLES,
        })?;
        let at = args.at.map(|value| parse_reference(&value)).transpose()?;
        Ok(Self { articles_path, at })
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub(crate) fn parse_reference(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| CliError::InvalidTimestamp {
            value: value.to_owned(),
            source,
        })
}

/// Load the article catalogue from disk.
pub(crate) fn load_articles(path: &Utf8Path) -> Result<Vec<ArticleSummary>, CliError> {
    load_json(path)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let payload = execute_recommend(&config, Utc::now())?;
    write_json(writer, &payload)
}

/// Run a resolved configuration; `now` stands in when no `--at` was given.
pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    now: DateTime<Utc>,
) -> Result<RecommendationPayload, CliError> {
    require_file(&config.articles_path, ARG_RECOMMEND_ARTICLES)?;
    let articles = load_articles(&config.articles_path)?;
    let reference = config.at.unwrap_or(now);
    let recommendation = select_daily(&articles, reference)?;
    info!(
        "recommending article {} of {} for {}",
        recommendation.article.id,
        articles.len(),
        reference.date_naive()
    );
    Ok(RecommendationPayload::from(recommendation))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
