//! Argument parsing for both subcommands.

use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;

#[rstest]
fn parses_recommend_with_reference_instant() {
    let cli = Cli::try_parse_from([
        "ryv",
        "recommend",
        "articles.json",
        "--at",
        "2025-01-02T03:04:05Z",
    ])
    .expect("recommend should parse");
    match cli.command {
        Command::Recommend(args) => {
            assert_eq!(args.articles_path, Some(Utf8PathBuf::from("articles.json")));
            assert_eq!(args.at.as_deref(), Some("2025-01-02T03:04:05Z"));
        }
        Command::Classify(_) => panic!("expected recommend command"),
    }
}

#[rstest]
fn parses_classify_options() {
    let cli = Cli::try_parse_from([
        "ryv",
        "classify",
        "--records-dir",
        "scraped",
        "--sites",
        "sites.json",
        "--output",
        "out/candidates.json",
    ])
    .expect("classify should parse");
    match cli.command {
        Command::Classify(args) => {
            assert_eq!(args.records_dir, Some(Utf8PathBuf::from("scraped")));
            assert_eq!(args.sites, Some(Utf8PathBuf::from("sites.json")));
            assert_eq!(args.output, Some(Utf8PathBuf::from("out/candidates.json")));
        }
        Command::Recommend(_) => panic!("expected classify command"),
    }
}

#[rstest]
fn unknown_subcommands_are_rejected() {
    let err = Cli::try_parse_from(["ryv", "publish"]).expect_err("unknown subcommand");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
}
