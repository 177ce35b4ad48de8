//! Focused unit tests covering recommend configuration and execution.

use super::helpers::{DataFiles, RATINGS};
use super::*;
use ortho_config::MergeComposer;
use rstest::{fixture, rstest};
use serde_json::json;
use std::io::Cursor;

#[fixture]
fn data() -> DataFiles {
    DataFiles::new()
}

fn run_with_input(args: RecommendArgs, input: &str) -> (Result<(), CliError>, String) {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let result = run_recommend_with(args, &mut stdin, &mut stdout);
    (result, String::from_utf8(stdout).expect("stdout utf-8"))
}

#[rstest]
#[case(None, Some(3), ARG_USER, ENV_USER)]
#[case(Some("alice"), None, ARG_AMOUNT, ENV_AMOUNT)]
fn non_interactive_runs_require_user_and_amount(
    #[case] user: Option<&str>,
    #[case] amount: Option<usize>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RecommendArgs {
        user: user.map(str::to_owned),
        amount,
        non_interactive: Some(true),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn interactive_config_defaults_paths_and_format() {
    let config = RecommendConfig::try_from(RecommendArgs::default()).expect("config");
    assert_eq!(config.books, Utf8PathBuf::from("books.txt"));
    assert_eq!(config.ratings, Utf8PathBuf::from("ratings.txt"));
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.interactive);
    assert!(config.user.is_none());
}

#[rstest]
fn validate_sources_reports_missing_files(data: DataFiles) {
    let config = RecommendConfig::try_from(RecommendArgs {
        books: Some(data.root.join("missing-books.txt")),
        ..data.args()
    })
    .expect("config");
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_BOOKS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(data: DataFiles) {
    let config = RecommendConfig::try_from(RecommendArgs {
        ratings: Some(data.root.clone()),
        ..data.args()
    })
    .expect("config");
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_RATINGS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "amount": "several" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "books": "from-file-books.txt",
            "user": "from-file",
            "format": "json",
        }),
        None,
    );
    composer.push_environment(json!({
        "user": "from-env",
        "amount": 2,
    }));
    composer.push_cli(json!({
        "amount": 4,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.books, Utf8PathBuf::from("from-file-books.txt"));
    assert_eq!(config.ratings, Utf8PathBuf::from("ratings.txt"));
    assert_eq!(config.user.as_deref(), Some("from-env"));
    assert_eq!(config.amount, Some(4));
    assert_eq!(config.format, OutputFormat::Json);
}

#[rstest]
fn non_interactive_from_environment_survives_cli_layer() {
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "non_interactive": true }));
    composer.push_cli(json!({ "books": "cli-books.txt" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("environment disables prompting");
    match err {
        CliError::MissingArgument { field, .. } => assert_eq!(field, ARG_USER),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn cli_layer_can_reenable_prompting() {
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "non_interactive": true }), None);
    composer.push_cli(json!({ "non_interactive": false }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("prompting re-enabled");
    assert!(config.interactive);
}

#[rstest]
fn bare_flag_disables_prompting() {
    let cli = Cli::try_parse_from(["shelfwise", "recommend", "--non-interactive"])
        .expect("flag parses without a value");
    let Command::Recommend(args) = cli.command;
    assert_eq!(args.non_interactive, Some(true));
}

#[rstest]
fn known_user_gets_tie_broken_recommendations(data: DataFiles) {
    let args = RecommendArgs {
        user: Some("alice".to_owned()),
        amount: Some(2),
        non_interactive: Some(true),
        ..data.args()
    };

    let (result, stdout) = run_with_input(args, "");

    result.expect("recommend succeeds");
    assert_eq!(
        stdout,
        "Book Recommendations for alice\n\
         ----------------------------\n\
         Number of books: 2\n\
         Dune recommended by carol\n\
         Emma recommended by bob\n"
    );
}

#[rstest]
fn prompts_fill_in_user_and_amount(data: DataFiles) {
    let (result, stdout) = run_with_input(data.args(), "alice\nlots\n9\n1\n");

    result.expect("recommend succeeds");
    assert!(stdout.starts_with("Enter User Name: How many books would you like? "));
    assert_eq!(stdout.matches("Error: Invalid Amount!").count(), 2);
    assert!(stdout.ends_with("Number of books: 1\nDune recommended by carol\n"));
}

#[rstest]
fn unknown_user_is_asked_for_ratings(data: DataFiles) {
    let args = RecommendArgs {
        user: Some("zoe".to_owned()),
        amount: Some(1),
        seed: Some(7),
        ..data.args()
    };

    let (result, stdout) = run_with_input(args, "0\n5\n");

    result.expect("recommend succeeds");
    assert_eq!(stdout.matches("Enter rating for ").count(), 2);
    assert_eq!(stdout.matches("Error: Invalid Rating!").count(), 1);
    assert_eq!(stdout.matches(" recommended by ").count(), 1);
}

#[rstest]
fn unknown_user_without_prompting_fails(data: DataFiles) {
    let args = RecommendArgs {
        user: Some("zoe".to_owned()),
        amount: Some(1),
        non_interactive: Some(true),
        ..data.args()
    };

    let (result, _) = run_with_input(args, "");

    match result.expect_err("unknown user should fail") {
        CliError::UnknownUser { user } => assert_eq!(user, "zoe"),
        other => panic!("expected UnknownUser, found {other:?}"),
    }
}

#[rstest]
fn configured_amount_larger_than_catalog_fails(data: DataFiles) {
    let args = RecommendArgs {
        user: Some("alice".to_owned()),
        amount: Some(4),
        ..data.args()
    };

    let (result, _) = run_with_input(args, "");

    match result.expect_err("oversized amount should fail") {
        CliError::AmountExceedsCatalog {
            amount,
            catalog_len,
        } => {
            assert_eq!(amount, 4);
            assert_eq!(catalog_len, 3);
        }
        other => panic!("expected AmountExceedsCatalog, found {other:?}"),
    }
}

#[rstest]
fn truncated_input_surfaces_prompt_error(data: DataFiles) {
    let (result, _) = run_with_input(data.args(), "");

    match result.expect_err("empty stdin should fail") {
        CliError::Prompt(source) => {
            assert_eq!(source.kind(), std::io::ErrorKind::UnexpectedEof);
        }
        other => panic!("expected Prompt, found {other:?}"),
    }
}

#[rstest]
fn json_format_renders_report(data: DataFiles) {
    let args = RecommendArgs {
        user: Some("bob".to_owned()),
        amount: Some(1),
        format: Some(OutputFormat::Json),
        non_interactive: Some(true),
        ..data.args()
    };

    let (result, stdout) = run_with_input(args, "");

    result.expect("recommend succeeds");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(value["user"], "bob");
    assert_eq!(value["amount"], 1);
    assert!(value["recommendations"].is_array());
}

#[rstest]
fn malformed_ratings_surface_load_errors(data: DataFiles) {
    std::fs::write(&data.ratings, format!("{RATINGS}dave\n")).expect("rewrite ratings");
    let args = RecommendArgs {
        user: Some("alice".to_owned()),
        amount: Some(1),
        ..data.args()
    };

    let (result, _) = run_with_input(args, "");

    match result.expect_err("dangling user should fail") {
        CliError::Load(shelfwise_data::LoadError::Parse { source, .. }) => {
            assert!(matches!(
                source,
                shelfwise_data::ParseError::MissingRatings { line: 7, .. }
            ));
        }
        other => panic!("expected Load, found {other:?}"),
    }
}
