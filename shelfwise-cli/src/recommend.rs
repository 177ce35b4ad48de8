//! Recommend command implementation for the Shelfwise CLI.

use std::io::{BufRead, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use shelfwise_core::{Catalog, RecommendationRequest, ratings_for_user, recommend_for_user};
use shelfwise_data::{load_catalog, load_ratings};

use crate::report::{OutputFormat, Report, write_report};
use crate::{
    ARG_AMOUNT, ARG_BOOKS, ARG_FORMAT, ARG_NON_INTERACTIVE, ARG_OUTPUT, ARG_RATINGS, ARG_SEED,
    ARG_USER, CliError, ConsolePrompt, ENV_AMOUNT, ENV_USER,
};

const DEFAULT_BOOKS: &str = "books.txt";
const DEFAULT_RATINGS: &str = "ratings.txt";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend books to a reader by ranking the other readers in \
                 the ratings file by similarity and collecting the books they \
                 liked that the reader has not rated. Readers missing from the \
                 ratings file are asked to rate a random fifth of the catalog \
                 first.",
    about = "Recommend unread books to a reader"
)]
#[ortho_config(prefix = "SHELFWISE")]
pub(crate) struct RecommendArgs {
    /// Path to the books file (`author,title` per line).
    #[arg(long = ARG_BOOKS, value_name = "path")]
    #[serde(default)]
    pub(crate) books: Option<Utf8PathBuf>,
    /// Path to the ratings file.
    #[arg(long = ARG_RATINGS, value_name = "path")]
    #[serde(default)]
    pub(crate) ratings: Option<Utf8PathBuf>,
    /// Reader to recommend books to; prompted for when omitted.
    #[arg(long = ARG_USER, value_name = "name")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Maximum number of books to recommend; prompted for when omitted.
    #[arg(long = ARG_AMOUNT, value_name = "count")]
    #[serde(default)]
    pub(crate) amount: Option<usize>,
    /// Also write the report to this file.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Seed for choosing which books an unknown reader rates.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Fail instead of prompting for missing answers.
    #[arg(
        long = ARG_NON_INTERACTIVE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) non_interactive: Option<bool>,
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
    pub(crate) books: Utf8PathBuf,
    pub(crate) ratings: Utf8PathBuf,
    pub(crate) user: Option<String>,
    pub(crate) amount: Option<usize>,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) seed: Option<u64>,
    pub(crate) format: OutputFormat,
    pub(crate) interactive: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.books, ARG_BOOKS)?;
        Self::require_existing(&self.ratings, ARG_RATINGS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match shelfwise_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
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
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let interactive = !args.non_interactive.unwrap_or(false);
        if !interactive {
            if args.user.is_none() {
                return Err(CliError::MissingArgument {
                    field: ARG_USER,
                    env: ENV_USER,
                });
            }
            if args.amount.is_none() {
                return Err(CliError::MissingArgument {
                    field: ARG_AMOUNT,
                    env: ENV_AMOUNT,
                });
            }
        }

        Ok(Self {
            books: args
                .books
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_BOOKS)),
            ratings: args
                .ratings
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_RATINGS)),
            user: args.user,
            amount: args.amount,
            output: args.output,
            seed: args.seed,
            format: args.format.unwrap_or_default(),
            interactive,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdin, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let catalog = load_catalog(&config.books)?;
    let store = load_ratings(&config.ratings, catalog.len())?;

    let mut prompt = ConsolePrompt::new(&mut *input, &mut *output);
    let user = match config.user.clone() {
        Some(user) => user,
        None => prompt.ask_user_name().map_err(CliError::Prompt)?,
    };
    if !config.interactive && !store.contains(&user) {
        return Err(CliError::UnknownUser { user });
    }

    let mut rng = config
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let ratings = ratings_for_user(&catalog, &store, &user, &mut prompt, &mut rng)?;
    let amount = match config.amount {
        Some(amount) => ensure_amount_fits(amount, &catalog)?,
        None => prompt.ask_amount(catalog.len()).map_err(CliError::Prompt)?,
    };
    drop(prompt);

    let request = RecommendationRequest::new(&user, &ratings, amount);
    let outcome = recommend_for_user(&catalog, &store, &request)?;
    info!(
        "recommending {} books to {user}",
        outcome.recommendations.len()
    );

    let report = Report {
        user: &user,
        amount,
        recommendations: &outcome.recommendations,
    };
    let rendered = report.render(config.format)?;
    write_report(output, &rendered)?;
    if let Some(path) = &config.output {
        write_report_file(path, &rendered)?;
    }
    Ok(())
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn ensure_amount_fits(amount: usize, catalog: &Catalog) -> Result<usize, CliError> {
    if amount > catalog.len() {
        return Err(CliError::AmountExceedsCatalog {
            amount,
            catalog_len: catalog.len(),
        });
    }
    Ok(amount)
}

fn write_report_file(path: &Utf8Path, rendered: &str) -> Result<(), CliError> {
    let mut file =
        shelfwise_fs::create_utf8_file(path).map_err(|source| CliError::WriteOutputFile {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(rendered.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| CliError::WriteOutputFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
