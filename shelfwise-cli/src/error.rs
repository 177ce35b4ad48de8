//! Error types emitted by the Shelfwise CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use shelfwise_core::{ElicitError, RecommendError};
use shelfwise_data::LoadError;
use thiserror::Error;

/// Errors emitted by the Shelfwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing and prompting is disabled.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the books or ratings file failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The user is unknown and ratings cannot be elicited without prompting.
    #[error("{user} has no stored ratings and prompting is disabled")]
    UnknownUser { user: String },
    /// The configured amount is larger than the catalog.
    #[error("cannot recommend {amount} books from a catalog of {catalog_len}")]
    AmountExceedsCatalog { amount: usize, catalog_len: usize },
    /// Reading an interactive answer failed.
    #[error("failed to read interactive input: {0}")]
    Prompt(#[source] std::io::Error),
    /// Eliciting ratings for an unknown user failed.
    #[error("failed to elicit ratings: {0}")]
    Elicit(#[from] ElicitError),
    /// The recommendation pipeline rejected the request.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising the JSON report failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report to stdout failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the report file failed.
    #[error("failed to write recommendations to {path:?}: {source}")]
    WriteOutputFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
