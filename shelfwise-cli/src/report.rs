//! Render recommendations for people and machines.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shelfwise_core::Recommendation;

use crate::CliError;

/// How the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one recommendation per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Everything shown to the reader once the pipeline finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Report<'a> {
    pub(crate) user: &'a str,
    pub(crate) amount: usize,
    pub(crate) recommendations: &'a [Recommendation],
}

impl Report<'_> {
    pub(crate) fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(CliError::SerialiseReport),
        }
    }

    fn render_text(&self) -> String {
        let mut text = format!(
            "Book Recommendations for {}\n----------------------------\nNumber of books: {}\n",
            self.user, self.amount
        );
        for pick in self.recommendations {
            text.push_str(&format!(
                "{} recommended by {}\n",
                pick.title, pick.recommended_by
            ));
        }
        text
    }
}

pub(crate) fn write_report(writer: &mut dyn Write, rendered: &str) -> Result<(), CliError> {
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(CliError::WriteOutput)
}
