//! Shared test harness modules for the Shelfwise CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::recommend::{RecommendConfig, config_from_layers_for_test, run_recommend_with};
use camino::Utf8PathBuf;

mod helpers;
mod unit;
