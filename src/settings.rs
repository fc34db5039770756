//! Settings for the checker binary.
//!
//! Sources, later ones winning: built-in defaults, a config file
//! (`restorecheck.json`, `.toml` or `.yaml` in the working directory unless a
//! path is given), and `RESTORECHECK_*` environment variables.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub output: OutputFormat,
    /// Print the reason for a rejection next to the verdict.
    pub diagnostics: bool,
}

impl Settings {
    pub const DEFAULT_FILE: &'static str = "restorecheck";
    pub const ENV_PREFIX: &'static str = "RESTORECHECK";

    /// Loads settings. An explicit `path` must exist; the default file may not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(Self::DEFAULT_FILE).required(false),
        };
        let settings = Config::builder()
            .set_default("log_filter", "warn")?
            .set_default("output", "text")?
            .set_default("diagnostics", false)?
            .add_source(file)
            .add_source(Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { log_filter: "warn".to_string(), output: OutputFormat::Text, diagnostics: false }
    }
}
