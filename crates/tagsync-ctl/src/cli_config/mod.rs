//! CLI configuration for output and template locations.
//!
//! Flags given on the command line always win over the config file.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use std::path::PathBuf;

use serde::Deserialize;
use tagsync_codegen::DEFAULT_OUTPUT;

use loader::expand_path;

/// Developer preferences read from `.tagsync.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Where `generate` writes the generated file.
    pub output: Option<String>,

    /// Replacement for the built-in update-tags template.
    pub template: Option<String>,
}

impl CliConfig {
    /// Output path: flag, then config, then the default file name.
    pub(crate) fn output_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output.as_deref().map(expand_path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Template path: flag, then config. `None` selects the built-in template.
    pub(crate) fn template_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.template.as_deref().map(expand_path))
    }
}
