//! Generation failures.
//!
//! Each category aborts the run and maps to its own process exit code so
//! build scripts can tell a broken template from an unwritable output path.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("error reading template ({path}): {source}")]
    TemplateLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing template: {0}")]
    TemplateParse(#[source] tera::Error),

    #[error("error executing template: {0}")]
    Render(#[source] tera::Error),

    #[error("error formatting generated file: {0}")]
    Format(#[source] syn::Error),

    #[error("error writing to file ({path}): {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Short name of the failure category.
    pub fn category(&self) -> &'static str {
        match self {
            Self::TemplateLoad { .. } | Self::TemplateParse(_) => "template",
            Self::Render(_) => "render",
            Self::Format(_) => "format",
            Self::Write { .. } => "write",
        }
    }

    /// Process exit code for this failure category.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TemplateLoad { .. } | Self::TemplateParse(_) => 2,
            Self::Render(_) => 3,
            Self::Format(_) => 4,
            Self::Write { .. } => 5,
        }
    }
}
