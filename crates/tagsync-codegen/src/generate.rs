//! Generation driver: resolve, render, format, persist.

use std::path::{Path, PathBuf};

use crate::error::CodegenError;
use crate::format::format_source;
use crate::registry::{ServiceMetadata, SERVICE_NAMES};
use crate::render::Renderer;
use crate::writer::atomic_write;

/// Output file used when no path is configured.
pub const DEFAULT_OUTPUT: &str = "update_tags_gen.rs";

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub services: usize,
    pub bytes: usize,
}

/// Drives one generation run over a list of service identifiers.
#[derive(Debug)]
pub struct Generator {
    renderer: Renderer,
    service_names: Vec<String>,
}

impl Generator {
    /// Generator over the full service list.
    pub fn new(renderer: Renderer) -> Self {
        Self::with_services(renderer, SERVICE_NAMES.iter().copied())
    }

    /// Generator over an explicit service list.
    pub fn with_services<I, S>(renderer: Renderer, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            renderer,
            service_names: services.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolved views in lexicographic order of service identifier.
    pub fn metadata(&self) -> Vec<ServiceMetadata> {
        let mut names: Vec<&str> = self.service_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names.into_iter().map(ServiceMetadata::resolve).collect()
    }

    /// Render and format the complete unit without writing it.
    pub fn generate_source(&self) -> Result<String, CodegenError> {
        let services = self.metadata();
        let rendered = self.renderer.render(&services)?;
        format_source(&rendered)
    }

    /// Generate the unit and atomically replace `output` with it.
    ///
    /// Nothing is written unless rendering and formatting both succeed.
    pub fn generate(&self, output: &Path) -> Result<GenerationReport, CodegenError> {
        let services = self.metadata();
        tracing::info!(services = services.len(), output = %output.display(), "Generating update-tags functions");

        let rendered = self.renderer.render(&services)?;
        let source = format_source(&rendered)?;

        atomic_write(output, &source).map_err(|source| CodegenError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::info!(output = %output.display(), bytes = source.len(), "Wrote generated file");

        Ok(GenerationReport {
            output: output.to_path_buf(),
            services: services.len(),
            bytes: source.len(),
        })
    }
}
