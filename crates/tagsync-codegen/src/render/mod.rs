//! Tera-based rendering of update-tags functions.
//!
//! The built-in template is compiled into the crate; a replacement can be
//! loaded from disk with [`Renderer::from_file`]. Either way the template sees
//! a single `services` list of [`ServiceMetadata`] views and the `snake_case`
//! filter.

mod filters;

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::CodegenError;
use crate::registry::ServiceMetadata;

/// Source of the built-in update-tags template.
pub const UPDATE_TAGS_TEMPLATE: &str = include_str!("../../templates/update_tags.rs.tera");

const TEMPLATE_NAME: &str = "update_tags.rs.tera";

#[derive(Debug, Serialize)]
struct TemplateData<'a> {
    services: &'a [ServiceMetadata],
}

/// Template engine holding the parsed update-tags template.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Renderer for the built-in template.
    pub fn new() -> Result<Self, CodegenError> {
        Self::from_source(UPDATE_TAGS_TEMPLATE)
    }

    /// Parse `source` as the update-tags template.
    pub fn from_source(source: &str) -> Result<Self, CodegenError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("snake_case", filters::snake_case);
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(CodegenError::TemplateParse)?;

        Ok(Self { tera })
    }

    /// Load and parse a replacement template from `path`.
    pub fn from_file(path: &Path) -> Result<Self, CodegenError> {
        let source = std::fs::read_to_string(path).map_err(|source| CodegenError::TemplateLoad {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded replacement template");
        Self::from_source(&source)
    }

    /// Render one source unit covering `services`, in the order given.
    ///
    /// The output is unformatted; see [`crate::format::format_source`].
    pub fn render(&self, services: &[ServiceMetadata]) -> Result<String, CodegenError> {
        let context =
            Context::from_serialize(TemplateData { services }).map_err(CodegenError::Render)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(CodegenError::Render)
    }

    /// Render the unit for a single service, with a preamble importing only
    /// that service's client crate.
    pub fn render_service(&self, service: &ServiceMetadata) -> Result<String, CodegenError> {
        self.render(std::slice::from_ref(service))
    }
}
