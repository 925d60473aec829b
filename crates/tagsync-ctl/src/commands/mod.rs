//! Command handlers for the tagsync CLI

pub(crate) mod generate;
pub(crate) mod plan;
pub(crate) mod render;
pub(crate) mod services;

pub(crate) use generate::handle_generate_command;
pub(crate) use plan::handle_plan_command;
pub(crate) use render::handle_render_command;
pub(crate) use services::handle_services_command;

use std::path::Path;

use tagsync_codegen::{CodegenError, Renderer};

/// Built-in renderer, or one parsed from a replacement template.
fn load_renderer(template: Option<&Path>) -> Result<Renderer, CodegenError> {
    match template {
        Some(path) => Renderer::from_file(path),
        None => Renderer::new(),
    }
}
