//! `render`: print the formatted unit for one service.

use std::path::PathBuf;

use tagsync_codegen::format::format_source;
use tagsync_codegen::ServiceMetadata;

use super::load_renderer;
use crate::cli_config::CliConfig;
use crate::error::CliResult;
use crate::output;

pub(crate) fn handle_render_command(
    cli_config: &CliConfig,
    name: &str,
    template_flag: Option<PathBuf>,
) -> CliResult<()> {
    let template_path = cli_config.template_path(template_flag);
    let renderer = load_renderer(template_path.as_deref())?;

    let service = ServiceMetadata::resolve(name);
    let source = format_source(&renderer.render_service(&service)?)?;

    output::plain(source.trim_end());
    Ok(())
}
