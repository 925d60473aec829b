//! `generate`: write the update-tags file for every service.

use std::path::PathBuf;

use tagsync_codegen::Generator;

use super::load_renderer;
use crate::cli_config::CliConfig;
use crate::error::CliResult;
use crate::output;

pub(crate) fn handle_generate_command(
    cli_config: &CliConfig,
    output_flag: Option<PathBuf>,
    template_flag: Option<PathBuf>,
) -> CliResult<()> {
    let output_path = cli_config.output_path(output_flag);
    let template_path = cli_config.template_path(template_flag);

    let renderer = load_renderer(template_path.as_deref())?;
    let report = Generator::new(renderer).generate(&output_path)?;

    output::success(format!(
        "Generated update-tags functions for {} services",
        report.services
    ));
    output::field("Output", report.output.display());
    if let Some(template) = &template_path {
        output::field("Template", template.display());
    }
    output::field("Bytes", report.bytes);

    Ok(())
}
