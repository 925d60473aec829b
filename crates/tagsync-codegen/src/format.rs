//! Formatting pass for rendered source.
//!
//! Rendered text is parsed as a complete Rust file first, so a template or
//! metadata defect that produces invalid syntax fails here instead of being
//! written out. The parsed file is then pretty-printed, which also removes any
//! whitespace noise the template left behind.

use crate::error::CodegenError;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by tagsync-ctl generate; DO NOT EDIT.";

/// Validate and format `source`, prefixing the generated-code header.
pub fn format_source(source: &str) -> Result<String, CodegenError> {
    let file = syn::parse_file(source).map_err(CodegenError::Format)?;
    let formatted = prettyplease::unparse(&file);
    Ok(format!("{GENERATED_HEADER}\n\n{formatted}"))
}
