//! `plan`: show the requests an update-tags function would send.

use tagsync_codegen::{plan_update, PlannedCall, ServiceMetadata};
use tagsync_tags::KeyValueTags;

use crate::error::{CliError, CliResult};
use crate::output;

pub(crate) fn handle_plan_command(name: &str, old: &str, new: &str, json: bool) -> CliResult<()> {
    let old_tags = parse_tags("--old", old)?;
    let new_tags = parse_tags("--new", new)?;

    let service = ServiceMetadata::resolve(name);
    let calls = plan_update(&service, &old_tags, &new_tags)?;

    if json {
        let text = serde_json::to_string_pretty(&calls).map_err(CliError::Serialize)?;
        output::plain(text);
        return Ok(());
    }

    if calls.is_empty() {
        output::muted(format!("No changes for {}.", service.name));
        return Ok(());
    }

    output::heading(format!("Planned calls for {} ({}):", service.name, calls.len()));
    for call in &calls {
        match call {
            PlannedCall::Combined {
                operation,
                tags,
                untag_keys,
            } => {
                output::bullet(operation);
                output::field("set", format_tags(tags));
                output::field("remove", untag_keys.join(", "));
            }
            PlannedCall::Untag { operation, tags } => {
                output::bullet(operation);
                output::field("remove", tags.keys().join(", "));
            }
            PlannedCall::Tag { operation, tags } => {
                output::bullet(operation);
                output::field("set", format_tags(tags));
            }
        }
    }

    Ok(())
}

/// Tag sets come in as JSON: an object, `[key, value]` pairs, or
/// `{"Key", "Value"}` objects.
fn parse_tags(argument: &'static str, text: &str) -> CliResult<KeyValueTags> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| CliError::InvalidJson { argument, source })?;
    Ok(KeyValueTags::from(value))
}

fn format_tags(tags: &KeyValueTags) -> String {
    tags.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
