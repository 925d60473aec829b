//! `services`: list registered services or show one resolved view.

use tagsync_codegen::registry::{sorted_service_names, TagValue, UntagValue};
use tagsync_codegen::{ServiceMetadata, SERVICE_NAMES};

use crate::error::{CliError, CliResult};
use crate::output;

pub(crate) fn handle_services_command(name: Option<&str>, json: bool) -> CliResult<()> {
    match name {
        Some(name) => show_service(name, json),
        None => list_services(json),
    }
}

fn list_services(json: bool) -> CliResult<()> {
    let names = sorted_service_names();

    if json {
        let text = serde_json::to_string_pretty(&names).map_err(CliError::Serialize)?;
        output::plain(text);
        return Ok(());
    }

    output::heading(format!("Services ({}):", names.len()));
    for name in names {
        output::bullet(name);
    }
    Ok(())
}

fn show_service(name: &str, json: bool) -> CliResult<()> {
    let service = ServiceMetadata::resolve(name);

    if json {
        let text = serde_json::to_string_pretty(&service).map_err(CliError::Serialize)?;
        output::plain(text);
        return Ok(());
    }

    output::heading(format!("Service: {}", service.name));
    if !SERVICE_NAMES.contains(&name) {
        output::muted("  (not registered; showing defaults)");
    }
    output::field("Package", &service.tag_package);
    if service.alias != service.name {
        output::field("Crate alias", &service.alias);
    }
    output::field("Client", &service.client_type);
    output::field("Tag function", &service.tag_function);
    output::field("Untag function", &service.untag_function);
    if let Some(size) = service.batch_size {
        output::field("Batch size", size);
    }
    let identifier = if service.identifier_is_sequence {
        format!("{} (sequence)", service.identifier_field)
    } else {
        service.identifier_field.clone()
    };
    output::field("Identifier field", identifier);
    if let Some(field) = &service.resource_type_field {
        output::field("Resource type field", field);
    }
    output::field("Tags field", &service.tags_field);
    output::field("Untag tags field", &service.untag_tags_field);
    output::field("Tag value", describe_tag_value(&service.tag_value));
    output::field("Untag value", describe_untag_value(&service.untag_value));

    Ok(())
}

fn describe_tag_value(value: &TagValue) -> String {
    match value {
        TagValue::Default => "service tags".to_string(),
        TagValue::CustomExpression(expr) => format!("custom: {expr}"),
    }
}

fn describe_untag_value(value: &UntagValue) -> String {
    match value {
        UntagValue::FullTagObjects => "service tags".to_string(),
        UntagValue::TagKeyObjects => "service tag keys".to_string(),
        UntagValue::CustomExpression(expr) => format!("custom: {expr}"),
        UntagValue::KeySequence => "key list".to_string(),
    }
}
