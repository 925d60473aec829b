//! Client crate and type names for each service.

/// The AWS SDK for Rust crate that hosts the service client.
///
/// Most crates are `aws_sdk_<service>`; the exceptions are services whose
/// SDK crate is named after the API rather than the provider's identifier.
pub fn tag_package(service: &str) -> String {
    let crate_suffix = match service {
        "configservice" => "config",
        "databasemigrationservice" => "databasemigration",
        "directoryservice" => "directory",
        "elasticsearchservice" => "elasticsearch",
        "elb" => "elasticloadbalancing",
        "elbv2" => "elasticloadbalancingv2",
        other => other,
    };
    format!("aws_sdk_{crate_suffix}")
}

/// Identifiers that cannot be written bare in Rust 2021 or 2024 source.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Path keywords have no raw form.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// Name the service's SDK crate is imported under in generated code.
///
/// Keywords get a raw identifier (`r#type`); `crate`, `self` and `super`
/// cannot be raw and get a trailing underscore instead.
pub fn crate_alias(service: &str) -> String {
    if PATH_KEYWORDS.contains(&service) {
        format!("{service}_")
    } else if RUST_KEYWORDS.contains(&service) {
        format!("r#{service}")
    } else {
        service.to_string()
    }
}

/// The client type, relative to the `use <tag_package> as <alias>;` line
/// emitted in the generated preamble.
pub fn client_type(service: &str) -> String {
    format!("{}::Client", crate_alias(service))
}
