//! Custom Tera filter for case conversion.
//!
//! Registry facts use AWS API model spelling (`AddTagsToResource`,
//! `ResourceARN`); the template turns them into Rust method names with
//! `snake_case`.

use std::collections::HashMap;

use heck::ToSnakeCase;
use tera::{Result, Value};

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(s.to_snake_case()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(filter: fn(&Value, &HashMap<String, Value>) -> Result<Value>, input: &str) -> String {
        let val = Value::String(input.to_string());
        let args = HashMap::new();
        filter(&val, &args).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_snake_case_operation_names() {
        assert_eq!(apply(snake_case, "AddTagsToResource"), "add_tags_to_resource");
        assert_eq!(apply(snake_case, "TagResource"), "tag_resource");
        assert_eq!(apply(snake_case, "Untag"), "untag");
    }

    #[test]
    fn test_snake_case_field_acronyms() {
        assert_eq!(apply(snake_case, "ResourceARN"), "resource_arn");
        assert_eq!(apply(snake_case, "ARN"), "arn");
        assert_eq!(apply(snake_case, "QueueUrl"), "queue_url");
        assert_eq!(apply(snake_case, "TagKeyList"), "tag_key_list");
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let val = Value::Number(42.into());
        let args = HashMap::new();
        assert!(snake_case(&val, &args).is_err());
    }
}
