//! How tag payloads are built for each direction.
//!
//! Custom expressions are Rust expressions spliced verbatim into the request
//! builder chain. They may refer to `updated_tags` / `removed_tags`, the
//! service crate alias, and `identifier`.

/// Whether untagging takes full tag objects (key and value) rather than keys.
pub fn untag_input_requires_tag_type(service: &str) -> bool {
    matches!(service, "acm" | "acmpca" | "cloudtrail" | "ec2")
}

/// Whether untagging takes service-specific tag key objects.
pub fn untag_input_requires_tag_key_type(service: &str) -> bool {
    matches!(service, "elb")
}

/// Replacement expression for the tagging payload, if the service needs one.
pub fn tag_input_custom_value(service: &str) -> Option<&'static str> {
    match service {
        "cloudfront" => Some(
            "cloudfront::types::Tags::builder().set_items(Some(updated_tags.ignore_aws().cloudfront_tags())).build()",
        ),
        "kinesis" => Some("updated_tags.ignore_aws().map()"),
        "pinpoint" => Some(
            "pinpoint::types::TagsModel::builder().set_tags(Some(updated_tags.ignore_aws().map())).build().map_err(|err| UpdateTagsError::tagging(identifier, err))?",
        ),
        _ => None,
    }
}

/// Replacement expression for the untagging payload, if the service needs one.
pub fn untag_input_custom_value(service: &str) -> Option<&'static str> {
    match service {
        "cloudfront" => Some(
            "cloudfront::types::TagKeys::builder().set_items(Some(removed_tags.ignore_aws().keys())).build()",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untag_policies() {
        assert!(untag_input_requires_tag_type("ec2"));
        assert!(untag_input_requires_tag_key_type("elb"));
        assert!(!untag_input_requires_tag_type("rds"));
        assert!(!untag_input_requires_tag_key_type("rds"));
    }

    #[test]
    fn test_custom_values() {
        assert_eq!(
            tag_input_custom_value("kinesis"),
            Some("updated_tags.ignore_aws().map()")
        );
        assert!(tag_input_custom_value("rds").is_none());
        assert!(untag_input_custom_value("cloudfront").is_some());
        assert!(untag_input_custom_value("kinesis").is_none());
    }

    #[test]
    fn test_custom_values_parse_as_expressions() {
        for service in ["cloudfront", "kinesis", "pinpoint"] {
            let expr = tag_input_custom_value(service).unwrap();
            assert!(syn::parse_str::<syn::Expr>(expr).is_ok(), "{service}: {expr}");
        }
        let expr = untag_input_custom_value("cloudfront").unwrap();
        assert!(syn::parse_str::<syn::Expr>(expr).is_ok());
    }
}
