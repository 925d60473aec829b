//! Service metadata registry.
//!
//! Every fact the renderer needs is a total function of the service
//! identifier with an explicit default branch, so services that follow the
//! conventional `TagResource`/`UntagResource` shape need no entry at all.
//! Supporting a service that deviates means adding a match arm to the fact
//! function concerned; the renderer and driver stay untouched.
//!
//! [`ServiceMetadata::resolve`] gathers all facts for one service into the
//! view handed to the template.

mod fields;
mod functions;
mod packages;
mod values;

pub use fields::{
    tag_input_identifier_field, tag_input_identifier_requires_slice,
    tag_input_resource_type_field, tag_input_tags_field, untag_input_tags_field,
};
pub use functions::{tag_function, tag_function_batch_size, untag_function};
pub use packages::{client_type, crate_alias, tag_package};
pub use values::{
    tag_input_custom_value, untag_input_custom_value, untag_input_requires_tag_key_type,
    untag_input_requires_tag_type,
};

use serde::Serialize;

/// Service identifiers that get an update-tags function.
///
/// Kept in the order they were added; the driver sorts before rendering.
pub const SERVICE_NAMES: &[&str] = &[
    "accessanalyzer",
    "acm",
    "acmpca",
    "amplify",
    "apigateway",
    "apigatewayv2",
    "appmesh",
    "appstream",
    "appsync",
    "athena",
    "backup",
    "cloud9",
    "cloudfront",
    "cloudhsmv2",
    "cloudtrail",
    "cloudwatch",
    "cloudwatchevents",
    "cloudwatchlogs",
    "codecommit",
    "codedeploy",
    "codepipeline",
    "codestarnotifications",
    "cognitoidentity",
    "cognitoidentityprovider",
    "configservice",
    "databasemigrationservice",
    "dataexchange",
    "datapipeline",
    "datasync",
    "dax",
    "devicefarm",
    "directconnect",
    "directoryservice",
    "dlm",
    "docdb",
    "dynamodb",
    "ec2",
    "ecr",
    "ecs",
    "efs",
    "eks",
    "elasticache",
    "elasticbeanstalk",
    "elasticsearchservice",
    "elb",
    "elbv2",
    "emr",
    "firehose",
    "fsx",
    "gamelift",
    "glacier",
    "globalaccelerator",
    "glue",
    "guardduty",
    "greengrass",
    "imagebuilder",
    "iot",
    "iotanalytics",
    "iotevents",
    "kafka",
    "kinesis",
    "kinesisanalytics",
    "kinesisanalyticsv2",
    "kinesisvideo",
    "kms",
    "lambda",
    "licensemanager",
    "lightsail",
    "mediaconnect",
    "mediaconvert",
    "medialive",
    "mediapackage",
    "mediastore",
    "mq",
    "neptune",
    "opsworks",
    "organizations",
    "pinpoint",
    "qldb",
    "quicksight",
    "ram",
    "rds",
    "redshift",
    "resourcegroups",
    "route53",
    "route53resolver",
    "sagemaker",
    "secretsmanager",
    "securityhub",
    "sfn",
    "sns",
    "sqs",
    "ssm",
    "storagegateway",
    "swf",
    "transfer",
    "waf",
    "wafregional",
    "wafv2",
];

/// Service identifiers in lexicographic order.
pub fn sorted_service_names() -> Vec<&'static str> {
    let mut names = SERVICE_NAMES.to_vec();
    names.sort_unstable();
    names
}

/// How the tagging request's tags field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "expr", rename_all = "snake_case")]
pub enum TagValue {
    /// `updated_tags.ignore_aws().<service>_tags()`
    Default,
    CustomExpression(String),
}

/// How the untagging request's tags field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "expr", rename_all = "snake_case")]
pub enum UntagValue {
    /// Full service-native tags (key and value).
    FullTagObjects,
    /// Service-native tag key objects.
    TagKeyObjects,
    CustomExpression(String),
    /// Plain list of key strings.
    KeySequence,
}

impl UntagValue {
    /// Resolve the untag payload policy for `service`.
    ///
    /// The three overrides are checked in a fixed order; the first one that
    /// applies wins and the rest are never consulted.
    pub fn resolve(service: &str) -> Self {
        Self::from_flags(
            untag_input_requires_tag_type(service),
            untag_input_requires_tag_key_type(service),
            untag_input_custom_value(service),
        )
    }

    /// Pick the payload from the three override facts, highest priority first.
    pub fn from_flags(full_tag_objects: bool, tag_key_objects: bool, custom: Option<&str>) -> Self {
        match (full_tag_objects, tag_key_objects, custom) {
            (true, _, _) => Self::FullTagObjects,
            (false, true, _) => Self::TagKeyObjects,
            (false, false, Some(expr)) => Self::CustomExpression(expr.to_string()),
            (false, false, None) => Self::KeySequence,
        }
    }
}

/// All API-shape facts for one service, as seen by the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceMetadata {
    /// Service identifier (e.g. `rds`).
    pub name: String,
    /// Crate alias in generated code; differs from `name` only for Rust keywords.
    pub alias: String,
    pub tag_package: String,
    pub client_type: String,
    pub tag_function: String,
    pub untag_function: String,
    /// `None` when calls are not batched.
    pub batch_size: Option<usize>,
    pub identifier_field: String,
    pub identifier_is_sequence: bool,
    pub resource_type_field: Option<String>,
    pub tags_field: String,
    pub untag_tags_field: String,
    pub tag_value: TagValue,
    pub untag_value: UntagValue,
}

impl ServiceMetadata {
    /// Look up every fact for `service`. Unknown services get the defaults.
    pub fn resolve(service: &str) -> Self {
        let batch_size = match tag_function_batch_size(service) {
            0 => None,
            size => Some(size),
        };
        let tag_value = match tag_input_custom_value(service) {
            Some(expr) => TagValue::CustomExpression(expr.to_string()),
            None => TagValue::Default,
        };

        Self {
            name: service.to_string(),
            alias: crate_alias(service),
            tag_package: tag_package(service),
            client_type: client_type(service),
            tag_function: tag_function(service).to_string(),
            untag_function: untag_function(service).to_string(),
            batch_size,
            identifier_field: tag_input_identifier_field(service).to_string(),
            identifier_is_sequence: tag_input_identifier_requires_slice(service),
            resource_type_field: tag_input_resource_type_field(service).map(str::to_string),
            tags_field: tag_input_tags_field(service).to_string(),
            untag_tags_field: untag_input_tags_field(service).to_string(),
            tag_value,
            untag_value: UntagValue::resolve(service),
        }
    }

    /// Whether one request both adds and removes tags.
    pub fn uses_single_endpoint(&self) -> bool {
        self.tag_function == self.untag_function
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_service_names() {
        let names = sorted_service_names();
        assert_eq!(names.len(), SERVICE_NAMES.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        // The embedded list itself is not fully sorted.
        let greengrass = names.iter().position(|n| *n == "greengrass").unwrap();
        let guardduty = names.iter().position(|n| *n == "guardduty").unwrap();
        assert!(greengrass < guardduty);
    }

    #[test]
    fn test_resolve_unknown_service_uses_defaults() {
        let meta = ServiceMetadata::resolve("newservice");
        assert_eq!(meta.tag_package, "aws_sdk_newservice");
        assert_eq!(meta.client_type, "newservice::Client");
        assert_eq!(meta.tag_function, "TagResource");
        assert_eq!(meta.untag_function, "UntagResource");
        assert_eq!(meta.batch_size, None);
        assert_eq!(meta.identifier_field, "ResourceArn");
        assert!(!meta.identifier_is_sequence);
        assert_eq!(meta.resource_type_field, None);
        assert_eq!(meta.tags_field, "Tags");
        assert_eq!(meta.untag_tags_field, "TagKeys");
        assert_eq!(meta.tag_value, TagValue::Default);
        assert_eq!(meta.untag_value, UntagValue::KeySequence);
        assert!(!meta.uses_single_endpoint());
    }

    #[test]
    fn test_resolve_keyword_service_escapes_alias() {
        let meta = ServiceMetadata::resolve("type");
        assert_eq!(meta.name, "type");
        assert_eq!(meta.alias, "r#type");
        assert_eq!(meta.tag_package, "aws_sdk_type");
        assert_eq!(meta.client_type, "r#type::Client");
    }

    #[test]
    fn test_resolve_kinesis() {
        let meta = ServiceMetadata::resolve("kinesis");
        assert_eq!(meta.batch_size, Some(10));
        assert_eq!(meta.identifier_field, "StreamName");
        assert_eq!(
            meta.tag_value,
            TagValue::CustomExpression("updated_tags.ignore_aws().map()".to_string())
        );
    }

    #[test]
    fn test_resolve_route53_single_endpoint() {
        let meta = ServiceMetadata::resolve("route53");
        assert!(meta.uses_single_endpoint());
        assert_eq!(meta.resource_type_field.as_deref(), Some("ResourceType"));
        assert_eq!(meta.tags_field, "AddTags");
        assert_eq!(meta.untag_tags_field, "RemoveTagKeys");
    }

    #[test]
    fn test_untag_value_precedence() {
        assert_eq!(UntagValue::resolve("ec2"), UntagValue::FullTagObjects);
        assert_eq!(UntagValue::resolve("elb"), UntagValue::TagKeyObjects);
        assert!(matches!(
            UntagValue::resolve("cloudfront"),
            UntagValue::CustomExpression(_)
        ));
        assert_eq!(UntagValue::resolve("rds"), UntagValue::KeySequence);
    }

    #[test]
    fn test_untag_value_from_flags_priority_order() {
        let expr = Some("removed_tags.keys()");
        assert_eq!(
            UntagValue::from_flags(true, true, expr),
            UntagValue::FullTagObjects
        );
        assert_eq!(
            UntagValue::from_flags(false, true, expr),
            UntagValue::TagKeyObjects
        );
        assert_eq!(
            UntagValue::from_flags(false, false, expr),
            UntagValue::CustomExpression("removed_tags.keys()".to_string())
        );
        assert_eq!(
            UntagValue::from_flags(true, false, None),
            UntagValue::FullTagObjects
        );
        assert_eq!(
            UntagValue::from_flags(false, false, None),
            UntagValue::KeySequence
        );
    }

    #[test]
    fn test_every_service_has_at_most_one_untag_override() {
        for service in SERVICE_NAMES {
            let active = [
                untag_input_requires_tag_type(service),
                untag_input_requires_tag_key_type(service),
                untag_input_custom_value(service).is_some(),
            ]
            .iter()
            .filter(|on| **on)
            .count();
            assert!(active <= 1, "{service} has {active} untag overrides");
        }
    }

    #[test]
    fn test_metadata_serializes_tagged_values() {
        let value = serde_json::to_value(ServiceMetadata::resolve("cloudfront")).unwrap();
        assert_eq!(value["untag_value"]["kind"], "custom_expression");
        assert_eq!(value["tag_value"]["kind"], "custom_expression");

        let value = serde_json::to_value(ServiceMetadata::resolve("rds")).unwrap();
        assert_eq!(value["untag_value"]["kind"], "key_sequence");
        assert_eq!(value["tag_value"]["kind"], "default");
        assert!(value["resource_type_field"].is_null());
    }
}
