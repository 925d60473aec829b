//! Dry-run of a generated update-tags function.
//!
//! [`plan_update`] follows the same control flow the template emits for a
//! service and returns the requests it would send, without touching any
//! provider API. Payloads are filtered of `aws:` keys exactly as the
//! generated code filters them.

use serde::Serialize;
use tagsync_tags::{KeyValueTags, TagsError};

use crate::registry::ServiceMetadata;

/// One request the generated function would issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum PlannedCall {
    /// Single request carrying both additions and removals.
    Combined {
        operation: String,
        tags: KeyValueTags,
        untag_keys: Vec<String>,
    },
    Untag {
        operation: String,
        tags: KeyValueTags,
    },
    Tag {
        operation: String,
        tags: KeyValueTags,
    },
}

impl PlannedCall {
    pub fn operation(&self) -> &str {
        match self {
            Self::Combined { operation, .. }
            | Self::Untag { operation, .. }
            | Self::Tag { operation, .. } => operation,
        }
    }

    /// Tag set sent with this call.
    pub fn tags(&self) -> &KeyValueTags {
        match self {
            Self::Combined { tags, .. } | Self::Untag { tags, .. } | Self::Tag { tags, .. } => {
                tags
            }
        }
    }
}

/// Plan the requests that move a resource from `old` to `new` tags.
pub fn plan_update(
    service: &ServiceMetadata,
    old: &KeyValueTags,
    new: &KeyValueTags,
) -> Result<Vec<PlannedCall>, TagsError> {
    let removed = old.removed(new);
    let updated = old.updated(new);

    if service.uses_single_endpoint() {
        if removed.is_empty() && updated.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![PlannedCall::Combined {
            operation: service.tag_function.clone(),
            tags: updated.ignore_aws(),
            untag_keys: removed.ignore_aws().keys(),
        }]);
    }

    let mut calls = Vec::new();

    if !removed.is_empty() {
        for chunk in batches(&removed, service.batch_size)? {
            calls.push(PlannedCall::Untag {
                operation: service.untag_function.clone(),
                tags: chunk.ignore_aws(),
            });
        }
    }

    if !updated.is_empty() {
        for chunk in batches(&updated, service.batch_size)? {
            calls.push(PlannedCall::Tag {
                operation: service.tag_function.clone(),
                tags: chunk.ignore_aws(),
            });
        }
    }

    tracing::debug!(
        service = %service.name,
        removed = removed.len(),
        updated = updated.len(),
        calls = calls.len(),
        "Planned update"
    );

    Ok(calls)
}

fn batches(tags: &KeyValueTags, batch_size: Option<usize>) -> Result<Vec<KeyValueTags>, TagsError> {
    match batch_size {
        Some(size) => tags.chunks(size),
        None => Ok(vec![tags.clone()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> KeyValueTags {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_combined_call() {
        let route53 = ServiceMetadata::resolve("route53");
        let old = tags(&[("a", "1"), ("b", "2")]);
        let new = tags(&[("b", "2"), ("c", "3")]);

        let calls = plan_update(&route53, &old, &new).unwrap();
        assert_eq!(
            calls,
            vec![PlannedCall::Combined {
                operation: "ChangeTagsForResource".to_string(),
                tags: tags(&[("c", "3")]),
                untag_keys: vec!["a".to_string()],
            }]
        );
    }

    #[test]
    fn test_combined_call_skipped_without_changes() {
        let beanstalk = ServiceMetadata::resolve("elasticbeanstalk");
        let same = tags(&[("a", "1")]);
        assert!(plan_update(&beanstalk, &same, &same).unwrap().is_empty());
    }

    #[test]
    fn test_untag_only() {
        let rds = ServiceMetadata::resolve("rds");
        let calls = plan_update(&rds, &tags(&[("a", "1")]), &KeyValueTags::default()).unwrap();

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation(), "RemoveTagsFromResource");
        assert_eq!(calls[0].tags().keys(), vec!["a"]);
    }

    #[test]
    fn test_untag_precedes_tag() {
        let sqs = ServiceMetadata::resolve("sqs");
        let calls = plan_update(&sqs, &tags(&[("a", "1")]), &tags(&[("a", "2"), ("b", "3")]))
            .unwrap();

        // a changed value is an update, not a removal
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation(), "TagQueue");

        let calls = plan_update(&sqs, &tags(&[("x", "1")]), &tags(&[("y", "1")])).unwrap();
        let operations: Vec<_> = calls.iter().map(PlannedCall::operation).collect();
        assert_eq!(operations, vec!["UntagQueue", "TagQueue"]);
    }

    #[test]
    fn test_batched_service_chunks_in_key_order() {
        let kinesis = ServiceMetadata::resolve("kinesis");
        let new: KeyValueTags = (0..25).map(|i| (format!("k{i:02}"), "v")).collect();

        let calls = plan_update(&kinesis, &KeyValueTags::default(), &new).unwrap();
        let sizes: Vec<_> = calls.iter().map(|call| call.tags().len()).collect();
        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(calls[0].tags().keys().first().map(String::as_str), Some("k00"));
        assert_eq!(calls[2].tags().keys().last().map(String::as_str), Some("k24"));
        assert!(calls.iter().all(|call| call.operation() == "AddTagsToStream"));
    }

    #[test]
    fn test_no_change_plans_nothing() {
        let ec2 = ServiceMetadata::resolve("ec2");
        let same = tags(&[("Name", "web")]);
        assert!(plan_update(&ec2, &same, &same).unwrap().is_empty());
    }

    #[test]
    fn test_aws_keys_filtered_from_payload() {
        let ec2 = ServiceMetadata::resolve("ec2");
        let new = tags(&[("aws:cloudformation:stack-name", "s"), ("Name", "web")]);

        let calls = plan_update(&ec2, &KeyValueTags::default(), &new).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tags(), &tags(&[("Name", "web")]));
    }

    #[test]
    fn test_planned_call_serializes_with_call_tag() {
        let call = PlannedCall::Tag {
            operation: "TagResource".to_string(),
            tags: tags(&[("a", "1")]),
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"call": "tag", "operation": "TagResource", "tags": {"a": "1"}})
        );
    }
}
