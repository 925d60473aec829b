//! Tagging and untagging operation names, and batch limits.

/// The service operation that adds or overwrites tags.
pub fn tag_function(service: &str) -> &'static str {
    match service {
        "acm" => "AddTagsToCertificate",
        "acmpca" => "TagCertificateAuthority",
        "cloudtrail" => "AddTags",
        "cloudwatchlogs" => "TagLogGroup",
        "databasemigrationservice" => "AddTagsToResource",
        "datapipeline" => "AddTags",
        "directoryservice" => "AddTagsToResource",
        "docdb" => "AddTagsToResource",
        "ec2" => "CreateTags",
        "elasticache" => "AddTagsToResource",
        "elasticbeanstalk" => "UpdateTagsForResource",
        "elasticsearchservice" => "AddTags",
        "elb" => "AddTags",
        "elbv2" => "AddTags",
        "emr" => "AddTags",
        "firehose" => "TagDeliveryStream",
        "glacier" => "AddTagsToVault",
        "kinesis" => "AddTagsToStream",
        "kinesisvideo" => "TagStream",
        "medialive" => "CreateTags",
        "mq" => "CreateTags",
        "neptune" => "AddTagsToResource",
        "rds" => "AddTagsToResource",
        "redshift" => "CreateTags",
        "resourcegroups" => "Tag",
        "route53" => "ChangeTagsForResource",
        "sagemaker" => "AddTags",
        "sqs" => "TagQueue",
        "ssm" => "AddTagsToResource",
        "storagegateway" => "AddTagsToResource",
        _ => "TagResource",
    }
}

/// The service operation that removes tags.
///
/// When this equals [`tag_function`] the service takes additions and removals
/// in a single request.
pub fn untag_function(service: &str) -> &'static str {
    match service {
        "acm" => "RemoveTagsFromCertificate",
        "acmpca" => "UntagCertificateAuthority",
        "cloudtrail" => "RemoveTags",
        "cloudwatchlogs" => "UntagLogGroup",
        "databasemigrationservice" => "RemoveTagsFromResource",
        "datapipeline" => "RemoveTags",
        "directoryservice" => "RemoveTagsFromResource",
        "docdb" => "RemoveTagsFromResource",
        "ec2" => "DeleteTags",
        "elasticache" => "RemoveTagsFromResource",
        "elasticbeanstalk" => "UpdateTagsForResource",
        "elasticsearchservice" => "RemoveTags",
        "elb" => "RemoveTags",
        "elbv2" => "RemoveTags",
        "emr" => "RemoveTags",
        "firehose" => "UntagDeliveryStream",
        "glacier" => "RemoveTagsFromVault",
        "kinesis" => "RemoveTagsFromStream",
        "kinesisvideo" => "UntagStream",
        "medialive" => "DeleteTags",
        "mq" => "DeleteTags",
        "neptune" => "RemoveTagsFromResource",
        "rds" => "RemoveTagsFromResource",
        "redshift" => "DeleteTags",
        "resourcegroups" => "Untag",
        "route53" => "ChangeTagsForResource",
        "sagemaker" => "DeleteTags",
        "sqs" => "UntagQueue",
        "ssm" => "RemoveTagsFromResource",
        "storagegateway" => "RemoveTagsFromResource",
        _ => "UntagResource",
    }
}

/// Maximum tags per tagging or untagging call; 0 means unbounded.
pub fn tag_function_batch_size(service: &str) -> usize {
    match service {
        "kinesis" => 10,
        _ => 0,
    }
}
