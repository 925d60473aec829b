//! Request field names, in AWS API model spelling.

/// Field carrying the resource identifier.
pub fn tag_input_identifier_field(service: &str) -> &'static str {
    match service {
        "acm" => "CertificateArn",
        "acmpca" => "CertificateAuthorityArn",
        "athena" => "ResourceARN",
        "cloud9" => "ResourceARN",
        "cloudfront" => "Resource",
        "cloudhsmv2" => "ResourceId",
        "cloudtrail" => "ResourceId",
        "cloudwatch" => "ResourceARN",
        "cloudwatchevents" => "ResourceARN",
        "cloudwatchlogs" => "LogGroupName",
        "codestarnotifications" => "Arn",
        "datapipeline" => "PipelineId",
        "dax" => "ResourceName",
        "devicefarm" => "ResourceARN",
        "directoryservice" => "ResourceId",
        "docdb" => "ResourceName",
        "ec2" => "Resources",
        "efs" => "ResourceId",
        "elasticache" => "ResourceName",
        "elasticsearchservice" => "ARN",
        "elb" => "LoadBalancerNames",
        "elbv2" => "ResourceArns",
        "emr" => "ResourceId",
        "firehose" => "DeliveryStreamName",
        "fsx" => "ResourceARN",
        "gamelift" => "ResourceARN",
        "glacier" => "VaultName",
        "kinesis" => "StreamName",
        "kinesisanalytics" => "ResourceARN",
        "kinesisanalyticsv2" => "ResourceARN",
        "kinesisvideo" => "StreamARN",
        "kms" => "KeyId",
        "lambda" => "Resource",
        "lightsail" => "ResourceName",
        "mediaconvert" => "Arn",
        "mediastore" => "Resource",
        "neptune" => "ResourceName",
        "organizations" => "ResourceId",
        "ram" => "ResourceShareArn",
        "rds" => "ResourceName",
        "redshift" => "ResourceName",
        "resourcegroups" => "Arn",
        "route53" => "ResourceId",
        "secretsmanager" => "SecretId",
        "sqs" => "QueueUrl",
        "ssm" => "ResourceId",
        "storagegateway" => "ResourceARN",
        "transfer" => "Arn",
        "waf" => "ResourceARN",
        "wafregional" => "ResourceARN",
        "wafv2" => "ResourceARN",
        _ => "ResourceArn",
    }
}

/// Whether the identifier field is a list that takes the identifier as its
/// only element.
pub fn tag_input_identifier_requires_slice(service: &str) -> bool {
    matches!(service, "ec2" | "elb" | "elbv2")
}

/// Field carrying the tags to add.
pub fn tag_input_tags_field(service: &str) -> &'static str {
    match service {
        "cloudhsmv2" => "TagList",
        "cloudtrail" => "TagsList",
        "elasticbeanstalk" => "TagsToAdd",
        "elasticsearchservice" => "TagList",
        "glue" => "TagsToAdd",
        "pinpoint" => "TagsModel",
        "route53" => "AddTags",
        _ => "Tags",
    }
}

/// Field naming the resource type, for services whose identifier alone is
/// ambiguous.
pub fn tag_input_resource_type_field(service: &str) -> Option<&'static str> {
    match service {
        "route53" | "ssm" => Some("ResourceType"),
        _ => None,
    }
}

/// Field carrying the tags (or tag keys) to remove.
pub fn untag_input_tags_field(service: &str) -> &'static str {
    match service {
        "acm" => "Tags",
        "acmpca" => "Tags",
        "backup" => "TagKeyList",
        "cloudhsmv2" => "TagKeyList",
        "cloudtrail" => "TagsList",
        "cloudwatchlogs" => "Tags",
        "datasync" => "Keys",
        "ec2" => "Tags",
        "elasticbeanstalk" => "TagsToRemove",
        "elb" => "Tags",
        "glue" => "TagsToRemove",
        "kinesisvideo" => "TagKeyList",
        "resourcegroups" => "Keys",
        "route53" => "RemoveTagKeys",
        _ => "TagKeys",
    }
}
