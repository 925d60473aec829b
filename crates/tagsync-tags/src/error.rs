//! Error types for tag set operations and generated update-tags functions.

/// Boxed error returned by a service client call.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid input to a tag set operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagsError {
    #[error("invalid chunk size {size}: must be greater than zero")]
    InvalidChunkSize { size: usize },
}

/// Failure of a generated `<service>_update_tags` function.
///
/// API failures always carry the resource identifier that was being tagged so
/// callers can report which resource failed without threading it through.
#[derive(Debug, thiserror::Error)]
pub enum UpdateTagsError {
    #[error("error tagging resource ({identifier}): {source}")]
    Tagging {
        identifier: String,
        #[source]
        source: BoxError,
    },

    #[error("error untagging resource ({identifier}): {source}")]
    Untagging {
        identifier: String,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Tags(#[from] TagsError),
}

impl UpdateTagsError {
    /// Wrap a failed tagging call for `identifier`.
    pub fn tagging<E>(identifier: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Tagging {
            identifier: identifier.to_string(),
            source: source.into(),
        }
    }

    /// Wrap a failed untagging call for `identifier`.
    pub fn untagging<E>(identifier: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Untagging {
            identifier: identifier.to_string(),
            source: source.into(),
        }
    }

    /// The resource identifier the failed call targeted, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Tagging { identifier, .. } | Self::Untagging { identifier, .. } => {
                Some(identifier)
            }
            Self::Tags(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, thiserror::Error)]
    #[error("throttled")]
    struct Throttled;

    #[test]
    fn test_tagging_error_names_identifier() {
        let err = UpdateTagsError::tagging("arn:aws:rds:db:1", Throttled);
        assert_eq!(
            err.to_string(),
            "error tagging resource (arn:aws:rds:db:1): throttled"
        );
        assert_eq!(err.identifier(), Some("arn:aws:rds:db:1"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_untagging_error_names_identifier() {
        let err = UpdateTagsError::untagging("queue-url", "access denied");
        assert_eq!(
            err.to_string(),
            "error untagging resource (queue-url): access denied"
        );
    }

    #[test]
    fn test_chunk_error_converts() {
        let err: UpdateTagsError = TagsError::InvalidChunkSize { size: 0 }.into();
        assert!(err.identifier().is_none());
        assert!(err.to_string().contains("invalid chunk size 0"));
    }
}
