use tagsync_codegen::CodegenError;
use tagsync_tags::TagsError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Tags(#[from] TagsError),

    #[error("invalid JSON for {argument}: {source}")]
    InvalidJson {
        argument: &'static str,
        source: serde_json::Error,
    },

    #[error("error serializing output: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Generation failures keep their category code; everything else is 1.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::Codegen(err) => err.exit_code(),
            Self::Tags(_) | Self::InvalidJson { .. } | Self::Serialize(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let write = CliError::from(CodegenError::Write {
            path: "update_tags_gen.rs".into(),
            source: std::io::Error::other("denied"),
        });
        assert_eq!(write.exit_code(), 5);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let invalid = CliError::InvalidJson {
            argument: "--old",
            source: json,
        };
        assert_eq!(invalid.exit_code(), 1);
        assert!(invalid.to_string().starts_with("invalid JSON for --old:"));

        let tags = CliError::from(TagsError::InvalidChunkSize { size: 0 });
        assert_eq!(tags.exit_code(), 1);
    }
}
