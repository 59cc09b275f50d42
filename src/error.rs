use std::path::PathBuf;

/// Errors raised by the conversion pipeline.
///
/// Every stage aborts the conversion on the first error; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The file could not be opened or read.
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not an image we can decode.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The caller passed something the pipeline cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConvertError {
    /// Short kind label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Io { .. } => "io",
            ConvertError::Decode { .. } => "decode",
            ConvertError::InvalidArgument(_) => "invalid-argument",
        }
    }
}
