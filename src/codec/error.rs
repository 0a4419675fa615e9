use std::path::PathBuf;
use thiserror::Error;

use super::format::OutputFormat;

/// Errors raised by the compression service and the preview generator
#[derive(Debug, Error)]
pub enum CodecError {
    /// The source could not be opened, read or decoded
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The encoder rejected the image (unsupported pixel mode, size limits, ...)
    #[error("Failed to encode {format}: {source}")]
    Encode {
        format: OutputFormat,
        #[source]
        source: image::ImageError,
    },

    /// The encoded bytes could not be written to the destination
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The two failure families the user sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source unreadable, corrupt or unsupported
    Decode,
    /// Target format, path or write failure
    Encode,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Decode { .. } => ErrorKind::Decode,
            CodecError::Encode { .. } | CodecError::Write { .. } => ErrorKind::Encode,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
