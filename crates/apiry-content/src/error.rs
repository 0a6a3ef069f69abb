//! Error types and utilities for content operations.

use crate::stored::Compression;

/// Result type for all content operations in this crate.
///
/// This is a convenience type alias that defaults to using [`Error`] as the error type.
/// Most functions in this crate return this type for consistent error handling.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for content operations.
///
/// Registry errors pass through unchanged; the only codec-specific failures
/// added at this layer are the compression variants. There is no partial
/// success: an operation either fully succeeds or yields one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Registry or collaborator failure, surfaced verbatim
    #[error(transparent)]
    Registry(#[from] apiry_registry::Error),

    /// Stored bytes could not be decompressed despite a compression-indicating type
    #[error("Failed to decompress {algorithm} content: {source}")]
    Decode {
        algorithm: Compression,
        source: std::io::Error,
    },

    /// A payload could not be compressed for storage
    #[error("Failed to compress {algorithm} content: {source}")]
    Encode {
        algorithm: Compression,
        source: std::io::Error,
    },
}

impl Error {
    /// Create a decompression error
    pub fn decode(algorithm: Compression, source: std::io::Error) -> Self {
        Self::Decode { algorithm, source }
    }

    /// Create a compression error
    pub fn encode(algorithm: Compression, source: std::io::Error) -> Self {
        Self::Encode { algorithm, source }
    }

    /// Whether this error means the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Registry(e) if e.is_not_found())
    }

    /// Whether this error is a decompression failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_errors_pass_through() {
        let err = Error::from(apiry_registry::Error::not_found("projects/p"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Resource 'projects/p' not found");
    }

    #[test]
    fn test_decode_display() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt deflate stream");
        let err = Error::decode(Compression::Gzip, io);
        assert!(err.is_decode());
        assert_eq!(
            err.to_string(),
            "Failed to decompress gzip content: corrupt deflate stream"
        );
    }
}
