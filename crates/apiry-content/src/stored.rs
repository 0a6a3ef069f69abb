//! Stored-content classification for transparent decompression.
//!
//! A resource whose declared MIME type ends with the `+gzip` suffix stores
//! its bytes gzip-compressed; the logical content type is the prefix before
//! the suffix. No other compression scheme is recognized. The suffix is
//! inspected exactly once, here, and the read path branches on the resulting
//! [`StoredContent`] tag.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use apiry_registry::MimeType;

use crate::Result;
use crate::compress;

/// MIME suffix marking a resource whose bytes are stored gzip-compressed.
pub const GZIP_MIME_SUFFIX: &str = "+gzip";

/// Compression algorithms recognized by the stored-content convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// RFC 1952 gzip framing
    Gzip,
}

/// Stored bytes of a resource, classified once at the MIME-type boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredContent {
    /// Bytes stored exactly as the logical payload.
    Plain(Bytes),
    /// Bytes stored under the given compression; the logical payload is
    /// recovered by decompressing.
    Compressed(Bytes, Compression),
}

impl StoredContent {
    /// Classifies stored bytes by their declared MIME type.
    pub fn classify(mime_type: &MimeType, contents: Bytes) -> Self {
        if mime_type.as_str().ends_with(GZIP_MIME_SUFFIX) {
            Self::Compressed(contents, Compression::Gzip)
        } else {
            Self::Plain(contents)
        }
    }

    /// Compression applied to the stored bytes, if any.
    pub fn compression(&self) -> Option<Compression> {
        match self {
            Self::Plain(_) => None,
            Self::Compressed(_, algorithm) => Some(*algorithm),
        }
    }

    /// Recovers the logical payload.
    ///
    /// Plain content is returned unchanged; compressed content is
    /// decompressed in full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) when the stored bytes
    /// are not a valid stream for the tagged algorithm. A malformed stream is
    /// never degraded to the raw stored bytes.
    pub fn into_logical(self) -> Result<Bytes> {
        match self {
            Self::Plain(contents) => Ok(contents),
            Self::Compressed(contents, Compression::Gzip) => compress::gunzip(&contents),
        }
    }
}

/// Logical content type: the declared type with any compression suffix removed.
pub fn logical_mime_type(mime_type: &MimeType) -> MimeType {
    match mime_type.as_str().strip_suffix(GZIP_MIME_SUFFIX) {
        Some(prefix) => MimeType::from(prefix),
        None => mime_type.clone(),
    }
}
