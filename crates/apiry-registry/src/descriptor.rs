//! Caller-facing descriptors for registry resources.
//!
//! Descriptors are ephemeral: constructed per call, populated by read
//! operations or supplied to write operations, and discarded after use. The
//! registry service is the sole system of record.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::mime::MimeType;
use crate::name::{ArtifactName, SpecName};

/// Identifies a primary resource for content retrieval.
///
/// `mime_type` may be supplied when known in advance; read operations fall
/// back to the type declared by the registry otherwise. After a successful
/// populate-in-place read, `contents` holds the logical (uncompressed)
/// payload, never the wire-stored bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct SpecDescriptor {
    /// Full hierarchical name of the spec.
    pub name: SpecName,
    /// Declared MIME type, when known in advance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<MimeType>,
    /// Logical content, populated by read operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Bytes>,
}

impl SpecDescriptor {
    /// Creates a minimal descriptor addressing a spec by name.
    pub fn new(name: SpecName) -> Self {
        Self {
            name,
            mime_type: None,
            contents: None,
        }
    }

    /// Sets the known-in-advance MIME type, consuming and returning self.
    pub fn with_mime_type(mut self, mime_type: impl Into<MimeType>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Sets the contents, consuming and returning self.
    pub fn with_contents(mut self, contents: impl Into<Bytes>) -> Self {
        self.contents = Some(contents.into());
        self
    }
}

/// Identifies a named attachment and the bytes stored for it.
///
/// No MIME-based compression convention applies to artifacts: contents are
/// stored and returned byte-for-byte. Empty contents are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct ArtifactDescriptor {
    /// Full hierarchical name of the artifact.
    pub name: ArtifactName,
    /// Artifact contents, exact bytes.
    #[serde(default)]
    pub contents: Bytes,
}

impl ArtifactDescriptor {
    /// Creates a descriptor for the named artifact with the given contents.
    pub fn new(name: ArtifactName, contents: impl Into<Bytes>) -> Self {
        Self {
            name,
            contents: contents.into(),
        }
    }

    /// Creates a descriptor addressing an artifact by name only.
    ///
    /// Used for read-back; `contents` starts empty and is filled in place.
    pub fn named(name: ArtifactName) -> Self {
        Self {
            name,
            contents: Bytes::new(),
        }
    }
}
