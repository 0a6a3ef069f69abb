//! The abstract remote registry consumed by the content layer.

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;
use crate::mime::MimeType;
use crate::name::{ArtifactName, SpecName};

/// Stored bytes and declared type returned by a single spec read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecContents {
    /// Raw stored bytes, exactly as the registry holds them.
    pub contents: Bytes,
    /// The resource's declared MIME type.
    pub mime_type: MimeType,
}

impl SpecContents {
    /// Creates a spec read result.
    pub fn new(contents: impl Into<Bytes>, mime_type: impl Into<MimeType>) -> Self {
        Self {
            contents: contents.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Client operations the content layer requires of a registry service.
///
/// Implementations own transport, authentication, connection pooling, and
/// deadlines. Calls block the invoking task for the remote round trip and
/// inherit whatever cancellation the caller attaches; no retries happen at
/// this boundary.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Reads a spec's stored bytes together with its declared MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when the name does
    /// not resolve; transport and authorization failures pass through
    /// unchanged.
    async fn get_spec_contents(&self, name: &SpecName) -> Result<SpecContents>;

    /// Creates an artifact with the given id under `parent`.
    ///
    /// # Errors
    ///
    /// Must fail with [`Error::AlreadyExists`](crate::Error::AlreadyExists)
    /// when the name is taken, distinguishable from every other failure.
    async fn create_artifact(
        &self,
        parent: &str,
        artifact_id: &str,
        contents: Bytes,
    ) -> Result<()>;

    /// Replaces the full contents of an existing artifact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when the artifact
    /// does not exist.
    async fn replace_artifact(&self, name: &ArtifactName, contents: Bytes) -> Result<()>;

    /// Reads the current contents of an existing artifact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when the artifact
    /// does not exist.
    async fn get_artifact_contents(&self, name: &ArtifactName) -> Result<Bytes>;
}
