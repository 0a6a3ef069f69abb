//! Content access helpers over a registry client.

use bytes::Bytes;

use apiry_registry::{
    ArtifactDescriptor, ArtifactName, MimeType, RegistryClient, SpecDescriptor,
};

use crate::stored::{StoredContent, logical_mime_type};
use crate::{Result, TRACING_TARGET_ARTIFACT, TRACING_TARGET_CONTENT};

/// Content access helpers for a remote registry.
///
/// The store is stateless: it holds only the client handle and keeps no
/// locks, caches, or background tasks. Concurrent callers are independent;
/// create-or-update races on the same artifact name resolve to last writer
/// wins under the registry's own consistency model.
#[derive(Debug, Clone)]
pub struct ContentStore<C> {
    client: C,
}

impl<C> ContentStore<C> {
    /// Creates a store over the given registry client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: RegistryClient> ContentStore<C> {
    /// Returns the logical contents of the named spec.
    ///
    /// One registry read fetches the stored bytes and the declared MIME
    /// type. A MIME type already present on the descriptor takes precedence
    /// over the declared one. Content stored under a `+gzip` type is
    /// decompressed; a malformed compressed stream is a hard error, never
    /// degraded to the raw stored bytes.
    pub async fn spec_contents(&self, spec: &SpecDescriptor) -> Result<Bytes> {
        let (contents, _) = self.read_logical(spec).await?;
        Ok(contents)
    }

    /// Reads the named spec and fills the descriptor in place.
    ///
    /// On success `contents` holds the logical payload and `mime_type` the
    /// logical content type (compression suffix stripped). The descriptor is
    /// left untouched on error.
    pub async fn fetch_spec_contents(&self, spec: &mut SpecDescriptor) -> Result<()> {
        let (contents, mime_type) = self.read_logical(spec).await?;
        spec.mime_type = Some(logical_mime_type(&mime_type));
        spec.contents = Some(contents);
        Ok(())
    }

    async fn read_logical(&self, spec: &SpecDescriptor) -> Result<(Bytes, MimeType)> {
        tracing::debug!(
            target: TRACING_TARGET_CONTENT,
            name = %spec.name,
            "Fetching spec contents"
        );

        let fetched = self.client.get_spec_contents(&spec.name).await?;
        let mime_type = spec
            .mime_type
            .clone()
            .unwrap_or(fetched.mime_type);

        let stored = StoredContent::classify(&mime_type, fetched.contents);
        let compression = stored.compression();
        let contents = stored.into_logical().map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CONTENT,
                name = %spec.name,
                mime_type = %mime_type,
                error = %e,
                "Failed to decode spec contents"
            );
            e
        })?;

        tracing::debug!(
            target: TRACING_TARGET_CONTENT,
            name = %spec.name,
            mime_type = %mime_type,
            compression = ?compression,
            size = contents.len(),
            "Fetched spec contents"
        );
        Ok((contents, mime_type))
    }

    /// Makes the stored contents of the named artifact equal to the supplied
    /// bytes.
    ///
    /// The artifact is created when absent; a create that fails because the
    /// name is already taken routes to a full-content replace instead. Any
    /// other create failure, and any replace failure, is surfaced unchanged.
    /// Empty contents are allowed. The net effect is idempotent with respect
    /// to the final stored content.
    pub async fn set_artifact(&self, artifact: &ArtifactDescriptor) -> Result<()> {
        tracing::debug!(
            target: TRACING_TARGET_ARTIFACT,
            name = %artifact.name,
            size = artifact.contents.len(),
            "Upserting artifact"
        );

        let created = self
            .client
            .create_artifact(
                artifact.name.parent(),
                artifact.name.artifact_id(),
                artifact.contents.clone(),
            )
            .await;

        match created {
            Ok(()) => {
                tracing::info!(
                    target: TRACING_TARGET_ARTIFACT,
                    name = %artifact.name,
                    size = artifact.contents.len(),
                    "Artifact created"
                );
                Ok(())
            }
            Err(e) if e.is_already_exists() => {
                self.client
                    .replace_artifact(&artifact.name, artifact.contents.clone())
                    .await?;
                tracing::info!(
                    target: TRACING_TARGET_ARTIFACT,
                    name = %artifact.name,
                    size = artifact.contents.len(),
                    "Artifact replaced"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_ARTIFACT,
                    name = %artifact.name,
                    error = %e,
                    "Failed to create artifact"
                );
                Err(e.into())
            }
        }
    }

    /// Returns the current contents of the named artifact.
    pub async fn artifact_contents(&self, name: &ArtifactName) -> Result<Bytes> {
        let contents = self.client.get_artifact_contents(name).await?;
        tracing::debug!(
            target: TRACING_TARGET_ARTIFACT,
            name = %name,
            size = contents.len(),
            "Fetched artifact contents"
        );
        Ok(contents)
    }

    /// Reads the named artifact and fills the descriptor's contents in place.
    ///
    /// The descriptor is left untouched on error.
    pub async fn fetch_artifact_contents(&self, artifact: &mut ArtifactDescriptor) -> Result<()> {
        artifact.contents = self.artifact_contents(&artifact.name).await?;
        Ok(())
    }
}
