//! In-memory registry for tests.
//!
//! This module provides [`MemoryRegistry`], a [`RegistryClient`] backed by
//! process-local state. It mirrors the remote registry's observable
//! semantics so the content helpers can be exercised without a server:
//! unknown spec names are not found, artifact creation requires an existing
//! parent, creating a taken name reports already-exists, and replacing a
//! missing artifact is not found.
//!
//! # Feature Flag
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! apiry-registry = { version = "...", features = ["test-utils"] }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::client::{RegistryClient, SpecContents};
use crate::mime::MimeType;
use crate::name::{ArtifactName, SpecName};
use crate::{Error, Result, TRACING_TARGET_MEMORY};

/// In-memory registry double.
///
/// Clones share the same underlying state, so a test can hand a clone to the
/// code under test and keep one for seeding and assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    specs: HashMap<String, SpecContents>,
    artifacts: HashMap<String, Bytes>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a spec, replacing any previous contents.
    pub async fn put_spec(
        &self,
        name: &SpecName,
        mime_type: impl Into<MimeType>,
        contents: impl Into<Bytes>,
    ) {
        let spec = SpecContents::new(contents, mime_type);
        tracing::debug!(
            target: TRACING_TARGET_MEMORY,
            name = %name,
            mime_type = %spec.mime_type,
            size = spec.contents.len(),
            "Seeding spec"
        );

        let mut state = self.state.write().await;
        state.specs.insert(name.as_str().to_owned(), spec);
    }

    /// Seeds a spec, consuming and returning self for chained setup.
    pub async fn with_spec(
        self,
        name: &SpecName,
        mime_type: impl Into<MimeType>,
        contents: impl Into<Bytes>,
    ) -> Self {
        self.put_spec(name, mime_type, contents).await;
        self
    }

    /// Number of artifacts currently stored.
    pub async fn artifact_count(&self) -> usize {
        self.state.read().await.artifacts.len()
    }
}

#[async_trait]
impl RegistryClient for MemoryRegistry {
    async fn get_spec_contents(&self, name: &SpecName) -> Result<SpecContents> {
        let state = self.state.read().await;
        state
            .specs
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| Error::not_found(name.as_str()))
    }

    async fn create_artifact(
        &self,
        parent: &str,
        artifact_id: &str,
        contents: Bytes,
    ) -> Result<()> {
        let name = ArtifactName::new(parent, artifact_id)?.to_string();

        let mut state = self.state.write().await;
        if !state.specs.contains_key(parent) {
            return Err(Error::not_found(parent));
        }
        if state.artifacts.contains_key(&name) {
            return Err(Error::already_exists(name));
        }

        tracing::debug!(
            target: TRACING_TARGET_MEMORY,
            name = %name,
            size = contents.len(),
            "Created artifact"
        );
        state.artifacts.insert(name, contents);
        Ok(())
    }

    async fn replace_artifact(&self, name: &ArtifactName, contents: Bytes) -> Result<()> {
        let key = name.to_string();

        let mut state = self.state.write().await;
        let slot = state
            .artifacts
            .get_mut(&key)
            .ok_or_else(|| Error::not_found(&key))?;

        tracing::debug!(
            target: TRACING_TARGET_MEMORY,
            name = %key,
            size = contents.len(),
            "Replaced artifact"
        );
        *slot = contents;
        Ok(())
    }

    async fn get_artifact_contents(&self, name: &ArtifactName) -> Result<Bytes> {
        let key = name.to_string();
        let state = self.state.read().await;
        state
            .artifacts
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::not_found(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_name() -> SpecName {
        SpecName::new("projects/p/apis/a/versions/v/specs/s").unwrap()
    }

    #[tokio::test]
    async fn test_spec_read_after_seed() {
        let name = spec_name();
        let registry = MemoryRegistry::new()
            .with_spec(&name, "text/plain", "hello")
            .await;

        let spec = registry.get_spec_contents(&name).await.unwrap();
        assert_eq!(spec.contents.as_ref(), b"hello");
        assert_eq!(spec.mime_type.as_str(), "text/plain");
    }

    #[tokio::test]
    async fn test_spec_unknown_name() {
        let registry = MemoryRegistry::new();
        let err = registry.get_spec_contents(&spec_name()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_requires_parent() {
        let registry = MemoryRegistry::new();
        let err = registry
            .create_artifact(spec_name().as_str(), "lint", Bytes::from_static(b"{}"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_twice_reports_already_exists() {
        let name = spec_name();
        let registry = MemoryRegistry::new()
            .with_spec(&name, "text/plain", "hello")
            .await;

        registry
            .create_artifact(name.as_str(), "lint", Bytes::from_static(b"a"))
            .await
            .unwrap();
        let err = registry
            .create_artifact(name.as_str(), "lint", Bytes::from_static(b"b"))
            .await
            .unwrap_err();
        assert!(err.is_already_exists());

        // The losing create must not have clobbered the stored bytes.
        let artifact = name.artifact("lint").unwrap();
        let contents = registry.get_artifact_contents(&artifact).await.unwrap();
        assert_eq!(contents.as_ref(), b"a");
    }

    #[tokio::test]
    async fn test_replace_missing_artifact() {
        let name = spec_name();
        let registry = MemoryRegistry::new()
            .with_spec(&name, "text/plain", "hello")
            .await;

        let artifact = name.artifact("lint").unwrap();
        let err = registry
            .replace_artifact(&artifact, Bytes::from_static(b"b"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let name = spec_name();
        let registry = MemoryRegistry::new();
        let handle = registry.clone();

        registry.put_spec(&name, "text/plain", "hello").await;
        assert!(handle.get_spec_contents(&name).await.is_ok());
    }
}
