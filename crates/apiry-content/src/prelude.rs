//! Prelude module for apiry-content.
//!
//! This module re-exports the most commonly used types from apiry-content
//! together with the registry types they operate on, making it easy to
//! import everything you need with a single `use` statement.
//!
//! # Example
//!
//! ```rust,ignore
//! use apiry_content::prelude::*;
//!
//! # async fn example(client: impl RegistryClient) -> Result<()> {
//! let name = SpecName::new("projects/p/apis/a/versions/v/specs/s")?;
//! let store = ContentStore::new(client);
//! let contents = store.spec_contents(&SpecDescriptor::new(name)).await?;
//! # Ok(())
//! # }
//! ```

// Registry types the helpers operate on
pub use apiry_registry::{
    ArtifactDescriptor, ArtifactName, MimeType, RegistryClient, SpecContents, SpecDescriptor,
    SpecName,
};

// Content store and classification
pub use crate::store::ContentStore;
pub use crate::stored::{Compression, GZIP_MIME_SUFFIX, StoredContent, logical_mime_type};
// Gzip primitives
pub use crate::compress;
// Error types
pub use crate::{Error, Result};
