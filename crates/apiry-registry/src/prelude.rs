//! Prelude module for apiry-registry.
//!
//! This module re-exports the most commonly used types and traits from
//! apiry-registry, making it easy to import everything you need with a
//! single `use` statement.
//!
//! # Example
//!
//! ```rust,ignore
//! use apiry_registry::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let spec = SpecName::new("projects/p/apis/a/versions/v/specs/s")?;
//! let artifact = spec.artifact("lint")?;
//! # Ok(())
//! # }
//! ```

// Client boundary
pub use crate::client::{RegistryClient, SpecContents};
// Descriptors
pub use crate::descriptor::{ArtifactDescriptor, SpecDescriptor};
// In-memory registry (test-utils)
#[cfg(feature = "test-utils")]
pub use crate::memory::MemoryRegistry;
// Names and declared types
pub use crate::mime::MimeType;
pub use crate::name::{ArtifactName, SpecName};
// Error types
pub use crate::{Error, Result};
