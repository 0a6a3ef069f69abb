#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the in-memory registry.
///
/// Use this target for logging seed operations and state mutations performed
/// by [`memory::MemoryRegistry`].
pub const TRACING_TARGET_MEMORY: &str = "apiry_registry::memory";

mod client;
mod descriptor;
mod error;
#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod memory;
mod mime;
mod name;
pub mod prelude;

pub use client::{RegistryClient, SpecContents};
pub use descriptor::{ArtifactDescriptor, SpecDescriptor};
pub use error::{Error, Result};
pub use mime::MimeType;
pub use name::{ArtifactName, SpecName};
