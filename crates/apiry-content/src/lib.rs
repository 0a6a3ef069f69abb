#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for spec content reads.
///
/// Use this target for logging content retrieval and decompression outcomes.
pub const TRACING_TARGET_CONTENT: &str = "apiry_content::content";

/// Tracing target for artifact write and read operations.
///
/// Use this target for logging artifact upserts and read-backs.
pub const TRACING_TARGET_ARTIFACT: &str = "apiry_content::artifact";

pub mod compress;
mod error;
pub mod prelude;
mod store;
mod stored;

pub use error::{Error, Result};
pub use store::ContentStore;
pub use stored::{Compression, GZIP_MIME_SUFFIX, StoredContent, logical_mime_type};
