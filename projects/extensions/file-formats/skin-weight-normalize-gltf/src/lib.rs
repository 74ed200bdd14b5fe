#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

/// Loading and saving documents.
pub mod document;
/// Error types.
pub mod error;
pub(crate) mod file_io;
/// GLB container detection.
pub mod glb;

#[cfg(test)]
pub mod test_prelude;

pub use document::GltfDocument;
pub use error::{FileIoError, GltfError, LightweightMmapError};
pub use glb::{likely_glb, GLB_HEADER_SIZE, GLB_MAGIC};
