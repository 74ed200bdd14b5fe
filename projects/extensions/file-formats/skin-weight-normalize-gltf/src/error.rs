//! Error types for loading and saving glTF documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a glTF document.
#[derive(Debug, Error)]
pub enum GltfError {
    /// Reading or writing a file failed.
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),

    /// The file is empty.
    #[error("{} is empty", .0.display())]
    EmptyFile(PathBuf),

    /// The GLB container could not be parsed or written.
    #[error("Invalid GLB container: {0}")]
    Glb(#[from] gltf::Error),

    /// The JSON document could not be parsed.
    #[error("Invalid glTF JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `.gltf` document's first buffer has no `uri`.
    #[error("buffer 0 has no uri; only GLB files can embed their buffer")]
    MissingBufferUri,

    /// A `.gltf` document's first buffer is not a relative file path.
    #[error("buffer uri {0:?} is not supported, only relative paths to .bin files are")]
    UnsupportedBufferUri(String),
}

/// Low-level errors from the lightweight-mmap backend.
#[derive(Debug, Error)]
pub enum LightweightMmapError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

/// File I/O errors, by backend.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error from the lightweight-mmap backend
    #[error("lightweight-mmap error: {0}")]
    LightweightMmap(#[from] LightweightMmapError),

    /// Error from std I/O operations
    #[error("I/O error: {0}")]
    Std(#[from] std::io::Error),
}

impl From<lightweight_mmap::handles::HandleOpenError> for GltfError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::LightweightMmap(LightweightMmapError::FileHandle(e)))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for GltfError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::LightweightMmap(LightweightMmapError::MemoryMapping(e)))
    }
}

impl From<std::io::Error> for GltfError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(FileIoError::Std(e))
    }
}
