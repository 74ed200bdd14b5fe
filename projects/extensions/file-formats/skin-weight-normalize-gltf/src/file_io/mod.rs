//! Memory mapped file access.

use crate::error::GltfError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Maps `path` read-only and hands its contents to `parse`.
///
/// The mapping is released before this returns, so `parse` must copy out anything it keeps.
pub(crate) fn with_file_contents<T>(
    path: &Path,
    parse: impl FnOnce(&[u8]) -> Result<T, GltfError>,
) -> Result<T, GltfError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Err(GltfError::EmptyFile(path.to_path_buf()));
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    parse(mapping.as_slice())
}

/// Creates (or replaces) `path` with exactly `data`.
pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<(), GltfError> {
    // Start from an empty file, so no stale tail survives a shorter rewrite.
    std::fs::File::create(path)?;
    // Zero length mappings are not allowed.
    if data.is_empty() {
        return Ok(());
    }

    let handle = ReadWriteFileHandle::create_preallocated(path, data.len() as i64)?;
    let mut mapping = ReadWriteMmap::new(&handle, 0, data.len())?;
    mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}
