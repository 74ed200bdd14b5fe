//! GLB container detection.

/// Magic at the start of every GLB file, `glTF` in ASCII.
pub const GLB_MAGIC: [u8; 4] = *b"glTF";
/// Size of the GLB file header: magic, version and total length.
pub const GLB_HEADER_SIZE: usize = 12;

/// Determines if the given data likely is a binary glTF (GLB) container.
/// This is done by checking the magic at offset 0 and the minimum size.
/// Anything else is treated as a JSON `.gltf` document.
#[inline(always)]
pub fn likely_glb(data: &[u8]) -> bool {
    data.len() >= GLB_HEADER_SIZE && data[..4] == GLB_MAGIC
}
