//! The subset of a glTF document that weight normalization reads.
//!
//! Only the tables needed to go from a mesh attribute to raw bytes are modelled:
//! meshes (for attribute lookup), accessors, buffer views and buffers. Everything else
//! in the document is left to the container format and written back untouched.
//!
//! With the `serde` feature enabled, these types deserialize straight from glTF JSON,
//! with unknown fields ignored and missing optional fields defaulted.

use std::collections::HashMap;

/// The accessor `type` of a four component vector.
pub const SHAPE_VEC4: &str = "VEC4";

/// The document tables consulted while normalizing weights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DocumentTables {
    /// All meshes in the document.
    pub meshes: Vec<Mesh>,
    /// All accessors in the document.
    pub accessors: Vec<Accessor>,
    /// All buffer views in the document.
    pub buffer_views: Vec<BufferView>,
    /// All buffers in the document.
    pub buffers: Vec<Buffer>,
}

/// A mesh, made of one or more primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Mesh {
    /// The primitives of this mesh.
    pub primitives: Vec<Primitive>,
}

/// A drawable part of a mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Primitive {
    /// Maps attribute names such as `WEIGHTS_0` to accessor indices.
    pub attributes: HashMap<String, usize>,
}

/// A typed view into a buffer view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Accessor {
    /// Index of the buffer view holding the data.
    pub buffer_view: Option<usize>,
    /// Offset relative to the start of the buffer view.
    pub byte_offset: Option<usize>,
    /// glTF component type code, e.g. `5126` for `f32`.
    pub component_type: u32,
    /// Element shape, e.g. `VEC4`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

/// A contiguous slice of a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct BufferView {
    /// Index of the buffer this view slices.
    pub buffer: usize,
    /// Offset into the buffer.
    pub byte_offset: Option<usize>,
    /// Length of the view.
    pub byte_length: usize,
    /// Distance between consecutive elements, when interleaved.
    pub byte_stride: Option<usize>,
}

/// A binary buffer, as declared by the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Buffer {
    /// Declared length of the buffer.
    pub byte_length: usize,
}
