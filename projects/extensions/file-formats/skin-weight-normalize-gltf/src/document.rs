//! Loading and saving glTF documents for weight normalization.

use crate::error::GltfError;
use crate::file_io::{with_file_contents, write_file};
use crate::glb::{likely_glb, GLB_MAGIC};
use gltf::binary::{Glb, Header};
use serde::Deserialize;
use skin_weight_normalize::{DocumentTables, WeightContainer};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A glTF document held in memory: its tables, the raw JSON, and the first binary buffer.
///
/// The JSON is kept byte-for-byte as loaded and written back as is. Only the binary
/// buffer is meant to change between [`load`](Self::load) and [`save`](Self::save).
#[derive(Debug)]
pub struct GltfDocument {
    tables: DocumentTables,
    json: Vec<u8>,
    binary: Vec<u8>,
    container: Container,
}

#[derive(Debug)]
enum Container {
    Glb { header: Header, had_bin: bool },
    Gltf { buffer_uri: Option<String> },
}

/// Just enough of the JSON to find where a `.gltf` keeps its first buffer.
#[derive(Deserialize, Default)]
#[serde(default)]
struct BufferUris {
    buffers: Vec<BufferUri>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct BufferUri {
    uri: Option<String>,
}

impl GltfDocument {
    /// Loads a `.glb` or `.gltf` file, telling them apart by the GLB magic.
    ///
    /// For `.gltf` files the first buffer is read from its `uri`, relative to the file.
    ///
    /// # Errors
    ///
    /// Returns [`GltfError`] if a file cannot be read, the container or JSON is malformed,
    /// or a `.gltf` buffer is not a relative file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GltfError> {
        let path = path.as_ref();
        with_file_contents(path, |bytes| {
            if likely_glb(bytes) {
                Self::from_glb_slice(bytes)
            } else {
                Self::from_gltf_slice(bytes, path.parent().unwrap_or(Path::new("")))
            }
        })
    }

    /// Parses an in-memory GLB container.
    pub fn from_glb_slice(bytes: &[u8]) -> Result<Self, GltfError> {
        let Glb { header, json, bin } = Glb::from_slice(bytes)?;
        let tables = serde_json::from_slice(&json)?;
        let had_bin = bin.is_some();
        let binary = bin.map(Cow::into_owned).unwrap_or_default();
        debug!(
            "loaded GLB with {} bytes of JSON and {} bytes of binary data",
            json.len(),
            binary.len()
        );

        Ok(Self {
            tables,
            json: json.into_owned(),
            binary,
            container: Container::Glb { header, had_bin },
        })
    }

    /// Parses an in-memory `.gltf` JSON document, reading its buffer from `base_dir`.
    pub fn from_gltf_slice(json: &[u8], base_dir: &Path) -> Result<Self, GltfError> {
        let tables = serde_json::from_slice(json)?;
        let uris: BufferUris = serde_json::from_slice(json)?;

        let (binary, buffer_uri) = match uris.buffers.into_iter().next() {
            None => (Vec::new(), None),
            Some(BufferUri { uri: None }) => return Err(GltfError::MissingBufferUri),
            Some(BufferUri { uri: Some(uri) }) => {
                if !is_relative_path_uri(&uri) {
                    return Err(GltfError::UnsupportedBufferUri(uri));
                }
                let binary = with_file_contents(&base_dir.join(&uri), |bytes| Ok(bytes.to_vec()))?;
                debug!("loaded {} bytes of binary data from {uri}", binary.len());
                (binary, Some(uri))
            }
        };

        Ok(Self {
            tables,
            json: json.to_vec(),
            binary,
            container: Container::Gltf { buffer_uri },
        })
    }

    /// Writes the document to `path`, in the container format it was loaded from.
    ///
    /// A `.gltf` document's buffer is written next to `path`, under its original `uri`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GltfError> {
        let path = path.as_ref();
        match &self.container {
            Container::Glb { .. } => write_file(path, &self.to_glb_vec()?),
            Container::Gltf { buffer_uri } => {
                write_file(path, &self.json)?;
                if let Some(uri) = buffer_uri {
                    let bin_path = path.parent().unwrap_or(Path::new("")).join(uri);
                    write_file(&bin_path, &self.binary)?;
                }
                Ok(())
            }
        }
    }

    /// Serializes the document as a GLB container.
    ///
    /// A document loaded from `.gltf` gets its buffer embedded as the binary chunk, with the
    /// first buffer's `uri` removed from the JSON so it refers to that chunk.
    pub fn to_glb_vec(&self) -> Result<Vec<u8>, GltfError> {
        let glb = match &self.container {
            Container::Glb { header, had_bin } => Glb {
                header: header.clone(),
                json: Cow::Borrowed(self.json.as_slice()),
                bin: (*had_bin || !self.binary.is_empty())
                    .then_some(Cow::Borrowed(self.binary.as_slice())),
            },
            Container::Gltf { buffer_uri } => Glb {
                header: Header {
                    magic: GLB_MAGIC,
                    version: 2,
                    length: 0,
                },
                json: Cow::Owned(embedded_buffer_json(&self.json)?),
                bin: buffer_uri
                    .is_some()
                    .then_some(Cow::Borrowed(self.binary.as_slice())),
            },
        };

        let mut out = Vec::new();
        glb.to_writer(&mut out)?;
        Ok(out)
    }

    /// Whether the document was loaded from a GLB container.
    pub fn is_glb(&self) -> bool {
        matches!(self.container, Container::Glb { .. })
    }

    /// The `uri` a `.gltf` document's buffer was loaded from.
    pub fn buffer_uri(&self) -> Option<&str> {
        match &self.container {
            Container::Gltf { buffer_uri } => buffer_uri.as_deref(),
            Container::Glb { .. } => None,
        }
    }

    /// Path the buffer of a `.gltf` document would be written to, when saving to `path`.
    pub fn buffer_path_for(&self, path: &Path) -> Option<PathBuf> {
        self.buffer_uri()
            .map(|uri| path.parent().unwrap_or(Path::new("")).join(uri))
    }

    /// The parsed document tables.
    pub fn tables(&self) -> &DocumentTables {
        &self.tables
    }

    /// The first binary buffer.
    pub fn binary_buffer(&self) -> &[u8] {
        &self.binary
    }

    /// The first binary buffer, for in-place edits.
    pub fn binary_buffer_mut(&mut self) -> &mut [u8] {
        &mut self.binary
    }
}

impl WeightContainer for GltfDocument {
    fn tables_and_buffer_mut(&mut self) -> (&DocumentTables, &mut [u8]) {
        (&self.tables, &mut self.binary)
    }
}

/// Drops the first buffer's `uri`, so the buffer refers to the GLB binary chunk.
fn embedded_buffer_json(json: &[u8]) -> Result<Vec<u8>, GltfError> {
    let mut root: serde_json::Value = serde_json::from_slice(json)?;
    if let Some(buffer) = root
        .pointer_mut("/buffers/0")
        .and_then(serde_json::Value::as_object_mut)
    {
        buffer.remove("uri");
    }
    Ok(serde_json::to_vec(&root)?)
}

/// Whether `uri` is a relative reference to a file, rather than embedded or remote data.
fn is_relative_path_uri(uri: &str) -> bool {
    !uri.is_empty()
        && !uri.starts_with('/')
        && !uri.starts_with('\\')
        && !uri
            .split_once(':')
            .is_some_and(|(scheme, _)| !scheme.contains(['/', '\\']))
}
