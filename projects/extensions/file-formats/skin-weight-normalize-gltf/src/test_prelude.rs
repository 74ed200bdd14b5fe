//! Common test imports and utilities for glTF tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;
pub use serde_json::{json, Value};

// Core functionality from the format-agnostic crate
pub use skin_weight_normalize::{
    normalize_container, NormalizeSettings, RunStats, COMPONENT_TYPE_FLOAT,
    COMPONENT_TYPE_UNSIGNED_BYTE, COMPONENT_TYPE_UNSIGNED_SHORT, DEFAULT_WEIGHT_ATTRIBUTE,
};

// Re-export super for convenience in test modules
pub use super::*;

use gltf::binary::{Glb, Header};
use std::borrow::Cow;

/// A minimal glTF JSON document: one mesh primitive whose `WEIGHTS_0` accessor spans
/// the whole of a single `byte_length` long buffer. `uri` is set on the buffer when given.
pub(crate) fn weights_json(component_type: u32, byte_length: usize, uri: Option<&str>) -> Value {
    let mut buffer = json!({ "byteLength": byte_length });
    if let Some(uri) = uri {
        buffer["uri"] = json!(uri);
    }

    json!({
        "asset": { "version": "2.0", "generator": "skin-weight-normalize tests" },
        "meshes": [{ "primitives": [{ "attributes": { "WEIGHTS_0": 0 } }] }],
        "accessors": [{
            "bufferView": 0,
            "componentType": component_type,
            "count": 1,
            "type": "VEC4"
        }],
        "bufferViews": [{ "buffer": 0, "byteLength": byte_length }],
        "buffers": [buffer],
        "extensions": { "VENDOR_kept": { "note": "survives saving" } }
    })
}

/// Packs `json` and `bin` into a GLB container.
pub(crate) fn glb_bytes(json: &Value, bin: &[u8]) -> Vec<u8> {
    let json = serde_json::to_vec(json).unwrap();
    let glb = Glb {
        header: Header {
            magic: GLB_MAGIC,
            version: 2,
            length: 0,
        },
        json: Cow::Owned(json),
        bin: Some(Cow::Borrowed(bin)),
    };

    let mut out = Vec::new();
    glb.to_writer(&mut out).unwrap();
    out
}
