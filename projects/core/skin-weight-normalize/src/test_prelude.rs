//! Common test imports and utilities for weight normalization tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Re-export super for convenience in test modules
pub use super::*;

use endian_writer::{EndianWriter, LittleEndianWriter};
use std::sync::{Arc, Mutex};

/// Packs float weight vectors back to back, little-endian.
pub(crate) fn float_weights(vectors: &[[f32; 4]]) -> Vec<u8> {
    let mut data = vec![0u8; vectors.len() * 16];
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    for (index, vector) in vectors.iter().enumerate() {
        for (lane, value) in vector.iter().enumerate() {
            unsafe { writer.write_u32_at(value.to_bits(), (index * 16 + lane * 4) as isize) };
        }
    }
    data
}

/// Packs unsigned short weight vectors back to back, little-endian.
pub(crate) fn u16_weights(vectors: &[[u16; 4]]) -> Vec<u8> {
    let mut data = vec![0u8; vectors.len() * 8];
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    for (index, vector) in vectors.iter().enumerate() {
        for (lane, &value) in vector.iter().enumerate() {
            unsafe { writer.write_u16_at(value, (index * 8 + lane * 2) as isize) };
        }
    }
    data
}

/// Reads back tightly packed float weight vectors.
pub(crate) fn read_float_weights(data: &[u8]) -> Vec<[f32; 4]> {
    (0..data.len() / 16)
        .map(|index| {
            let vector = NumericEncoding::Float32
                .decode(data, index * 16)
                .unwrap_or_default();
            vector.map(|value| value as f32)
        })
        .collect()
}

/// A document with one mesh whose only primitive has `WEIGHTS_0` pointing at accessor 0,
/// which spans the whole of a `byte_length` long buffer through buffer view 0.
pub(crate) fn weights_document(component_type: u32, byte_length: usize) -> DocumentTables {
    DocumentTables {
        meshes: vec![Mesh {
            primitives: vec![Primitive {
                attributes: [(DEFAULT_WEIGHT_ATTRIBUTE.to_string(), 0)]
                    .into_iter()
                    .collect(),
            }],
        }],
        accessors: vec![Accessor {
            buffer_view: Some(0),
            byte_offset: None,
            component_type,
            kind: SHAPE_VEC4.to_string(),
        }],
        buffer_views: vec![BufferView {
            buffer: 0,
            byte_offset: None,
            byte_length,
            byte_stride: None,
        }],
        buffers: vec![Buffer { byte_length }],
    }
}

/// Deterministic weight vectors with components in `0..=max`.
///
/// Every seventh vector is all zeros and roughly a third of the other components are zero.
/// Components are whole numbers when `max` is greater than one.
pub(crate) fn pseudo_random_vectors(count: usize, max: f64) -> Vec<WeightVector> {
    let mut state = 0x2545_F491_4F6C_DD1D_u64;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|index| {
            if index % 7 == 0 {
                return [0.0; 4];
            }
            [(); 4].map(|_| {
                let roll = next();
                if roll % 3 == 0 {
                    return 0.0;
                }
                let unit = (roll >> 11) as f64 / (1u64 << 53) as f64;
                if max > 1.0 {
                    (unit * max).round()
                } else {
                    unit * max
                }
            })
        })
        .collect()
}

/// Formatted log output kept in memory.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber on the current thread that records warnings and errors.
/// Returns `f`'s result and one line per recorded event.
pub(crate) fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8_lossy(&log.0.lock().unwrap()).into_owned();
    (result, output.lines().map(str::to_owned).collect())
}
