//! Error types for weight normalization.

use crate::encoding::NumericEncoding;
use thiserror::Error;

/// Why a weight accessor was skipped instead of normalized.
///
/// None of these stop a run: the accessor is reported and the run moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The attribute points at an accessor index the document does not have.
    #[error("accessor {0} does not exist; corrupt file?")]
    MissingAccessor(usize),

    /// The accessor is not a four component vector.
    #[error("accessor {accessor} has type {kind:?}, only VEC4 weights are supported")]
    UnsupportedShape {
        /// Index of the skipped accessor.
        accessor: usize,
        /// The accessor's declared type.
        kind: String,
    },

    /// The accessor has no buffer view, or points at one that does not exist.
    #[error("accessor {accessor} has no usable bufferView ({buffer_view:?}); sparse or corrupt accessor?")]
    MissingBufferView {
        /// Index of the skipped accessor.
        accessor: usize,
        /// The buffer view index the accessor declared, if any.
        buffer_view: Option<usize>,
    },

    /// The accessor starts past the end of its buffer view.
    #[error("accessor {accessor} starts {accessor_offset} bytes into bufferView {buffer_view}, which is only {view_length} bytes long; corrupt file?")]
    OffsetPastView {
        /// Index of the skipped accessor.
        accessor: usize,
        /// Index of the buffer view.
        buffer_view: usize,
        /// The accessor's byte offset within the view.
        accessor_offset: usize,
        /// The view's byte length.
        view_length: usize,
    },

    /// The accessor's data lives in a buffer other than the first one.
    #[error("accessor {accessor} lives in buffer {buffer}; only files with a single binary buffer are supported")]
    MultipleBuffers {
        /// Index of the skipped accessor.
        accessor: usize,
        /// The buffer index its view references.
        buffer: usize,
    },

    /// The document declares no buffer at the referenced index.
    #[error("accessor {accessor} references buffer {buffer}, which does not exist; corrupt file?")]
    MissingBuffer {
        /// Index of the skipped accessor.
        accessor: usize,
        /// The buffer index its view references.
        buffer: usize,
    },

    /// The accessor's byte range ends past the declared length of its buffer.
    #[error("accessor {accessor} covers bytes {start}..{end}, but buffer {buffer} declares only {declared} bytes; corrupt file?")]
    BufferTooShort {
        /// Index of the skipped accessor.
        accessor: usize,
        /// The buffer index.
        buffer: usize,
        /// First byte of the accessor's range.
        start: usize,
        /// One past the last byte of the accessor's range.
        end: usize,
        /// The buffer's declared byte length.
        declared: usize,
    },

    /// The accessor's byte range ends past the binary data actually present.
    #[error("accessor {accessor} covers bytes {start}..{end}, but only {available} bytes of binary data are present; truncated file?")]
    BinaryDataTooShort {
        /// Index of the skipped accessor.
        accessor: usize,
        /// First byte of the accessor's range.
        start: usize,
        /// One past the last byte of the accessor's range.
        end: usize,
        /// Length of the binary data.
        available: usize,
    },

    /// The accessor's component type cannot hold skin weights.
    #[error("accessor {accessor} has componentType {component_type}, expected 5126 (float), 5121 (unsigned byte) or 5123 (unsigned short)")]
    UnsupportedComponentType {
        /// Index of the skipped accessor.
        accessor: usize,
        /// The declared component type code.
        component_type: u32,
    },

    /// The buffer view's stride is smaller than a single weight vector.
    #[error("bufferView {buffer_view} has a byteStride of {stride}, smaller than one {encoding} VEC4 ({span} bytes); corrupt file?")]
    StrideTooSmall {
        /// Index of the buffer view.
        buffer_view: usize,
        /// The declared stride.
        stride: usize,
        /// Encoding of the accessor.
        encoding: NumericEncoding,
        /// Size of one weight vector in that encoding.
        span: usize,
    },
}

/// Errors raised while building [`NormalizeSettings`](crate::NormalizeSettings).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SettingsError {
    /// A zero replacement component lies outside `0.0..=1.0`.
    #[error("zero replacement component {lane} is {value}, expected a value between 0 and 1")]
    ZeroReplacementOutOfRange {
        /// Index of the offending component.
        lane: usize,
        /// The rejected value.
        value: f32,
    },

    /// The zero replacement does not sum to `1.0` within the float epsilon.
    #[error("zero replacement components sum to {sum}, expected them to sum to 1")]
    ZeroReplacementSum {
        /// Sum of the four components.
        sum: f64,
    },

    /// An epsilon is negative or not finite.
    #[error("the {encoding} epsilon must be a finite, non-negative number, got {value}")]
    InvalidEpsilon {
        /// The encoding the epsilon applies to.
        encoding: NumericEncoding,
        /// The rejected value.
        value: f64,
    },
}
