//! Resolving a weight accessor to a concrete byte range within the binary buffer.

use crate::document::{DocumentTables, SHAPE_VEC4};
use crate::encoding::NumericEncoding;
use crate::error::SkipReason;
use core::iter::StepBy;
use core::ops::Range;
use tracing::warn;

/// Where the weight vectors of one accessor live in the binary buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    /// Index of the accessor this layout was resolved from.
    pub accessor: usize,
    /// Absolute offset of the first vector in the buffer.
    pub byte_offset: usize,
    /// Number of bytes from `byte_offset` to the end of the buffer view.
    pub byte_length: usize,
    /// Distance between the starts of consecutive vectors.
    pub byte_stride: usize,
    /// How the components are stored.
    pub encoding: NumericEncoding,
}

impl LayoutDescriptor {
    /// One past the last byte covered by this layout.
    pub fn end(&self) -> usize {
        self.byte_offset.saturating_add(self.byte_length)
    }

    /// Start offsets of every vector slot in the range.
    ///
    /// The last slot may start close enough to [`end`](Self::end) that the vector itself
    /// runs past it; callers bounds check each vector against the buffer.
    /// A stride of 0 walks tightly packed vectors.
    pub fn vector_offsets(&self) -> StepBy<Range<usize>> {
        let stride = match self.byte_stride {
            0 => self.encoding.default_stride(),
            stride => stride,
        };
        (self.byte_offset..self.end()).step_by(stride)
    }
}

/// Resolves accessor `accessor` of `tables` to a [`LayoutDescriptor`].
///
/// `buffer_len` is the length of the binary data actually present, which may be shorter
/// than what the document declares.
///
/// The accessor's range runs from its start to the end of its buffer view; the accessor's
/// `count` is not consulted. A buffer view with a `byteStride` of 0 is treated as tightly
/// packed, with a warning.
///
/// # Errors
///
/// Returns the [`SkipReason`] for the first structural check that fails.
pub fn resolve_layout(
    tables: &DocumentTables,
    accessor: usize,
    buffer_len: usize,
) -> Result<LayoutDescriptor, SkipReason> {
    let acc = tables
        .accessors
        .get(accessor)
        .ok_or(SkipReason::MissingAccessor(accessor))?;

    if acc.kind != SHAPE_VEC4 {
        return Err(SkipReason::UnsupportedShape {
            accessor,
            kind: acc.kind.clone(),
        });
    }

    let view_index = acc.buffer_view.ok_or(SkipReason::MissingBufferView {
        accessor,
        buffer_view: None,
    })?;
    let view = tables
        .buffer_views
        .get(view_index)
        .ok_or(SkipReason::MissingBufferView {
            accessor,
            buffer_view: Some(view_index),
        })?;

    let accessor_offset = acc.byte_offset.unwrap_or(0);
    let byte_offset = view.byte_offset.unwrap_or(0).saturating_add(accessor_offset);
    let byte_length = view
        .byte_length
        .checked_sub(accessor_offset)
        .ok_or(SkipReason::OffsetPastView {
            accessor,
            buffer_view: view_index,
            accessor_offset,
            view_length: view.byte_length,
        })?;

    if view.buffer != 0 {
        return Err(SkipReason::MultipleBuffers {
            accessor,
            buffer: view.buffer,
        });
    }

    let buffer = tables
        .buffers
        .get(view.buffer)
        .ok_or(SkipReason::MissingBuffer {
            accessor,
            buffer: view.buffer,
        })?;

    let end = byte_offset.saturating_add(byte_length);
    if end > buffer.byte_length {
        return Err(SkipReason::BufferTooShort {
            accessor,
            buffer: view.buffer,
            start: byte_offset,
            end,
            declared: buffer.byte_length,
        });
    }
    if end > buffer_len {
        return Err(SkipReason::BinaryDataTooShort {
            accessor,
            start: byte_offset,
            end,
            available: buffer_len,
        });
    }

    let encoding = NumericEncoding::from_component_type(acc.component_type).ok_or(
        SkipReason::UnsupportedComponentType {
            accessor,
            component_type: acc.component_type,
        },
    )?;

    let byte_stride = match view.byte_stride {
        None => encoding.default_stride(),
        Some(0) => {
            warn!(
                "bufferView {view_index} declares a byteStride of 0, treating accessor {accessor} as tightly packed ({} bytes)",
                encoding.default_stride()
            );
            encoding.default_stride()
        }
        Some(stride) if stride < encoding.vector_span() => {
            return Err(SkipReason::StrideTooSmall {
                buffer_view: view_index,
                stride,
                encoding,
                span: encoding.vector_span(),
            });
        }
        Some(stride) => stride,
    };

    Ok(LayoutDescriptor {
        accessor,
        byte_offset,
        byte_length,
        byte_stride,
        encoding,
    })
}
