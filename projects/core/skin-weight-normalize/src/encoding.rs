//! Numeric encodings of weight components, and reading/writing weight vectors in them.
//!
//! A weight vector is always four components wide. Components are stored little-endian,
//! packed back to back, and are decoded into [`f64`] in the encoding's native domain:
//! `0.0..=1.0` for floats, `0..=255` for bytes and `0..=65535` for shorts.

use core::fmt;
use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};

/// Number of components in a weight vector.
pub const COMPONENTS: usize = 4;

/// glTF `componentType` code for 32-bit floats.
pub const COMPONENT_TYPE_FLOAT: u32 = 5126;
/// glTF `componentType` code for unsigned bytes.
pub const COMPONENT_TYPE_UNSIGNED_BYTE: u32 = 5121;
/// glTF `componentType` code for unsigned shorts.
pub const COMPONENT_TYPE_UNSIGNED_SHORT: u32 = 5123;

/// A decoded weight vector, in the native domain of its encoding.
pub type WeightVector = [f64; COMPONENTS];

/// The numeric type a weight accessor stores its components as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericEncoding {
    /// Little-endian IEEE 754 `f32`, full scale `1.0`.
    Float32,
    /// `u8`, full scale `255`.
    UInt8,
    /// Little-endian `u16`, full scale `65535`.
    UInt16,
}

impl NumericEncoding {
    /// Maps a glTF `componentType` code to an encoding.
    /// Returns [`None`] for component types that cannot hold skin weights.
    pub const fn from_component_type(component_type: u32) -> Option<Self> {
        match component_type {
            COMPONENT_TYPE_FLOAT => Some(Self::Float32),
            COMPONENT_TYPE_UNSIGNED_BYTE => Some(Self::UInt8),
            COMPONENT_TYPE_UNSIGNED_SHORT => Some(Self::UInt16),
            _ => None,
        }
    }

    /// The glTF `componentType` code of this encoding.
    pub const fn component_type(self) -> u32 {
        match self {
            Self::Float32 => COMPONENT_TYPE_FLOAT,
            Self::UInt8 => COMPONENT_TYPE_UNSIGNED_BYTE,
            Self::UInt16 => COMPONENT_TYPE_UNSIGNED_SHORT,
        }
    }

    /// Size of a single component, in bytes.
    pub const fn component_width(self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::UInt8 => 1,
            Self::UInt16 => 2,
        }
    }

    /// Size of a whole weight vector, in bytes.
    pub const fn vector_span(self) -> usize {
        self.component_width() * COMPONENTS
    }

    /// Stride used when a buffer view declares none, i.e. tightly packed vectors.
    pub const fn default_stride(self) -> usize {
        self.vector_span()
    }

    /// The value a correctly normalized weight vector sums to.
    pub const fn full_scale(self) -> f64 {
        match self {
            Self::Float32 => 1.0,
            Self::UInt8 => u8::MAX as f64,
            Self::UInt16 => u16::MAX as f64,
        }
    }

    /// Whether components are stored as integers, and must be rounded before storing.
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Float32)
    }

    /// Reads the weight vector starting at `offset`.
    ///
    /// Returns [`None`] if the vector does not fit inside `buffer`.
    pub fn decode(self, buffer: &[u8], offset: usize) -> Option<WeightVector> {
        let window = buffer.get(offset..offset.checked_add(self.vector_span())?)?;
        let mut vector = [0.0; COMPONENTS];

        // SAFETY: `window` is exactly `vector_span` bytes long, which covers every lane read below.
        let mut reader = unsafe { LittleEndianReader::new(window.as_ptr()) };
        for (lane, value) in vector.iter_mut().enumerate() {
            let at = (lane * self.component_width()) as isize;
            *value = match self {
                Self::Float32 => f64::from(f32::from_bits(unsafe { reader.read_u32_at(at) })),
                Self::UInt16 => f64::from(unsafe { reader.read_u16_at(at) }),
                Self::UInt8 => f64::from(window[lane]),
            };
        }

        Some(vector)
    }

    /// Writes `vector` at `offset`, converting each component to the stored type.
    ///
    /// Floats are narrowed to `f32`. Integer components are expected to be rounded
    /// already; anything outside the representable range saturates, and NaN stores as 0.
    ///
    /// Returns [`None`] (and leaves `buffer` untouched) if the vector does not fit.
    pub fn encode(self, buffer: &mut [u8], offset: usize, vector: &WeightVector) -> Option<()> {
        let window = buffer.get_mut(offset..offset.checked_add(self.vector_span())?)?;

        if let Self::UInt8 = self {
            for (byte, &value) in window.iter_mut().zip(vector) {
                *byte = value as u8;
            }
            return Some(());
        }

        // SAFETY: `window` is exactly `vector_span` bytes long, which covers every lane written below.
        let mut writer = unsafe { LittleEndianWriter::new(window.as_mut_ptr()) };
        for (lane, &value) in vector.iter().enumerate() {
            let at = (lane * self.component_width()) as isize;
            if let Self::Float32 = self {
                unsafe { writer.write_u32_at((value as f32).to_bits(), at) };
            } else {
                unsafe { writer.write_u16_at(value as u16, at) };
            }
        }

        Some(())
    }
}

impl fmt::Display for NumericEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Float32 => "float",
            Self::UInt8 => "unsigned byte",
            Self::UInt16 => "unsigned short",
        })
    }
}
