#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod document;
pub mod encoding;
pub mod error;
pub mod layout;
pub mod locate;
pub mod normalize;
pub mod ratio;
pub mod reweight;
pub mod settings;
pub mod stats;

#[cfg(test)]
pub mod test_prelude;

pub use document::{Accessor, Buffer, BufferView, DocumentTables, Mesh, Primitive, SHAPE_VEC4};
pub use encoding::{
    NumericEncoding, WeightVector, COMPONENTS, COMPONENT_TYPE_FLOAT, COMPONENT_TYPE_UNSIGNED_BYTE,
    COMPONENT_TYPE_UNSIGNED_SHORT,
};
pub use error::{SettingsError, SkipReason};
pub use layout::{resolve_layout, LayoutDescriptor};
pub use locate::{locate_attributes, AttributeLocations, DEFAULT_WEIGHT_ATTRIBUTE};
pub use normalize::{normalize_accessor, normalize_container, normalize_weights, WeightContainer};
pub use ratio::ratio_with_deadzone;
pub use reweight::reweight;
pub use settings::{
    NormalizeSettings, NormalizeSettingsBuilder, DEFAULT_BYTE_EPSILON, DEFAULT_FLOAT_EPSILON,
    DEFAULT_SHORT_EPSILON, DEFAULT_ZERO_REPLACEMENT,
};
pub use stats::RunStats;
