//! Run settings for weight normalization, and a builder that validates them.

use crate::encoding::{NumericEncoding, WeightVector, COMPONENTS};
use crate::error::SettingsError;
use crate::reweight::reweight;

/// Deadzone for float weights: sums within `1/1024` of `1.0` are left alone.
pub const DEFAULT_FLOAT_EPSILON: f64 = 1.0 / 1024.0;
/// Deadzone for unsigned short weights, in raw units.
pub const DEFAULT_SHORT_EPSILON: f64 = 4.0;
/// Deadzone for unsigned byte weights, in raw units.
pub const DEFAULT_BYTE_EPSILON: f64 = 4.0;
/// Vector written in place of an all-zero weight vector: full influence on the first joint.
pub const DEFAULT_ZERO_REPLACEMENT: [f32; COMPONENTS] = [1.0, 0.0, 0.0, 0.0];

/// Validated settings for a normalization run.
///
/// Use [`NormalizeSettingsBuilder`] to create settings other than the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeSettings {
    zero_replacement: [f32; COMPONENTS],
    skip_reweight: bool,
    skip_overkill: bool,
    float_epsilon: f64,
    short_epsilon: f64,
    byte_epsilon: f64,
}

impl NormalizeSettings {
    /// Creates a builder starting from the default settings.
    pub fn builder() -> NormalizeSettingsBuilder {
        NormalizeSettingsBuilder::new()
    }

    /// The vector written over all-zero weight vectors, on a `0.0..=1.0` scale.
    pub fn zero_replacement(&self) -> [f32; COMPONENTS] {
        self.zero_replacement
    }

    /// Whether only all-zero vectors are repaired, with non-zero vectors left alone.
    pub fn skip_reweight(&self) -> bool {
        self.skip_reweight
    }

    /// Whether the dominant component is left as scaled, instead of absorbing rounding error.
    pub fn skip_overkill(&self) -> bool {
        self.skip_overkill
    }

    /// The deadzone applied to vectors of the given encoding.
    pub fn epsilon(&self, encoding: NumericEncoding) -> f64 {
        match encoding {
            NumericEncoding::Float32 => self.float_epsilon,
            NumericEncoding::UInt16 => self.short_epsilon,
            NumericEncoding::UInt8 => self.byte_epsilon,
        }
    }

    /// The zero replacement, scaled to the native domain of `encoding`.
    ///
    /// Integer encodings get the replacement multiplied by full scale, rounded, and
    /// (unless overkill is skipped) corrected so it sums to exactly full scale.
    pub fn scaled_zero_replacement(&self, encoding: NumericEncoding) -> WeightVector {
        let replacement = self.zero_replacement.map(f64::from);
        if !encoding.is_integer() {
            return replacement;
        }

        let full_scale = encoding.full_scale();
        reweight(&replacement, full_scale, full_scale, !self.skip_overkill, true)
    }
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            zero_replacement: DEFAULT_ZERO_REPLACEMENT,
            skip_reweight: false,
            skip_overkill: false,
            float_epsilon: DEFAULT_FLOAT_EPSILON,
            short_epsilon: DEFAULT_SHORT_EPSILON,
            byte_epsilon: DEFAULT_BYTE_EPSILON,
        }
    }
}

/// Builder for [`NormalizeSettings`].
///
/// Every option left unset keeps its default. Values are validated in [`build`](Self::build).
///
/// ```
/// use skin_weight_normalize::{NormalizeSettingsBuilder, NumericEncoding};
///
/// let settings = NormalizeSettingsBuilder::new()
///     .zero_replacement([0.5, 0.5, 0.0, 0.0])
///     .skip_overkill(true)
///     .epsilon(NumericEncoding::UInt8, 2.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.epsilon(NumericEncoding::UInt8), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeSettingsBuilder {
    zero_replacement: Option<[f32; COMPONENTS]>,
    skip_reweight: Option<bool>,
    skip_overkill: Option<bool>,
    float_epsilon: Option<f64>,
    short_epsilon: Option<f64>,
    byte_epsilon: Option<f64>,
}

impl NormalizeSettingsBuilder {
    /// Create a new builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vector written over all-zero weight vectors.
    ///
    /// Each component must lie in `0.0..=1.0` and the components must sum to `1.0`;
    /// integer encodings scale it to full scale.
    pub fn zero_replacement(mut self, replacement: [f32; COMPONENTS]) -> Self {
        self.zero_replacement = Some(replacement);
        self
    }

    /// Set whether to only repair all-zero vectors.
    pub fn skip_reweight(mut self, skip: bool) -> Self {
        self.skip_reweight = Some(skip);
        self
    }

    /// Set whether to skip pinning the dominant component to absorb rounding error.
    ///
    /// Without overkill, integer vectors can end up a unit or two away from full scale.
    pub fn skip_overkill(mut self, skip: bool) -> Self {
        self.skip_overkill = Some(skip);
        self
    }

    /// Set the deadzone for one encoding, in that encoding's native units.
    pub fn epsilon(mut self, encoding: NumericEncoding, epsilon: f64) -> Self {
        match encoding {
            NumericEncoding::Float32 => self.float_epsilon = Some(epsilon),
            NumericEncoding::UInt16 => self.short_epsilon = Some(epsilon),
            NumericEncoding::UInt8 => self.byte_epsilon = Some(epsilon),
        }
        self
    }

    /// Validate the options and produce the settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if an epsilon is negative or not finite, a zero replacement
    /// component lies outside `0.0..=1.0` (NaN included), or the zero replacement does not
    /// sum to `1.0` within the float epsilon.
    pub fn build(self) -> Result<NormalizeSettings, SettingsError> {
        let defaults = NormalizeSettings::default();

        let float_epsilon = self.float_epsilon.unwrap_or(defaults.float_epsilon);
        let short_epsilon = self.short_epsilon.unwrap_or(defaults.short_epsilon);
        let byte_epsilon = self.byte_epsilon.unwrap_or(defaults.byte_epsilon);
        for (encoding, value) in [
            (NumericEncoding::Float32, float_epsilon),
            (NumericEncoding::UInt16, short_epsilon),
            (NumericEncoding::UInt8, byte_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidEpsilon { encoding, value });
            }
        }

        let zero_replacement = self.zero_replacement.unwrap_or(defaults.zero_replacement);
        if let Some((lane, &value)) = zero_replacement
            .iter()
            .enumerate()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(SettingsError::ZeroReplacementOutOfRange { lane, value });
        }

        // Must already count as normalized float weights.
        let sum: f64 = zero_replacement.iter().copied().map(f64::from).sum();
        let diff = (1.0 - sum).abs();
        if sum == 0.0 || (diff != 0.0 && diff >= float_epsilon) {
            return Err(SettingsError::ZeroReplacementSum { sum });
        }

        Ok(NormalizeSettings {
            zero_replacement,
            skip_reweight: self.skip_reweight.unwrap_or(defaults.skip_reweight),
            skip_overkill: self.skip_overkill.unwrap_or(defaults.skip_overkill),
            float_epsilon,
            short_epsilon,
            byte_epsilon,
        })
    }
}
