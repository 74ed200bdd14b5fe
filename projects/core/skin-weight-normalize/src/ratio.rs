//! Deciding whether a weight vector needs rescaling at all.

/// Returns the factor that rescales `observed_sum` to `target_sum`, or [`None`] if the
/// vector should be left alone.
///
/// A vector is left alone when its sum is already within `epsilon` of the target
/// (the deadzone), and when the sum is zero or not finite, since no factor can repair those.
///
/// ```
/// use skin_weight_normalize::ratio_with_deadzone;
///
/// assert_eq!(ratio_with_deadzone(200.0, 255.0, 4.0), Some(1.275));
/// assert_eq!(ratio_with_deadzone(252.0, 255.0, 4.0), None);
/// ```
pub fn ratio_with_deadzone(observed_sum: f64, target_sum: f64, epsilon: f64) -> Option<f64> {
    if !observed_sum.is_finite() || observed_sum == 0.0 {
        return None;
    }

    let diff = (target_sum - observed_sum).abs();
    if diff == 0.0 || diff < epsilon {
        return None;
    }

    Some(target_sum / observed_sum)
}
