//! Rescaling a weight vector, with the dominant component absorbing any leftover error.

use crate::encoding::WeightVector;

/// Scales every component of `vector` by `ratio`.
///
/// With `round`, each scaled component is rounded to the nearest integer (ties to even),
/// which is what integer encodings need before storing.
///
/// With `overkill`, the dominant component (the largest after scaling and rounding, first
/// one on ties) is then replaced by `target` minus the sum of the other three. This absorbs
/// rounding error so integer vectors sum to exactly `target`, and float vectors sum to it
/// as closely as `f64` allows.
pub fn reweight(
    vector: &WeightVector,
    ratio: f64,
    target: f64,
    overkill: bool,
    round: bool,
) -> WeightVector {
    let mut scaled = vector.map(|component| component * ratio);
    if round {
        scaled = scaled.map(f64::round_ties_even);
    }

    if overkill {
        let dominant = dominant_lane(&scaled);
        let others: f64 = scaled
            .iter()
            .enumerate()
            .filter(|&(lane, _)| lane != dominant)
            .map(|(_, component)| component)
            .sum();
        scaled[dominant] = target - others;
    }

    scaled
}

/// Index of the largest component; the first one wins ties.
fn dominant_lane(vector: &WeightVector) -> usize {
    let mut dominant = 0;
    for (lane, &component) in vector.iter().enumerate().skip(1) {
        if component > vector[dominant] {
            dominant = lane;
        }
    }
    dominant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case([0.0, 3.0, 1.0, 3.0], 1)]
    #[case([5.0, 5.0, 5.0, 5.0], 0)]
    #[case([0.0, 0.0, 0.0, 9.0], 3)]
    #[case([0.0, 0.0, 0.0, 0.0], 0)]
    fn dominant_lane_prefers_first_maximum(#[case] vector: WeightVector, #[case] expected: usize) {
        assert_eq!(dominant_lane(&vector), expected);
    }

    #[rstest]
    // 255 / 200 is just below 1.275 as an f64, so both lanes round down to 127.
    #[case::rounds_down([100.0, 100.0, 0.0, 0.0], 255.0 / 200.0, [128.0, 127.0, 0.0, 0.0])]
    // 127.5 is exact, so both lanes round to 128.
    #[case::rounds_up([1.0, 1.0, 0.0, 0.0], 127.5, [127.0, 128.0, 0.0, 0.0])]
    fn integer_overkill_hits_target_exactly(
        #[case] vector: WeightVector,
        #[case] ratio: f64,
        #[case] expected: WeightVector,
    ) {
        let result = reweight(&vector, ratio, 255.0, true, true);
        assert_eq!(result, expected);
        assert_eq!(result.iter().sum::<f64>(), 255.0);
    }

    #[rstest]
    #[case::rounds_down([100.0, 100.0, 0.0, 0.0], 255.0 / 200.0, [127.0, 127.0, 0.0, 0.0])]
    #[case::rounds_up([1.0, 1.0, 0.0, 0.0], 127.5, [128.0, 128.0, 0.0, 0.0])]
    fn integer_without_overkill_keeps_rounding_error(
        #[case] vector: WeightVector,
        #[case] ratio: f64,
        #[case] expected: WeightVector,
    ) {
        assert_eq!(reweight(&vector, ratio, 255.0, false, true), expected);
    }

    #[rstest]
    #[case([0.5, 1.5, 2.5, 3.5], [0.0, 2.0, 2.0, 4.0])]
    #[case([10.5, 11.5, 0.4, 0.6], [10.0, 12.0, 0.0, 1.0])]
    fn rounds_ties_to_even(#[case] vector: WeightVector, #[case] expected: WeightVector) {
        assert_eq!(reweight(&vector, 1.0, 0.0, false, true), expected);
    }

    #[rstest]
    fn float_scaling_without_rounding() {
        let result = reweight(&[0.2, 0.2, 0.1, 0.0], 2.0, 1.0, false, false);
        assert_eq!(result, [0.4, 0.4, 0.2, 0.0]);
    }

    #[rstest]
    fn float_overkill_pins_dominant_lane() {
        let result = reweight(&[0.1, 0.6, 0.1, 0.0], 1.25, 1.0, true, false);
        assert_eq!(result[0], 0.1 * 1.25);
        assert_eq!(result[1], 1.0 - (0.1 * 1.25 + 0.1 * 1.25 + 0.0));
        assert_eq!(result[2], 0.1 * 1.25);
        assert!((result.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[rstest]
    fn short_overkill_converges_for_many_vectors() {
        for vector in pseudo_random_vectors(2000, 65535.0) {
            let sum: f64 = vector.iter().sum();
            if sum == 0.0 {
                continue;
            }
            let result = reweight(&vector, 65535.0 / sum, 65535.0, true, true);
            assert_eq!(result.iter().sum::<f64>(), 65535.0, "{vector:?} -> {result:?}");
            assert!(result.iter().all(|&c| (0.0..=65535.0).contains(&c) && c.fract() == 0.0));
        }
    }
}
