//! The mixture model: ratio-weighted averaging of L*a*b* colors.

use crate::Float;

/// Mix the given L*a*b* colors according to their integer ratios.
///
/// This function computes the componentwise weighted average `Σ colorᵢ·ratioᵢ
/// / Σ ratioᵢ`. Averaging in the perceptually uniform space models pigments
/// blending toward their perceptual midpoint; averaging gamma-corrected sRGB
/// bytes would instead skew mixtures toward dark, muddy results.
///
/// A zero ratio sum cannot occur while ratios are drawn from a positive
/// range, but the degenerate case returns the zero color instead of dividing
/// by zero.
pub fn mix(parts: &[([Float; 3], u32)]) -> [Float; 3] {
    let total: u32 = parts.iter().map(|(_, ratio)| ratio).sum();
    if total == 0 {
        return [0.0, 0.0, 0.0];
    }

    let total = total as Float;
    let mut mixed = [0.0, 0.0, 0.0];
    for (lab, ratio) in parts {
        let weight = *ratio as Float / total;
        mixed[0] = lab[0].mul_add(weight, mixed[0]);
        mixed[1] = lab[1].mul_add(weight, mixed[1]);
        mixed[2] = lab[2].mul_add(weight, mixed[2]);
    }
    mixed
}

#[cfg(test)]
mod test {
    use super::mix;
    use crate::assert_close_enough;

    #[test]
    fn test_equal_ratios() {
        let mixed = mix(&[([70.0, -20.0, -30.0], 1), ([90.0, 0.0, 10.0], 1)]);
        assert_close_enough!(mixed[0], 80.0);
        assert_close_enough!(mixed[1], -10.0);
        assert_close_enough!(mixed[2], -10.0);
    }

    #[test]
    fn test_weighted_ratios() {
        let mixed = mix(&[([70.0, -20.0, -30.0], 2), ([90.0, 0.0, 10.0], 1)]);
        assert_close_enough!(mixed[0], 76.0 + 2.0 / 3.0);
        assert_close_enough!(mixed[1], -13.0 - 1.0 / 3.0);
        assert_close_enough!(mixed[2], -16.0 - 2.0 / 3.0);
    }

    #[test]
    fn test_single_part() {
        assert_eq!(mix(&[([50.0, 10.0, -10.0], 2)]), [50.0, 10.0, -10.0]);
    }

    #[test]
    fn test_degenerate_mixture() {
        assert_eq!(mix(&[]), [0.0, 0.0, 0.0]);
        assert_eq!(mix(&[([50.0, 10.0, -10.0], 0)]), [0.0, 0.0, 0.0]);
    }
}
