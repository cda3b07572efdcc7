use crate::Float;

/// Compute the CIEDE2000 color difference ΔE₀₀ between two L*a*b* colors.
///
/// This function implements the complete formula, including the chroma-based
/// a* rescaling, the lightness, chroma, and hue weighting functions, the hue
/// rotation term T, and the blue-region interaction term RT. The parametric
/// factors kL, kC, and kH are fixed at 1, their reference viewing-condition
/// values.
///
/// The metric is symmetric in everything but the sign of the raw lightness,
/// chroma, and hue differences, which cancel when squared. Callers in this
/// crate nonetheless pass the target color first, so that results stay
/// comparable with other CIEDE2000 implementations fed the same operand
/// order.
///
/// Identical inputs yield 0. For colors within the sRGB gamut, results stay
/// on a roughly 0–100 scale, with just-noticeable differences near 1.
#[allow(non_snake_case)]
pub fn delta_e_2000(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    const POW7_25: Float = 6_103_515_625.0; // 25⁷

    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // Rescale a* based on mean chroma.
    let C1_ab = a1.hypot(b1);
    let C2_ab = a2.hypot(b2);
    let C_ab = (C1_ab + C2_ab) / 2.0;
    let C_ab_pow7 = C_ab.powi(7);
    let G = 0.5 * (1.0 - (C_ab_pow7 / (C_ab_pow7 + POW7_25)).sqrt());

    let a1_prime = a1 * (1.0 + G);
    let a2_prime = a2 * (1.0 + G);

    // Chroma and hue in the rescaled a*b* plane.
    let C1 = a1_prime.hypot(b1);
    let C2 = a2_prime.hypot(b2);

    let h1 = into_positive_degrees(b1.atan2(a1_prime));
    let h2 = into_positive_degrees(b2.atan2(a2_prime));

    // Lightness, chroma, and hue differences.
    let ΔL = L2 - L1;
    let ΔC = C2 - C1;

    let Δh = if C1 * C2 == 0.0 {
        0.0
    } else if (h2 - h1).abs() <= 180.0 {
        h2 - h1
    } else if h2 - h1 > 180.0 {
        h2 - h1 - 360.0
    } else {
        h2 - h1 + 360.0
    };
    let ΔH = 2.0 * (C1 * C2).sqrt() * (Δh.to_radians() / 2.0).sin();

    // Mean lightness, chroma, and hue.
    let L = (L1 + L2) / 2.0;
    let C = (C1 + C2) / 2.0;

    let h = if C1 * C2 == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    // Hue rotation weight.
    let T = 1.0 - 0.17 * (h - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h).to_radians().cos()
        + 0.32 * (3.0 * h + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h - 63.0).to_radians().cos();

    // Weighting functions.
    let L_50_squared = (L - 50.0) * (L - 50.0);
    let SL = 1.0 + (0.015 * L_50_squared) / (20.0 + L_50_squared).sqrt();
    let SC = 1.0 + 0.045 * C;
    let SH = 1.0 + 0.015 * C * T;

    // Blue-region interaction.
    let Δtheta = 30.0 * (-((h - 275.0) / 25.0) * ((h - 275.0) / 25.0)).exp();
    let C_pow7 = C.powi(7);
    let RC = 2.0 * (C_pow7 / (C_pow7 + POW7_25)).sqrt();
    let RT = -RC * (2.0 * Δtheta).to_radians().sin();

    let term_L = ΔL / SL;
    let term_C = ΔC / SC;
    let term_H = ΔH / SH;

    (term_L * term_L + term_C * term_C + term_H * term_H + RT * term_C * term_H).sqrt()
}

/// Convert the angle in radians to degrees in `0..360`.
#[inline]
fn into_positive_degrees(radians: Float) -> Float {
    let degrees = radians.to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::delta_e_2000;
    use crate::Float;

    #[test]
    fn test_identical_colors() {
        for lab in [[0.0, 0.0, 0.0], [50.0, 2.6772, -79.7751], [100.0, 0.0, 0.0]] {
            assert_eq!(delta_e_2000(&lab, &lab), 0.0);
        }
    }

    #[test]
    fn test_sharma_reference_pairs() {
        // Expected values from Sharma, Wu, and Dalal, "The CIEDE2000
        // Color-Difference Formula: Implementation Notes, Supplementary Test
        // Data, and Mathematical Observations" (2005), table 1.
        let pairs: [([Float; 3], [Float; 3], Float); 6] = [
            ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
            ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
            ([50.0, 2.8361, -74.0200], [50.0, 0.0, -82.7485], 3.4412),
            ([50.0, -1.3802, -84.2814], [50.0, 0.0, -82.7485], 1.0000),
            (
                [60.2574, -34.0099, 36.2677],
                [60.4626, -34.1751, 39.4387],
                1.2644,
            ),
            (
                [63.0109, -31.0961, -5.8663],
                [62.8187, -29.7946, -4.0864],
                1.2630,
            ),
        ];

        for (lab1, lab2, expected) in pairs {
            let actual = delta_e_2000(&lab1, &lab2);
            assert!(
                (actual - expected).abs() < 1e-4,
                "ΔE₀₀({:?}, {:?}) was {} but should be {}",
                lab1,
                lab2,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_achromatic_pair() {
        // Zero chroma exercises the degenerate hue branches.
        let difference = delta_e_2000(&[40.0, 0.0, 0.0], &[60.0, 0.0, 0.0]);
        assert!(difference > 0.0);
        assert!(difference < 25.0);
    }
}
