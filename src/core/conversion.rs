use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(value: &[u8; 3]) -> [Float; 3] {
    [
        value[0] as Float / 255.0,
        value[1] as Float / 255.0,
        value[2] as Float / 255.0,
    ]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function clamps each coordinate to `0..=1`, scales it by 255, and then
/// truncates toward zero. Truncation instead of rounding loses up to one full
/// step of resolution per channel but keeps output bytes bit-identical with
/// the reference pipeline, which casts instead of rounding.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r.clamp(0.0, 1.0) * 255.0) as u8,
        (g.clamp(0.0, 1.0) * 255.0) as u8,
        (b.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65/2° reference white in XYZ, scaled to unit luminance.
const D65_WHITE: [Float; 3] = [0.95047, 1.0, 1.08883];

/// The CIE threshold separating the cube root from the linear segment of the
/// L*a*b* forward function, i.e., (6/29)³.
const EPSILON: Float = 216.0 / 24389.0;

/// The slope of the linear segment of the L*a*b* forward function, i.e.,
/// (29/3)³.
const KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates for XYZ (D65) to L*a*b*. This is a one-hop, direct
/// conversion. Lightness ranges `0..=100`; the two chromatic axes are
/// unbounded in principle but remain within roughly `-128..=127` for colors
/// inside the sRGB gamut.
#[allow(non_snake_case)]
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(value[0] / D65_WHITE[0]);
    let fy = f(value[1] / D65_WHITE[1]);
    let fz = f(value[2] / D65_WHITE[2]);

    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert coordinates for L*a*b* to XYZ (D65). This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f_inverse(t: Float) -> Float {
        let t3 = t * t * t;
        if t3 > EPSILON {
            t3
        } else {
            (116.0 * t - 16.0) / KAPPA
        }
    }

    let [L, a, b] = *value;
    let fy = (L + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    [
        f_inverse(fx) * D65_WHITE[0],
        f_inverse(fy) * D65_WHITE[1],
        f_inverse(fz) * D65_WHITE[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB coordinates to L*a*b*. This is a three-hop conversion
/// chaining gamma linearization, the linear-sRGB-to-XYZ matrix, and the
/// XYZ-to-L*a*b* nonlinearity.
pub fn srgb_to_lab(value: &[u8; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(&from_24bit(value));
    xyz_to_lab(&linear_srgb_to_xyz(&linear_srgb))
}

/// Convert L*a*b* coordinates to 24-bit sRGB. This is the inverse three-hop
/// conversion. Out-of-gamut results are clamped channel-wise, and the final
/// quantization truncates as documented on [`to_24bit`].
pub fn lab_to_srgb(value: &[Float; 3]) -> [u8; 3] {
    let linear_srgb = xyz_to_linear_srgb(&lab_to_xyz(value));
    to_24bit(&linear_rgb_to_rgb(&linear_srgb))
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::assert_same_coordinates;
    use crate::Float;

    fn assert_near(actual: &[Float; 3], expected: &[Float; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() < 1e-6,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_srgb_to_lab() {
        assert_near(&srgb_to_lab(&[0, 0, 0]), &[0.0, 0.0, 0.0]);
        assert_near(
            &srgb_to_lab(&[255, 255, 255]),
            &[100.0, -0.002467729611821401, -0.01394370606786488],
        );
        assert_near(
            &srgb_to_lab(&[255, 0, 0]),
            &[53.23711559542936, 80.08824532367986, 67.19962622113603],
        );
        assert_near(
            &srgb_to_lab(&[0x87, 0xCE, 0xEB]),
            &[79.20804097706059, -14.835964368425547, -21.288452406888638],
        );
        assert_near(
            &srgb_to_lab(&[0x31, 0x78, 0xEA]),
            &[51.86582883269902, 18.294323178078496, -63.840709525202755],
        );
    }

    #[test]
    fn test_lab_round_trip() {
        // The linear segment of the L*a*b* nonlinearity kicks in near black,
        // so exercise both segments.
        for lab in [
            [50.0, 2.6772, -79.7751],
            [79.20804097706059, -14.835964368425547, -21.288452406888638],
            [0.5, 0.1, -0.1],
            [100.0, 0.0, 0.0],
        ] {
            assert_same_coordinates!(&xyz_to_lab(&lab_to_xyz(&lab)), &lab);
        }
    }

    #[test]
    fn test_rgb_round_trip() {
        // Truncation loses up to one step of resolution, so each channel
        // comes back within one step of the original.
        for rgb in [
            [0, 0, 0],
            [255, 255, 255],
            [255, 0, 0],
            [0x87, 0xCE, 0xEB],
            [12, 200, 77],
        ] {
            let [r, g, b] = lab_to_srgb(&srgb_to_lab(&rgb));
            assert!(rgb[0].abs_diff(r) <= 1, "red channel off for {:?}", rgb);
            assert!(rgb[1].abs_diff(g) <= 1, "green channel off for {:?}", rgb);
            assert!(rgb[2].abs_diff(b) <= 1, "blue channel off for {:?}", rgb);
        }
    }

    #[test]
    fn test_to_24bit_truncates() {
        assert_eq!(to_24bit(&[0.999, 0.5, 0.0]), [254, 127, 0]);
        assert_eq!(to_24bit(&[1.2, -0.5, 1.0]), [255, 0, 255]);
    }
}
