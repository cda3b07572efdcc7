use crate::error::ColorFormatError;

/// The hexadecimal digit case for formatted colors.
///
/// Both cases appear in the wild for web colors, so formatting takes the case
/// as an explicit option instead of hard-coding one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HexCase {
    /// Format with lowercase digits, e.g., `#87ceeb`.
    #[default]
    Lower,
    /// Format with uppercase digits, e.g., `#87CEEB`.
    Upper,
}

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The string may carry one optional leading `#`. The first six characters
/// after the hash must be hexadecimal digits, read as three consecutive
/// two-digit bytes; any characters past the sixth digit are ignored. Callers
/// that cannot produce colors for malformed input should treat the error as
/// "no result" rather than propagate it.
pub fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.strip_prefix('#').unwrap_or(s);

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * index + 2)
            .ok_or(ColorFormatError::TooFewDigits)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the 24-bit color as a hashed six-digit hexadecimal string.
pub fn format_hex(value: &[u8; 3], case: HexCase) -> String {
    match case {
        HexCase::Lower => format!("#{:02x}{:02x}{:02x}", value[0], value[1], value[2]),
        HexCase::Upper => format!("#{:02X}{:02X}{:02X}", value[0], value[1], value[2]),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex, HexCase};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#87CEEB")?, [0x87_u8, 0xCE, 0xEB]);
        assert_eq!(parse_hex("#87ceeb")?, [0x87_u8, 0xCE, 0xEB]);

        // Trailing characters past the sixth digit are ignored.
        assert_eq!(parse_hex("#112233ff")?, [0x11_u8, 0x22, 0x33]);

        assert_eq!(parse_hex(""), Err(ColorFormatError::TooFewDigits));
        assert_eq!(parse_hex("#"), Err(ColorFormatError::TooFewDigits));
        assert_eq!(parse_hex("#1122"), Err(ColorFormatError::TooFewDigits));
        assert_eq!(parse_hex("#💩0000"), Err(ColorFormatError::TooFewDigits));
        assert_eq!(parse_hex("not-a-color"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#11g233"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x87, 0xCE, 0xEB], HexCase::Lower), "#87ceeb");
        assert_eq!(format_hex(&[0x87, 0xCE, 0xEB], HexCase::Upper), "#87CEEB");
        assert_eq!(format_hex(&[0, 0, 0], HexCase::Lower), "#000000");
        assert_eq!(format_hex(&[255, 255, 255], HexCase::Upper), "#FFFFFF");
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for rgb in [[0_u8, 0, 0], [255, 255, 255], [0x8B, 0xC5, 0xDB]] {
            assert_eq!(parse_hex(&format_hex(&rgb, HexCase::Lower))?, rgb);
            assert_eq!(parse_hex(&format_hex(&rgb, HexCase::Upper))?, rgb);
        }
        Ok(())
    }
}
