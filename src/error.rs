//! Utility module with tintmix's errors.

/// An erroneous color format.
///
/// Parsing a hexadecimal color fails with this error. The recipe search
/// recovers from it locally: a target color that does not decode produces an
/// empty recipe list instead of an error visible to the search's caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with fewer than six hexadecimal digits. For example,
    /// `#1122` is missing the third coordinate.
    TooFewDigits,

    /// A color format with a malformed hexadecimal coordinate. For example,
    /// `#11g233` has a malformed second coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            TooFewDigits => {
                f.write_str("hex color should have at least six hexadecimal digits but has fewer")
            }
            MalformedHex => {
                f.write_str("hex color coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(test)]
mod test {
    use super::ColorFormatError;

    #[test]
    fn test_display() {
        assert_eq!(
            ColorFormatError::TooFewDigits.to_string(),
            "hex color should have at least six hexadecimal digits but has fewer"
        );
        assert_eq!(
            ColorFormatError::MalformedHex.to_string(),
            "hex color coordinates should be hexadecimal integers but are not"
        );
    }
}
