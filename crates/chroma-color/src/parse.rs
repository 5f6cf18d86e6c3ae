//! Color string parsing.
//!
//! Accepts `#RRGGBB` (opaque), `#AARRGGBB`, and a small set of named
//! colors matched case-insensitively.

use chroma_core::{Error, Result};

use crate::argb;

/// Parses a color string into an 8-bit ARGB color int.
///
/// `#RRGGBB` strings get an opaque alpha; `#AARRGGBB` strings carry
/// their own. Anything else is looked up in the named color table.
///
/// # Errors
///
/// [`Error::UnknownColor`] for malformed hex strings and unknown names.
///
/// # Example
///
/// ```rust
/// use chroma_color::parse_color;
///
/// assert_eq!(parse_color("#ff0000").unwrap(), 0xFFFF0000);
/// assert_eq!(parse_color("#80ff0000").unwrap(), 0x80FF0000);
/// assert_eq!(parse_color("navy").unwrap(), 0xFF000080);
/// ```
pub fn parse_color(color_string: &str) -> Result<u32> {
    if let Some(hex) = color_string.strip_prefix('#') {
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::unknown_color(color_string))?;
        return match hex.len() {
            6 => Ok(value | 0xFF00_0000),
            8 => Ok(value),
            _ => Err(Error::unknown_color(color_string)),
        };
    }

    named(&color_string.to_lowercase()).ok_or_else(|| Error::unknown_color(color_string))
}

fn named(name: &str) -> Option<u32> {
    Some(match name {
        "black" => argb::BLACK,
        "darkgray" | "darkgrey" => argb::DKGRAY,
        "gray" | "grey" => argb::GRAY,
        "lightgray" | "lightgrey" => argb::LTGRAY,
        "white" => argb::WHITE,
        "red" => argb::RED,
        "green" => argb::GREEN,
        "blue" => argb::BLUE,
        "yellow" => argb::YELLOW,
        "cyan" | "aqua" => argb::CYAN,
        "magenta" | "fuchsia" => argb::MAGENTA,
        "lime" => 0xFF00_FF00,
        "maroon" => 0xFF80_0000,
        "navy" => 0xFF00_0080,
        "olive" => 0xFF80_8000,
        "purple" => 0xFF80_0080,
        "silver" => 0xFFC0_C0C0,
        "teal" => 0xFF00_8080,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_digits_opaque() {
        assert_eq!(parse_color("#123456").unwrap(), 0xFF12_3456);
        assert_eq!(parse_color("#ffffff").unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_hex_eight_digits() {
        assert_eq!(parse_color("#80123456").unwrap(), 0x8012_3456);
        assert_eq!(parse_color("#00000000").unwrap(), 0x0000_0000);
    }

    #[test]
    fn test_hex_invalid_lengths() {
        for s in ["#fff", "#12345", "#1234567", "#123456789"] {
            assert!(matches!(
                parse_color(s).unwrap_err(),
                Error::UnknownColor { .. }
            ));
        }
    }

    #[test]
    fn test_hex_invalid_digits() {
        assert!(parse_color("#12345g").is_err());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red").unwrap(), 0xFFFF_0000);
        assert_eq!(parse_color("lime").unwrap(), 0xFF00_FF00);
        assert_eq!(parse_color("navy").unwrap(), 0xFF00_0080);
        // CSS aliases map to the same values
        assert_eq!(parse_color("aqua").unwrap(), parse_color("cyan").unwrap());
        assert_eq!(
            parse_color("fuchsia").unwrap(),
            parse_color("magenta").unwrap()
        );
        assert_eq!(parse_color("grey").unwrap(), parse_color("gray").unwrap());
    }

    #[test]
    fn test_named_case_insensitive() {
        assert_eq!(parse_color("RED").unwrap(), 0xFFFF_0000);
        assert_eq!(parse_color("DarkGrey").unwrap(), 0xFF44_4444);
    }

    #[test]
    fn test_unknown_name() {
        let err = parse_color("chartreuse").unwrap_err();
        assert!(err.to_string().contains("chartreuse"));
    }
}
