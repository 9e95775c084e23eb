//! Conversions between [`Color32`] and the textual forms colors take on
//! their way through an editor: the `#RRGGBB` value of a color input and
//! whatever CSS notation a platform reports for a computed style.
//!
//! Alpha never takes part; all three conversions work on the RGB triple
//! and are lossless for it.

use css_color::Srgb;
use ecolor::Color32;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("`{0}` is not a `#RRGGBB` color")]
    Hex(String),
    #[error("`{0}` is not a CSS color")]
    Css(String),
}

/// Formats as `#RRGGBB` with uppercase digits
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Parses `#RRGGBB`, case insensitive
pub fn parse_hex(text: &str) -> Result<Color32, ColorError> {
    let invalid = || ColorError::Hex(text.to_owned());
    let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok(Color32::from_rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

/// Formats the way a computed style reports a color
pub fn css_rgb(color: Color32) -> String {
    format!("rgb({}, {}, {})", color.r(), color.g(), color.b())
}

/// Parses any CSS color notation: `rgb()`, `rgba()`, `hsl()`, hex
/// or a named color.
pub fn parse_css(text: &str) -> Result<Color32, ColorError> {
    let srgb: Srgb = text
        .trim()
        .parse()
        .map_err(|_| ColorError::Css(text.to_owned()))?;

    Ok(Color32::from_rgb(
        channel(srgb.red),
        channel(srgb.green),
        channel(srgb.blue),
    ))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Color32::from_rgb(0xFF, 0x00, 0xAA), "#FF00AA")]
    #[case(Color32::BLACK, "#000000")]
    #[case(Color32::WHITE, "#FFFFFF")]
    #[case(Color32::from_rgb(1, 2, 3), "#010203")]
    fn hex(#[case] color: Color32, #[case] text: &str) {
        assert_eq!(to_hex(color), text);
        assert_eq!(parse_hex(text), Ok(color));
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(
            parse_hex("#ff00aa"),
            Ok(Color32::from_rgb(0xFF, 0x00, 0xAA))
        );
    }

    #[rstest]
    #[case("FF00AA")]
    #[case("#FF00A")]
    #[case("#FF00AAB")]
    #[case("#+F00AA")]
    #[case("#GG00AA")]
    #[case("")]
    fn bad_hex(#[case] text: &str) {
        assert_eq!(parse_hex(text), Err(ColorError::Hex(text.to_owned())));
    }

    #[rstest]
    #[case("rgb(255, 0, 170)", Color32::from_rgb(255, 0, 170))]
    #[case("rgba(255, 0, 170, 0.5)", Color32::from_rgb(255, 0, 170))]
    #[case("#ff00aa", Color32::from_rgb(255, 0, 170))]
    #[case("black", Color32::BLACK)]
    #[case("  rgb(1, 2, 3)  ", Color32::from_rgb(1, 2, 3))]
    fn css(#[case] text: &str, #[case] color: Color32) {
        assert_eq!(parse_css(text), Ok(color));
    }

    #[test]
    fn bad_css() {
        assert_eq!(
            parse_css("not a color"),
            Err(ColorError::Css("not a color".to_owned()))
        );
    }

    #[test]
    fn computed_style_round_trip() {
        let color = parse_hex("#FF00AA").unwrap();
        let reported = css_rgb(color);
        assert_eq!(reported, "rgb(255, 0, 170)");
        assert_eq!(to_hex(parse_css(&reported).unwrap()), "#FF00AA");
    }

    #[test]
    fn every_channel_value_survives_css() {
        for value in 0..=u8::MAX {
            let color = Color32::from_rgb(value, 255 - value, value / 2);
            assert_eq!(parse_css(&css_rgb(color)), Ok(color));
        }
    }
}
