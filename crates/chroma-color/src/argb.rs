//! 8-bit ARGB integer helpers.
//!
//! A color int packs four 8-bit channels as `0xAARRGGBB`. All colors in
//! this encoding are sRGB. These helpers extract and assemble channels
//! without any color management; see [`crate::packed`] for the 64-bit
//! encoding that carries a color space id.

use chroma_transfer::presets::srgb_eotf;

/// Opaque black, `0xFF000000`.
pub const BLACK: u32 = 0xFF00_0000;
/// Dark gray, `0xFF444444`.
pub const DKGRAY: u32 = 0xFF44_4444;
/// Gray, `0xFF888888`.
pub const GRAY: u32 = 0xFF88_8888;
/// Light gray, `0xFFCCCCCC`.
pub const LTGRAY: u32 = 0xFFCC_CCCC;
/// Opaque white, `0xFFFFFFFF`.
pub const WHITE: u32 = 0xFFFF_FFFF;
/// Pure red, `0xFFFF0000`.
pub const RED: u32 = 0xFFFF_0000;
/// Pure green, `0xFF00FF00`.
pub const GREEN: u32 = 0xFF00_FF00;
/// Pure blue, `0xFF0000FF`.
pub const BLUE: u32 = 0xFF00_00FF;
/// Yellow, `0xFFFFFF00`.
pub const YELLOW: u32 = 0xFFFF_FF00;
/// Cyan, `0xFF00FFFF`.
pub const CYAN: u32 = 0xFF00_FFFF;
/// Magenta, `0xFFFF00FF`.
pub const MAGENTA: u32 = 0xFFFF_00FF;
/// Fully transparent black, `0x00000000`.
pub const TRANSPARENT: u32 = 0;

/// Extracts the alpha channel of a color int, in `[0, 255]`.
#[inline]
pub fn alpha(color: u32) -> u32 {
    color >> 24
}

/// Extracts the red channel of a color int, in `[0, 255]`.
#[inline]
pub fn red(color: u32) -> u32 {
    (color >> 16) & 0xFF
}

/// Extracts the green channel of a color int, in `[0, 255]`.
#[inline]
pub fn green(color: u32) -> u32 {
    (color >> 8) & 0xFF
}

/// Extracts the blue channel of a color int, in `[0, 255]`.
#[inline]
pub fn blue(color: u32) -> u32 {
    color & 0xFF
}

/// Assembles an opaque color int from 8-bit channels.
///
/// Channel values above 255 bleed into neighboring channels; callers
/// are expected to pass values in `[0, 255]`.
#[inline]
pub fn rgb(red: u32, green: u32, blue: u32) -> u32 {
    0xFF00_0000 | (red << 16) | (green << 8) | blue
}

/// Assembles an opaque color int from `[0, 1]` channel values.
///
/// Each channel is quantized as `(v * 255 + 0.5)` truncated.
#[inline]
pub fn rgb_from_floats(red: f32, green: f32, blue: f32) -> u32 {
    0xFF00_0000
        | (quantize(red) << 16)
        | (quantize(green) << 8)
        | quantize(blue)
}

/// Assembles a color int from 8-bit channels.
#[inline]
pub fn argb(alpha: u32, red: u32, green: u32, blue: u32) -> u32 {
    (alpha << 24) | (red << 16) | (green << 8) | blue
}

/// Assembles a color int from `[0, 1]` channel values.
#[inline]
pub fn argb_from_floats(alpha: f32, red: f32, green: f32, blue: f32) -> u32 {
    (quantize(alpha) << 24)
        | (quantize(red) << 16)
        | (quantize(green) << 8)
        | quantize(blue)
}

/// Returns the relative luminance of a color int.
///
/// The color is decoded through the sRGB EOTF and weighted with the
/// BT.709 luminance coefficients.
///
/// # Formula
///
/// ```text
/// Y = 0.2126 R' + 0.7152 G' + 0.0722 B'   (R', G', B' linear)
/// ```
pub fn luminance(color: u32) -> f32 {
    let r = srgb_eotf(f64::from(red(color)) / 255.0);
    let g = srgb_eotf(f64::from(green(color)) / 255.0);
    let b = srgb_eotf(f64::from(blue(color)) / 255.0);
    (0.2126 * r + 0.7152 * g + 0.0722 * b) as f32
}

#[inline]
pub(crate) fn quantize(v: f32) -> u32 {
    (v * 255.0 + 0.5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_channel_extraction() {
        let c = 0x8040_2010;
        assert_eq!(alpha(c), 0x80);
        assert_eq!(red(c), 0x40);
        assert_eq!(green(c), 0x20);
        assert_eq!(blue(c), 0x10);
    }

    #[test]
    fn test_assembly_round_trip() {
        let c = argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c, 0x1234_5678);
        assert_eq!(rgb(0x34, 0x56, 0x78), 0xFF34_5678);
    }

    #[test]
    fn test_float_assembly() {
        assert_eq!(rgb_from_floats(1.0, 0.0, 0.0), RED);
        assert_eq!(argb_from_floats(1.0, 1.0, 1.0, 1.0), WHITE);
        // 0.5 * 255 + 0.5 = 128
        assert_eq!(red(rgb_from_floats(0.5, 0.0, 0.0)), 128);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_relative_eq!(luminance(WHITE), 1.0, epsilon = 1e-5);
        assert_relative_eq!(luminance(BLACK), 0.0, epsilon = 1e-5);
        // Green dominates the BT.709 weighting.
        assert!(luminance(GREEN) > luminance(RED));
        assert!(luminance(RED) > luminance(BLUE));
    }
}
