//! HSV conversions over 8-bit sRGB channels.
//!
//! Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.

use crate::argb;

/// Converts 8-bit RGB channels to HSV.
///
/// # Formula
///
/// ```text
/// V = max(R, G, B)
/// S = (V - min) / V          (0 when V = 0)
/// H = 60 * sector offset     (sector picked by the max channel)
/// ```
pub fn rgb_to_hsv(red: u32, green: u32, blue: u32) -> [f32; 3] {
    let r = red as f32 / 255.0;
    let g = green as f32 / 255.0;
    let b = blue as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, max];
    }

    let s = delta / max;
    let mut h = if r >= g && r >= b {
        (g - b) / delta
    } else if g >= b {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    } * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    [h, s, max]
}

/// Converts an 8-bit ARGB color int to HSV, ignoring alpha.
pub fn color_to_hsv(color: u32) -> [f32; 3] {
    rgb_to_hsv(argb::red(color), argb::green(color), argb::blue(color))
}

/// Converts HSV to an opaque 8-bit ARGB color int.
pub fn hsv_to_color(hsv: [f32; 3]) -> u32 {
    hsv_to_color_with_alpha(0xFF, hsv)
}

/// Converts HSV to an 8-bit ARGB color int with the given alpha.
///
/// Saturation and value are clamped to `[0, 1]`; hue wraps modulo 360.
pub fn hsv_to_color_with_alpha(alpha: u32, hsv: [f32; 3]) -> u32 {
    let s = hsv[1].clamp(0.0, 1.0);
    let v = hsv[2].clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = (v * 255.0 + 0.5) as u32;
        return argb::argb(alpha, gray, gray, gray);
    }

    let h = (hsv[0].rem_euclid(360.0)) / 60.0;
    let sector = h as u32 % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    argb::argb(
        alpha,
        (r * 255.0 + 0.5) as u32,
        (g * 255.0 + 0.5) as u32,
        (b * 255.0 + 0.5) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsv(255, 0, 0), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(0, 255, 0), [120.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(0, 0, 255), [240.0, 1.0, 1.0]);
    }

    #[test]
    fn test_achromatic() {
        let [h, s, v] = rgb_to_hsv(128, 128, 128);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_relative_eq!(v, 128.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hue_wraps_positive() {
        // Magenta-ish leans into the negative branch of the red sector
        let [h, _, _] = rgb_to_hsv(255, 0, 128);
        assert!(h > 300.0 && h < 360.0);
    }

    #[test]
    fn test_hsv_to_color_primaries() {
        assert_eq!(hsv_to_color([0.0, 1.0, 1.0]), 0xFFFF_0000);
        assert_eq!(hsv_to_color([120.0, 1.0, 1.0]), 0xFF00_FF00);
        assert_eq!(hsv_to_color([240.0, 1.0, 1.0]), 0xFF00_00FF);
        assert_eq!(hsv_to_color([360.0, 1.0, 1.0]), 0xFFFF_0000);
    }

    #[test]
    fn test_alpha_passthrough() {
        let c = hsv_to_color_with_alpha(0x80, [0.0, 0.0, 1.0]);
        assert_eq!(c, 0x80FF_FFFF);
    }

    #[test]
    fn test_round_trip_exact_bytes() {
        for &(r, g, b) in &[(12u32, 200u32, 99u32), (255, 128, 0), (1, 2, 3), (250, 250, 5)] {
            let hsv = rgb_to_hsv(r, g, b);
            let c = hsv_to_color(hsv);
            assert_eq!(argb::red(c), r, "red for {r},{g},{b}");
            assert_eq!(argb::green(c), g, "green for {r},{g},{b}");
            assert_eq!(argb::blue(c), b, "blue for {r},{g},{b}");
        }
    }
}
