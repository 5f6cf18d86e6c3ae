//! End-to-end validation of the color facade and packed codec.
//!
//! Walks colors through parse -> Color -> convert -> pack -> unpack
//! pipelines and checks the encodings agree with each other.

use approx::assert_relative_eq;
use chroma_color::{Color, packed, parse_color};
use chroma_core::Named;
use chroma_space::registry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_parse_to_packed_srgb_is_exact() {
    for s in ["#123456", "#80abcdef", "silver", "DarkGray"] {
        let argb = parse_color(s).unwrap();
        let packed = packed::pack_argb(argb);
        assert_eq!(packed::to_argb(packed).unwrap(), argb, "for {s}");
        assert!(packed::is_srgb(packed).unwrap());
    }
}

#[test]
fn test_srgb_pack_quantizes_like_argb() {
    // The float path and the int path meet at the same 8-bit lattice.
    let mut rng = StdRng::seed_from_u64(21);
    let srgb = registry::get(Named::Srgb);
    for _ in 0..1000 {
        let (r, g, b, a) = (
            rng.gen_range(0.0f32..1.0),
            rng.gen_range(0.0f32..1.0),
            rng.gen_range(0.0f32..1.0),
            rng.gen_range(0.0f32..1.0),
        );
        let via_pack = packed::pack(r, g, b, a, srgb).unwrap();
        let via_color = Color::new(r, g, b, a).pack().unwrap();
        assert_eq!(via_pack, via_color);
        assert_eq!(via_pack & 0x3F, 0);
    }
}

#[test]
fn test_packed_round_trip_all_rgb_spaces() {
    let spaces = [
        Named::LinearSrgb,
        Named::Bt709,
        Named::Bt2020,
        Named::DciP3,
        Named::DisplayP3,
        Named::AdobeRgb,
        Named::ProPhotoRgb,
        Named::AcesCg,
    ];
    let mut rng = StdRng::seed_from_u64(17);
    for name in spaces {
        let space = registry::get(name);
        for _ in 0..250 {
            let (r, g, b) = (
                rng.gen_range(0.0f32..1.0),
                rng.gen_range(0.0f32..1.0),
                rng.gen_range(0.0f32..1.0),
            );
            let encoded = packed::pack(r, g, b, 1.0, space).unwrap();
            // Half floats carry ~3 decimal digits
            assert_relative_eq!(packed::red(encoded), r, epsilon = 1e-3, max_relative = 1e-3);
            assert_relative_eq!(packed::green(encoded), g, epsilon = 1e-3, max_relative = 1e-3);
            assert_relative_eq!(packed::blue(encoded), b, epsilon = 1e-3, max_relative = 1e-3);
            assert!(packed::is_in_color_space(encoded, space));

            // Re-packing the decoded color is idempotent
            let decoded = Color::from_packed(encoded).unwrap();
            assert_eq!(decoded.pack().unwrap(), encoded);
        }
    }
}

#[test]
fn test_convert_between_packed_spaces() {
    let srgb = registry::get(Named::Srgb);
    let p3 = registry::get(Named::DisplayP3);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let argb = rng.r#gen::<u32>() | 0xFF00_0000;
        let wide = packed::convert_argb(argb, p3).unwrap();
        assert!(packed::is_in_color_space(wide, p3));
        let back = packed::convert(wide, srgb).unwrap();
        // Through half-float storage each 8-bit channel survives
        assert_eq!(packed::to_argb(back).unwrap(), argb);
    }
}

#[test]
fn test_color_convert_matches_packed_convert() {
    let p3 = registry::get(Named::DisplayP3);
    let color = Color::new(0.9, 0.3, 0.1, 1.0);
    let converted = color.convert(p3);

    let direct = packed::convert_argb(color.to_argb(), p3).unwrap();
    assert_relative_eq!(
        packed::red(direct),
        converted.red(),
        epsilon = 5e-3,
        max_relative = 5e-3
    );
    assert_relative_eq!(
        packed::green(direct),
        converted.green(),
        epsilon = 5e-3,
        max_relative = 5e-3
    );
    assert_relative_eq!(
        packed::blue(direct),
        converted.blue(),
        epsilon = 5e-3,
        max_relative = 5e-3
    );
}

#[test]
fn test_luminance_agrees_across_encodings() {
    let argb = 0xFF40_A0C0;
    let int_lum = chroma_color::argb::luminance(argb);
    let color_lum = Color::from_argb(argb).luminance().unwrap();
    let packed_lum = packed::luminance(packed::pack_argb(argb)).unwrap();
    assert_relative_eq!(int_lum, color_lum, epsilon = 1e-5);
    assert_relative_eq!(color_lum, packed_lum, epsilon = 1e-5);
}

#[test]
fn test_wide_gamut_flags() {
    let p3 = Color::new(1.0, 0.0, 0.0, 1.0).convert(registry::get(Named::DisplayP3));
    assert!(p3.is_wide_gamut());
    assert!(!p3.is_srgb());

    let linear = Color::new(1.0, 0.0, 0.0, 1.0).convert(registry::get(Named::LinearSrgb));
    assert!(!linear.is_wide_gamut());
    assert!(!linear.is_srgb());
}

#[test]
fn test_extended_srgb_preserves_out_of_gamut() {
    // P3 red leaves the sRGB gamut but fits in extended sRGB
    let scrgb = registry::get(Named::ExtendedSrgb);
    let p3_red = Color::in_space(1.0, 0.0, 0.0, 1.0, registry::get(Named::DisplayP3)).unwrap();
    let extended = p3_red.convert(scrgb);
    assert!(extended.red() > 1.0 || extended.green() < 0.0 || extended.blue() < 0.0);

    let back = extended.convert(registry::get(Named::DisplayP3));
    assert_relative_eq!(back.red(), 1.0, epsilon = 1e-3);
    assert_relative_eq!(back.green(), 0.0, epsilon = 1e-3);
    assert_relative_eq!(back.blue(), 0.0, epsilon = 1e-3);
}
