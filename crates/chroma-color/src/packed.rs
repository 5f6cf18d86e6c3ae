//! 64-bit packed color codec.
//!
//! A packed color stores a color value together with the id of its color
//! space in a single `u64`. Two layouts share the low 6 id bits:
//!
//! - **sRGB** (id 0): the 8-bit ARGB int shifted into the high 32 bits,
//!   so `pack_argb(argb) >> 32 == argb` and the low half is zero.
//! - **Everything else**: half-precision red, green and blue in bits
//!   63..16, a 10-bit alpha in bits 15..6, and the 6-bit color space id
//!   in bits 5..0.
//!
//! ```text
//! 63            48 47            32 31            16 15       6 5    0
//! +---------------+----------------+----------------+----------+------+
//! |    red f16    |   green f16    |    blue f16    | alpha 10 |  id  |
//! +---------------+----------------+----------------+----------+------+
//! ```
//!
//! Only registered color spaces can be packed: the encoding has no room
//! for primaries or curves, just the id to look them up again.

use chroma_core::{Error, Result};
use chroma_math::Vec3;
use chroma_space::connector::{Connector, connect, connect_to_srgb};
use chroma_space::{ColorSpace, registry};
use half::f16;

const ID_MASK: u64 = 0x3F;

/// Packs an 8-bit ARGB color int into the sRGB packed layout.
#[inline]
pub fn pack_argb(color: u32) -> u64 {
    u64::from(color) << 32
}

/// Packs four `[0, 1]` sRGB components.
///
/// Infallible since sRGB always takes the 8-bit fast path.
#[inline]
pub fn pack_srgb(red: f32, green: f32, blue: f32, alpha: f32) -> u64 {
    pack_argb(crate::argb::argb_from_floats(alpha, red, green, blue))
}

/// Packs a color value expressed in `color_space`.
///
/// sRGB colors quantize to 8 bits per channel; every other space stores
/// red, green and blue as half floats with a 10-bit alpha.
///
/// # Errors
///
/// - [`Error::UnregisteredColorSpace`] if the space carries the ad-hoc
///   id and was not returned by the registry
/// - [`Error::TooManyComponents`] if the color model needs more than 3
///   chromatic components
pub fn pack(red: f32, green: f32, blue: f32, alpha: f32, color_space: &ColorSpace) -> Result<u64> {
    if color_space.is_srgb() {
        return Ok(pack_srgb(red, green, blue, alpha));
    }

    let id = color_space.id();
    if id == chroma_core::MIN_ID {
        return Err(Error::UnregisteredColorSpace);
    }
    let count = color_space.component_count();
    if count > 3 {
        return Err(Error::TooManyComponents { count });
    }

    let r = u64::from(f16::from_f32(red).to_bits());
    let g = u64::from(f16::from_f32(green).to_bits());
    let b = u64::from(f16::from_f32(blue).to_bits());
    let a = (alpha.clamp(0.0, 1.0) * 1023.0 + 0.5) as u64;

    Ok((r << 48) | (g << 32) | (b << 16) | ((a & 0x3FF) << 6) | (id as u64 & ID_MASK))
}

/// Returns the registered color space a packed color is encoded in.
///
/// # Errors
///
/// [`Error::UnknownId`] if the id bits do not name a registered space.
#[inline]
pub fn color_space_of(color: u64) -> Result<&'static ColorSpace> {
    registry::get_by_id((color & ID_MASK) as i32)
}

/// Extracts the red component of a packed color.
#[inline]
pub fn red(color: u64) -> f32 {
    if color & ID_MASK == 0 {
        ((color >> 48) & 0xFF) as f32 / 255.0
    } else {
        f16::from_bits(((color >> 48) & 0xFFFF) as u16).to_f32()
    }
}

/// Extracts the green component of a packed color.
#[inline]
pub fn green(color: u64) -> f32 {
    if color & ID_MASK == 0 {
        ((color >> 40) & 0xFF) as f32 / 255.0
    } else {
        f16::from_bits(((color >> 32) & 0xFFFF) as u16).to_f32()
    }
}

/// Extracts the blue component of a packed color.
#[inline]
pub fn blue(color: u64) -> f32 {
    if color & ID_MASK == 0 {
        ((color >> 32) & 0xFF) as f32 / 255.0
    } else {
        f16::from_bits(((color >> 16) & 0xFFFF) as u16).to_f32()
    }
}

/// Extracts the alpha component of a packed color, in `[0, 1]`.
#[inline]
pub fn alpha(color: u64) -> f32 {
    if color & ID_MASK == 0 {
        ((color >> 56) & 0xFF) as f32 / 255.0
    } else {
        ((color >> 6) & 0x3FF) as f32 / 1023.0
    }
}

/// Returns `true` if the packed color is encoded in sRGB.
///
/// # Errors
///
/// [`Error::UnknownId`] if the id bits do not name a registered space.
pub fn is_srgb(color: u64) -> Result<bool> {
    Ok(color_space_of(color)?.is_srgb())
}

/// Returns `true` if the packed color is encoded in a wide-gamut space.
///
/// # Errors
///
/// [`Error::UnknownId`] if the id bits do not name a registered space.
pub fn is_wide_gamut(color: u64) -> Result<bool> {
    Ok(color_space_of(color)?.is_wide_gamut())
}

/// Returns `true` if the packed color's id matches `color_space`.
#[inline]
pub fn is_in_color_space(color: u64, color_space: &ColorSpace) -> bool {
    (color & ID_MASK) as i32 == color_space.id()
}

/// Converts a packed color to an 8-bit ARGB color int.
///
/// Non-sRGB colors are routed through a connector to sRGB first; the
/// destination OETF saturates the result to `[0, 1]`.
///
/// # Errors
///
/// [`Error::UnknownId`] if the id bits do not name a registered space.
pub fn to_argb(color: u64) -> Result<u32> {
    if color & ID_MASK == 0 {
        return Ok((color >> 32) as u32);
    }

    let source = color_space_of(color)?;
    let connector = connect_to_srgb(source, chroma_core::RenderIntent::Perceptual);
    let c = connector.transform(Vec3::new(red(color), green(color), blue(color)));

    Ok(crate::argb::argb_from_floats(alpha(color), c.x, c.y, c.z))
}

/// Converts an 8-bit ARGB color int into `destination`, packed.
///
/// # Errors
///
/// Propagates [`pack`] failures for the destination space.
pub fn convert_argb(color: u32, destination: &ColorSpace) -> Result<u64> {
    let r = crate::argb::red(color) as f32 / 255.0;
    let g = crate::argb::green(color) as f32 / 255.0;
    let b = crate::argb::blue(color) as f32 / 255.0;
    let a = crate::argb::alpha(color) as f32 / 255.0;
    let source = registry::get(chroma_core::Named::Srgb);
    convert_components(r, g, b, a, source, destination)
}

/// Converts a packed color into `destination`, packed.
///
/// # Errors
///
/// [`Error::UnknownId`] for an unrecognized source id, plus [`pack`]
/// failures for the destination space.
pub fn convert(color: u64, destination: &ColorSpace) -> Result<u64> {
    let source = color_space_of(color)?;
    convert_components(
        red(color),
        green(color),
        blue(color),
        alpha(color),
        source,
        destination,
    )
}

/// Converts raw components from `source` into `destination`, packed.
///
/// # Errors
///
/// Propagates [`pack`] failures for the destination space.
pub fn convert_components(
    r: f32,
    g: f32,
    b: f32,
    a: f32,
    source: &ColorSpace,
    destination: &ColorSpace,
) -> Result<u64> {
    let connector = connect(source, destination, chroma_core::RenderIntent::Perceptual);
    convert_components_with(r, g, b, a, &connector)
}

/// Converts a packed color through a prebuilt connector, packed into the
/// connector's destination.
///
/// Useful when converting many colors between the same pair of spaces.
///
/// # Errors
///
/// Propagates [`pack`] failures for the destination space.
pub fn convert_with(color: u64, connector: &Connector) -> Result<u64> {
    convert_components_with(
        red(color),
        green(color),
        blue(color),
        alpha(color),
        connector,
    )
}

/// Converts raw components through a prebuilt connector.
///
/// # Errors
///
/// Propagates [`pack`] failures for the destination space.
pub fn convert_components_with(r: f32, g: f32, b: f32, a: f32, connector: &Connector) -> Result<u64> {
    let c = connector.transform(Vec3::new(r, g, b));
    pack(c.x, c.y, c.z, a, connector.destination())
}

/// Returns the relative luminance of a packed color.
///
/// The components are decoded through the space's EOTF and weighted
/// with the BT.709 luminance coefficients, then saturated to `[0, 1]`.
///
/// # Errors
///
/// - [`Error::UnknownId`] for an unrecognized id
/// - [`Error::NonRgbModel`] if the space is not RGB
pub fn luminance(color: u64) -> Result<f32> {
    let color_space = color_space_of(color)?;
    let Some(rgb) = color_space.as_rgb() else {
        return Err(Error::NonRgbModel {
            model: color_space.model(),
        });
    };
    let r = rgb.eotf(f64::from(red(color)));
    let g = rgb.eotf(f64::from(green(color)));
    let b = rgb.eotf(f64::from(blue(color)));
    Ok(((0.2126 * r + 0.7152 * g + 0.0722 * b) as f32).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chroma_core::{Model, Named};

    #[test]
    fn test_srgb_fast_path_layout() {
        let packed = pack_argb(0x8040_2010);
        assert_eq!(packed, 0x8040_2010_0000_0000);
        assert_eq!(packed & ID_MASK, 0);
        assert_eq!(to_argb(packed).unwrap(), 0x8040_2010);
    }

    #[test]
    fn test_srgb_components_quantized() {
        let srgb = registry::get(Named::Srgb);
        let packed = pack(0.5, 0.25, 0.75, 1.0, srgb).unwrap();
        // 8-bit quantization, not half floats
        assert_relative_eq!(red(packed), 128.0 / 255.0, epsilon = 1e-6);
        assert_relative_eq!(green(packed), 64.0 / 255.0, epsilon = 1e-6);
        assert_relative_eq!(blue(packed), 191.0 / 255.0, epsilon = 1e-6);
        assert_relative_eq!(alpha(packed), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wide_layout_preserves_half_precision() {
        let p3 = registry::get(Named::DisplayP3);
        let packed = pack(1.25, -0.5, 0.0625, 0.5, p3).unwrap();
        assert_eq!((packed & ID_MASK) as i32, p3.id());
        // Exactly representable in f16
        assert_eq!(red(packed), 1.25);
        assert_eq!(green(packed), -0.5);
        assert_eq!(blue(packed), 0.0625);
        assert_relative_eq!(alpha(packed), 0.5, epsilon = 1.0 / 1023.0);
    }

    #[test]
    fn test_pack_rejects_ad_hoc_space() {
        let p3 = registry::get(Named::DisplayP3);
        let adapted = chroma_space::adapt(
            p3,
            &chroma_math::ILLUMINANT_D50,
            chroma_math::Adaptation::Bradford,
        )
        .unwrap();
        let err = pack(0.0, 0.0, 0.0, 1.0, &adapted).unwrap_err();
        assert!(matches!(err, Error::UnregisteredColorSpace));
    }

    #[test]
    fn test_color_space_of_unknown_id() {
        // id 40 is never registered
        let err = color_space_of(40).unwrap_err();
        assert!(matches!(err, Error::UnknownId { id: 40 }));
    }

    #[test]
    fn test_is_in_color_space() {
        let p3 = registry::get(Named::DisplayP3);
        let packed = pack(0.1, 0.2, 0.3, 1.0, p3).unwrap();
        assert!(is_in_color_space(packed, p3));
        assert!(!is_in_color_space(packed, registry::get(Named::Srgb)));
    }

    #[test]
    fn test_wide_gamut_classification() {
        let p3 = registry::get(Named::DisplayP3);
        let packed = pack(0.0, 0.0, 0.0, 1.0, p3).unwrap();
        assert!(is_wide_gamut(packed).unwrap());
        assert!(!is_srgb(packed).unwrap());
        assert!(is_srgb(pack_argb(0xFF00_0000)).unwrap());
    }

    #[test]
    fn test_convert_identity_is_lossless() {
        let srgb = registry::get(Named::Srgb);
        let packed = pack_argb(0xFF12_3456);
        assert_eq!(convert(packed, srgb).unwrap(), packed);
    }

    #[test]
    fn test_luminance_non_rgb_rejected() {
        let xyz = registry::get(Named::CieXyz);
        let packed = pack(0.5, 0.5, 0.5, 1.0, xyz).unwrap();
        let err = luminance(packed).unwrap_err();
        assert!(matches!(err, Error::NonRgbModel { model: Model::Xyz }));
    }

    #[test]
    fn test_luminance_white() {
        let packed = pack_argb(0xFFFF_FFFF);
        assert_relative_eq!(luminance(packed).unwrap(), 1.0, epsilon = 1e-5);
    }
}
