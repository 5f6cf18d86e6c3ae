//! The color space union and the profile-free kinds.
//!
//! [`ColorSpace`] is a closed union over the four kinds of space this
//! engine knows about. Every kind maps its component tuples to and from
//! CIE XYZ, the connection space all conversions route through:
//!
//! - [`ColorSpace::Rgb`] - parametric RGB (primaries, white point,
//!   transfer curves); see [`RgbColorSpace`]
//! - [`ColorSpace::Xyz`] - XYZ itself, clamped to `[-2, 2]`
//! - [`ColorSpace::Lab`] - CIE L*a*b*, anchored at D50
//! - [`ColorSpace::OkLab`] - the OkLab perceptual space
//!
//! Conversions are pure: they take a value and return a new one.

use crate::oklab::OkLabColorSpace;
use crate::rgb::RgbColorSpace;
use chroma_core::{Error, MAX_ID, MIN_ID, Model, Result};
use chroma_math::{Adaptation, Vec3, chromatic_adaptation, compare, xy_y_to_xyz};
use chroma_math::{ILLUMINANT_D50_XYZ, white_point_to_xyz};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A color space: a mapping between component tuples and CIE XYZ.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpace {
    /// Parametric RGB space.
    Rgb(RgbColorSpace),
    /// The CIE XYZ connection space.
    Xyz(XyzColorSpace),
    /// CIE L*a*b*.
    Lab(LabColorSpace),
    /// OkLab.
    OkLab(OkLabColorSpace),
}

impl ColorSpace {
    /// The space's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Rgb(s) => &s.name,
            Self::Xyz(s) => &s.name,
            Self::Lab(s) => &s.name,
            Self::OkLab(s) => &s.name,
        }
    }

    /// The space's id: a registry slot in `[0, 63]`, or [`MIN_ID`] for
    /// ad-hoc spaces.
    pub fn id(&self) -> i32 {
        match self {
            Self::Rgb(s) => s.id,
            Self::Xyz(s) => s.id,
            Self::Lab(s) => s.id,
            Self::OkLab(s) => s.id,
        }
    }

    /// The component model of this space.
    pub fn model(&self) -> Model {
        match self {
            Self::Rgb(_) => Model::Rgb,
            Self::Xyz(_) => Model::Xyz,
            Self::Lab(_) | Self::OkLab(_) => Model::Lab,
        }
    }

    /// Number of chromatic components (excluding alpha).
    pub fn component_count(&self) -> usize {
        self.model().component_count()
    }

    /// True if the gamut covers more than the sRGB triangle, or the
    /// component range extends outside `[0, 1]`.
    pub fn is_wide_gamut(&self) -> bool {
        match self {
            Self::Rgb(s) => s.is_wide_gamut(),
            _ => true,
        }
    }

    /// True if this space behaves exactly like sRGB.
    pub fn is_srgb(&self) -> bool {
        match self {
            Self::Rgb(s) => s.is_srgb(),
            _ => false,
        }
    }

    /// Smallest valid value of the given component.
    pub fn min_value(&self, component: usize) -> f32 {
        match self {
            Self::Rgb(s) => s.min(),
            Self::Xyz(_) => -2.0,
            Self::Lab(_) => {
                if component == 0 {
                    0.0
                } else {
                    -128.0
                }
            }
            Self::OkLab(_) => {
                if component == 0 {
                    0.0
                } else {
                    -0.5
                }
            }
        }
    }

    /// Largest valid value of the given component.
    pub fn max_value(&self, component: usize) -> f32 {
        match self {
            Self::Rgb(s) => s.max(),
            Self::Xyz(_) => 2.0,
            Self::Lab(_) => {
                if component == 0 {
                    100.0
                } else {
                    128.0
                }
            }
            Self::OkLab(_) => {
                if component == 0 {
                    1.0
                } else {
                    0.5
                }
            }
        }
    }

    /// Converts a component tuple to XYZ.
    pub fn to_xyz(&self, v: Vec3) -> Vec3 {
        match self {
            Self::Rgb(s) => s.to_xyz(v),
            Self::Xyz(_) => v.clamp(-2.0, 2.0),
            Self::Lab(_) => lab_to_xyz(v),
            Self::OkLab(s) => s.to_xyz(v),
        }
    }

    /// Converts an XYZ tuple to this space's components.
    pub fn from_xyz(&self, v: Vec3) -> Vec3 {
        match self {
            Self::Rgb(s) => s.from_xyz(v),
            Self::Xyz(_) => v.clamp(-2.0, 2.0),
            Self::Lab(_) => lab_from_xyz(v),
            Self::OkLab(s) => s.from_xyz(v),
        }
    }

    /// The RGB payload, if this is an RGB space.
    pub fn as_rgb(&self) -> Option<&RgbColorSpace> {
        match self {
            Self::Rgb(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id={}, model={:?})",
            self.name(),
            self.id(),
            self.model()
        )
    }
}

// Equal spaces must hash equal; the kind-specific payloads only refine
// equality, so hashing the base fields is sufficient.
impl Hash for ColorSpace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.model().hash(state);
        self.id().hash(state);
    }
}

pub(crate) fn validate_base(name: &str, id: i32) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName);
    }
    if !(MIN_ID..=MAX_ID).contains(&id) {
        return Err(Error::invalid_id(id));
    }
    Ok(())
}

/// The CIE XYZ connection space, components clamped to `[-2, 2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct XyzColorSpace {
    pub(crate) name: String,
    pub(crate) id: i32,
}

impl XyzColorSpace {
    /// Creates an XYZ space with the given name and id.
    pub fn new(name: impl Into<String>, id: i32) -> Result<Self> {
        let name = name.into();
        validate_base(&name, id)?;
        Ok(Self { name, id })
    }
}

/// CIE L*a*b*, anchored at the D50 white point.
///
/// L is in `[0, 100]`, a and b in `[-128, 128]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabColorSpace {
    pub(crate) name: String,
    pub(crate) id: i32,
}

impl LabColorSpace {
    /// Creates a L*a*b* space with the given name and id.
    pub fn new(name: impl Into<String>, id: i32) -> Result<Self> {
        let name = name.into();
        validate_base(&name, id)?;
        Ok(Self { name, id })
    }
}

// CIE L*a*b* constants
const LAB_A: f32 = 216.0 / 24389.0;
const LAB_B: f32 = 841.0 / 108.0;
const LAB_C: f32 = 4.0 / 29.0;
const LAB_D: f32 = 6.0 / 29.0;

fn lab_to_xyz(v: Vec3) -> Vec3 {
    let l = v.x.clamp(0.0, 100.0);
    let a = v.y.clamp(-128.0, 128.0);
    let b = v.z.clamp(-128.0, 128.0);

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a * 0.002;
    let fz = fy - b * 0.005;
    let x = if fx > LAB_D {
        fx * fx * fx
    } else {
        (1.0 / LAB_B) * (fx - LAB_C)
    };
    let y = if fy > LAB_D {
        fy * fy * fy
    } else {
        (1.0 / LAB_B) * (fy - LAB_C)
    };
    let z = if fz > LAB_D {
        fz * fz * fz
    } else {
        (1.0 / LAB_B) * (fz - LAB_C)
    };

    Vec3::new(
        x * ILLUMINANT_D50_XYZ.x,
        y * ILLUMINANT_D50_XYZ.y,
        z * ILLUMINANT_D50_XYZ.z,
    )
}

fn lab_from_xyz(v: Vec3) -> Vec3 {
    let x = v.x / ILLUMINANT_D50_XYZ.x;
    let y = v.y / ILLUMINANT_D50_XYZ.y;
    let z = v.z / ILLUMINANT_D50_XYZ.z;

    let fx = if x > LAB_A { x.cbrt() } else { LAB_B * x + LAB_C };
    let fy = if y > LAB_A { y.cbrt() } else { LAB_B * y + LAB_C };
    let fz = if z > LAB_A { z.cbrt() } else { LAB_B * z + LAB_C };

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    Vec3::new(
        l.clamp(0.0, 100.0),
        a.clamp(-128.0, 128.0),
        b.clamp(-128.0, 128.0),
    )
}

/// Re-anchors an RGB color space to a new white point.
///
/// The returned space keeps the source's primaries, curves, and range,
/// but its RGB-to-XYZ transform is pre-composed with a chromatic
/// adaptation to the new white point. Non-RGB spaces and spaces whose
/// white point already matches are returned unchanged.
///
/// The result is an ad-hoc space (id = [`MIN_ID`]) and cannot be used
/// with the packed color encoding.
///
/// # Errors
///
/// [`Error::InvalidWhitePoint`] if `white_point` is not of length 2 or 3.
pub fn adapt(
    color_space: &ColorSpace,
    white_point: &[f32],
    adaptation: Adaptation,
) -> Result<ColorSpace> {
    let ColorSpace::Rgb(rgb) = color_space else {
        return Ok(color_space.clone());
    };
    let dst_xyz = white_point_to_xyz(white_point)?;
    if compare(&rgb.white_point(), white_point) {
        return Ok(color_space.clone());
    }

    let adaptation_transform = chromatic_adaptation(
        adaptation.matrix(),
        xy_y_to_xyz(rgb.white_point()),
        dst_xyz,
    );
    let transform = adaptation_transform * rgb.transform();
    Ok(ColorSpace::Rgb(rgb.adapted(transform, white_point)))
}

/// Returns a copy of the space re-anchored to the D50 connection white
/// point, or a plain clone for non-RGB and already-D50 spaces.
pub(crate) fn adapt_to_d50(space: &ColorSpace) -> ColorSpace {
    use chroma_math::ILLUMINANT_D50;
    match space {
        ColorSpace::Rgb(rgb) if !compare(&rgb.white_point(), &ILLUMINANT_D50) => {
            let adaptation_transform = chromatic_adaptation(
                Adaptation::Bradford.matrix(),
                xy_y_to_xyz(rgb.white_point()),
                ILLUMINANT_D50_XYZ,
            );
            let transform = adaptation_transform * rgb.transform();
            ColorSpace::Rgb(rgb.adapted(transform, &ILLUMINANT_D50))
        }
        _ => space.clone(),
    }
}

/// Pre-adapts an RGB space's transform to the D50 connection white
/// point. Returns the transform unchanged when the space is already
/// D50-anchored.
pub(crate) fn adapt_to_illuminant_d50(
    orig_white_point: [f32; 2],
    orig_transform: chroma_math::Mat3,
) -> chroma_math::Mat3 {
    use chroma_math::ILLUMINANT_D50;
    if compare(&orig_white_point, &ILLUMINANT_D50) {
        return orig_transform;
    }
    let adaptation_transform = chromatic_adaptation(
        Adaptation::Bradford.matrix(),
        xy_y_to_xyz(orig_white_point),
        xy_y_to_xyz(ILLUMINANT_D50),
    );
    adaptation_transform * orig_transform
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use chroma_core::Named;

    #[test]
    fn test_xyz_space_clamps() {
        let xyz = registry::get(Named::CieXyz);
        let out = xyz.to_xyz(Vec3::new(-3.0, 0.5, 5.0));
        assert_eq!(out, Vec3::new(-2.0, 0.5, 2.0));
        assert_eq!(xyz.model(), Model::Xyz);
        assert!(xyz.is_wide_gamut());
    }

    #[test]
    fn test_lab_white_point_roundtrip() {
        // L*=100, a*=b*=0 is the D50 white
        let white = lab_to_xyz(Vec3::new(100.0, 0.0, 0.0));
        assert!((white.x - ILLUMINANT_D50_XYZ.x).abs() < 1e-4);
        assert!((white.y - 1.0).abs() < 1e-4);
        assert!((white.z - ILLUMINANT_D50_XYZ.z).abs() < 1e-4);

        let back = lab_from_xyz(white);
        assert!((back.x - 100.0).abs() < 1e-3);
        assert!(back.y.abs() < 1e-2);
        assert!(back.z.abs() < 1e-2);
    }

    #[test]
    fn test_lab_component_ranges() {
        let lab = registry::get(Named::CieLab);
        assert_eq!(lab.min_value(0), 0.0);
        assert_eq!(lab.max_value(0), 100.0);
        assert_eq!(lab.min_value(1), -128.0);
        assert_eq!(lab.max_value(2), 128.0);
    }

    #[test]
    fn test_adapt_noop_for_matching_white_point() {
        use chroma_math::ILLUMINANT_D65;
        let srgb = registry::get(Named::Srgb);
        let adapted = adapt(srgb, &ILLUMINANT_D65, Adaptation::Bradford).unwrap();
        assert_eq!(&adapted, srgb);
    }

    #[test]
    fn test_adapt_noop_for_non_rgb() {
        use chroma_math::ILLUMINANT_D65;
        let lab = registry::get(Named::CieLab);
        let adapted = adapt(lab, &ILLUMINANT_D65, Adaptation::Bradford).unwrap();
        assert_eq!(&adapted, lab);
    }

    #[test]
    fn test_adapt_produces_ad_hoc_space() {
        use chroma_math::ILLUMINANT_D50;
        let srgb = registry::get(Named::Srgb);
        let adapted = adapt(srgb, &ILLUMINANT_D50, Adaptation::Bradford).unwrap();
        assert_eq!(adapted.id(), MIN_ID);
        assert_eq!(adapted.name(), srgb.name());
        // White maps to the D50 white once adapted
        let rgb = adapted.as_rgb().unwrap();
        let white = rgb.transform() * Vec3::ONE;
        assert!((white.x - ILLUMINANT_D50_XYZ.x).abs() < 1e-3);
        assert!((white.z - ILLUMINANT_D50_XYZ.z).abs() < 1e-3);
    }

    #[test]
    fn test_display_format() {
        let srgb = registry::get(Named::Srgb);
        assert_eq!(srgb.to_string(), "sRGB IEC61966-2.1 (id=0, model=Rgb)");
    }

    #[test]
    fn test_invalid_name_and_id() {
        assert!(matches!(
            XyzColorSpace::new("", 5),
            Err(Error::InvalidName)
        ));
        assert!(LabColorSpace::new("L", 64).is_err());
    }
}
