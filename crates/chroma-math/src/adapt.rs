//! Chromatic adaptation transforms and standard illuminants.
//!
//! When two color spaces disagree on what "white" is, converting between
//! them requires re-anchoring tristimulus values from one illuminant to
//! the other. This module provides the Von Kries-style adaptation algebra
//! (transform to a cone response space, scale, transform back) together
//! with the standard illuminant chromaticities used by the registry.
//!
//! # Supported Methods
//!
//! - [`Adaptation::Bradford`] - Best overall accuracy (default choice)
//! - [`Adaptation::VonKries`] - Classic cone response model
//! - [`Adaptation::CieCat02`] - From the CIECAM02 appearance model
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Adaptation, adaptation_matrix, xy_y_to_xyz};
//! use chroma_math::{ILLUMINANT_D65, ILLUMINANT_D50};
//!
//! let d65_to_d50 = adaptation_matrix(
//!     Adaptation::Bradford,
//!     &ILLUMINANT_D65,
//!     &ILLUMINANT_D50,
//! ).unwrap();
//!
//! let result = d65_to_d50 * xy_y_to_xyz(ILLUMINANT_D65);
//! ```

use crate::{Mat3, Vec3};
use chroma_core::{Error, Result};

// ============================================================================
// Standard Illuminants (xy chromaticities)
// ============================================================================

/// CIE standard illuminant A (tungsten, ~2856K).
pub const ILLUMINANT_A: [f32; 2] = [0.44757, 0.40745];

/// CIE standard illuminant B (direct sunlight, ~4874K).
pub const ILLUMINANT_B: [f32; 2] = [0.34842, 0.35161];

/// CIE standard illuminant C (average daylight, ~6774K).
///
/// Reference white of NTSC 1953.
pub const ILLUMINANT_C: [f32; 2] = [0.31006, 0.31616];

/// CIE standard illuminant D50 (horizon light, ~5003K).
///
/// The profile connection space anchor: all cross-model conversions in
/// this workspace meet at D50.
pub const ILLUMINANT_D50: [f32; 2] = [0.34567, 0.35850];

/// CIE standard illuminant D55 (mid-morning daylight, ~5503K).
pub const ILLUMINANT_D55: [f32; 2] = [0.33242, 0.34743];

/// CIE standard illuminant D60 (~6004K), used by ACES.
pub const ILLUMINANT_D60: [f32; 2] = [0.32168, 0.33767];

/// CIE standard illuminant D65 (noon daylight, ~6504K).
///
/// Reference white of sRGB, BT.709, and BT.2020.
pub const ILLUMINANT_D65: [f32; 2] = [0.31271, 0.32902];

/// CIE standard illuminant D75 (north sky daylight, ~7504K).
pub const ILLUMINANT_D75: [f32; 2] = [0.29902, 0.31485];

/// CIE standard illuminant E (equal energy).
pub const ILLUMINANT_E: [f32; 2] = [0.33333, 0.33333];

/// D50 white point as XYZ tristimulus (Y = 1).
pub const ILLUMINANT_D50_XYZ: Vec3 = Vec3::new(0.964212, 1.0, 0.825188);

// ============================================================================
// Adaptation methods
// ============================================================================

/// Chromatic adaptation method.
///
/// Each method is a matrix transforming XYZ into a cone response space
/// where a Von Kries diagonal scale models the visual system's adaptation
/// between illuminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adaptation {
    /// Bradford transform (Lam 1985). Generally the most accurate.
    #[default]
    Bradford,
    /// Von Kries transform over Hunt-Pointer-Estevez cone responses.
    VonKries,
    /// CAT02 transform from the CIECAM02 appearance model.
    CieCat02,
}

impl Adaptation {
    /// The XYZ-to-cone-response matrix of this method.
    pub const fn matrix(self) -> Mat3 {
        match self {
            Adaptation::Bradford => Mat3::from_rows([
                [0.8951, 0.2664, -0.1614],
                [-0.7502, 1.7135, 0.0367],
                [0.0389, -0.0685, 1.0296],
            ]),
            Adaptation::VonKries => Mat3::from_rows([
                [0.40024, 0.70760, -0.08081],
                [-0.22630, 1.16532, 0.04570],
                [0.00000, 0.00000, 0.91822],
            ]),
            Adaptation::CieCat02 => Mat3::from_rows([
                [0.7328, 0.4296, -0.1624],
                [-0.7036, 1.6975, 0.0061],
                [0.0030, 0.0136, 0.9834],
            ]),
        }
    }
}

// ============================================================================
// Conversions and adaptation algebra
// ============================================================================

/// Converts an xy chromaticity to XYZ tristimulus with Y = 1.
#[inline]
pub fn xy_y_to_xyz(xy: [f32; 2]) -> Vec3 {
    Vec3::new(xy[0] / xy[1], 1.0, (1.0 - xy[0] - xy[1]) / xy[1])
}

/// Compares two float sequences within a 1e-3 absolute tolerance.
///
/// This is the tolerance used throughout the workspace for white point
/// and primaries matching (bit-equal values always compare equal).
pub fn compare(a: &[f32], b: &[f32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b)
        .all(|(x, y)| x.to_bits() == y.to_bits() || (x - y).abs() <= 1e-3)
}

/// Computes a chromatic adaptation matrix between two XYZ white points.
///
/// The white points are transformed into the method's cone response
/// space, the per-channel response ratio forms a diagonal scale, and the
/// result is brought back to XYZ:
///
/// ```text
/// M⁻¹ · diag(dst_cone / src_cone) · M
/// ```
pub fn chromatic_adaptation(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let src_cone = method * src_white;
    let dst_cone = method * dst_white;
    method.inverse() * method.scaled_rows(dst_cone / src_cone)
}

/// Computes a chromatic adaptation matrix between two white points given
/// as xy chromaticity (2 floats) or XYZ tristimulus (3 floats).
///
/// Returns the identity when the white points compare equal within the
/// standard tolerance.
///
/// # Errors
///
/// [`Error::InvalidWhitePoint`] if either array is not of length 2 or 3.
pub fn adaptation_matrix(
    adaptation: Adaptation,
    src_white_point: &[f32],
    dst_white_point: &[f32],
) -> Result<Mat3> {
    let src = white_point_to_xyz(src_white_point)?;
    let dst = white_point_to_xyz(dst_white_point)?;

    if compare(&src.to_array(), &dst.to_array()) {
        return Ok(Mat3::IDENTITY);
    }
    Ok(chromatic_adaptation(adaptation.matrix(), src, dst))
}

/// Canonicalizes a white point given as xy (2 floats) or XYZ (3 floats)
/// into XYZ tristimulus.
///
/// # Errors
///
/// [`Error::InvalidWhitePoint`] for any other length.
pub fn white_point_to_xyz(white_point: &[f32]) -> Result<Vec3> {
    match white_point {
        [x, y] => Ok(xy_y_to_xyz([*x, *y])),
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(Error::InvalidWhitePoint {
            len: white_point.len(),
        }),
    }
}

/// Computes the XYZ tristimulus of a black-body radiator at the given
/// correlated color temperature, using the two-branch cubic chromaticity
/// fit.
///
/// # Errors
///
/// [`Error::InvalidTemperature`] if `cct < 1`.
pub fn cct_to_xyz(cct: i32) -> Result<Vec3> {
    if cct < 1 {
        return Err(Error::InvalidTemperature { cct });
    }

    let icct = 1e3 / cct as f32;
    let icct2 = icct * icct;
    let x = if cct as f32 <= 4000.0 {
        0.179910 + 0.8776956 * icct - 0.2343589 * icct2 - 0.2661239 * icct2 * icct
    } else {
        0.240390 + 0.2226347 * icct + 2.1070379 * icct2 - 3.0258469 * icct2 * icct
    };

    let x2 = x * x;
    let y = if cct as f32 <= 2222.0 {
        -0.20219683 + 2.18555832 * x - 1.34811020 * x2 - 1.1063814 * x2 * x
    } else if cct as f32 <= 4000.0 {
        -0.16748867 + 2.09137015 * x - 1.37418593 * x2 - 0.9549476 * x2 * x
    } else {
        -0.37001483 + 3.75112997 * x - 5.8733867 * x2 + 3.0817580 * x2 * x
    };

    Ok(xy_y_to_xyz([x, y]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_to_d50_maps_white() {
        let d65 = xy_y_to_xyz(ILLUMINANT_D65);
        let m = chromatic_adaptation(Adaptation::Bradford.matrix(), d65, ILLUMINANT_D50_XYZ);
        let result = m * d65;
        assert!((result.x - ILLUMINANT_D50_XYZ.x).abs() < 1e-3);
        assert!((result.y - ILLUMINANT_D50_XYZ.y).abs() < 1e-3);
        assert!((result.z - ILLUMINANT_D50_XYZ.z).abs() < 1e-3);
    }

    #[test]
    fn test_adaptation_roundtrip() {
        let d65 = xy_y_to_xyz(ILLUMINANT_D65);
        let there = chromatic_adaptation(Adaptation::Bradford.matrix(), d65, ILLUMINANT_D50_XYZ);
        let back = chromatic_adaptation(Adaptation::Bradford.matrix(), ILLUMINANT_D50_XYZ, d65);
        let roundtrip = back * there;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (roundtrip.m[i][j] - expected).abs() < 1e-3,
                    "roundtrip[{}][{}] = {}",
                    i,
                    j,
                    roundtrip.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_same_white_point_is_identity() {
        let m = adaptation_matrix(Adaptation::Bradford, &ILLUMINANT_D65, &ILLUMINANT_D65).unwrap();
        assert_eq!(m, Mat3::IDENTITY);
    }

    #[test]
    fn test_mixed_length_white_points() {
        // xy on one side, XYZ on the other
        let m = adaptation_matrix(
            Adaptation::Bradford,
            &ILLUMINANT_D65,
            &ILLUMINANT_D50_XYZ.to_array(),
        )
        .unwrap();
        assert!(m.is_finite());
        assert_ne!(m, Mat3::IDENTITY);
    }

    #[test]
    fn test_bad_white_point_length() {
        let err = adaptation_matrix(Adaptation::Bradford, &[0.3], &ILLUMINANT_D65);
        assert!(err.is_err());
    }

    #[test]
    fn test_cct_rejects_non_positive() {
        assert!(cct_to_xyz(0).is_err());
        assert!(cct_to_xyz(-100).is_err());
    }

    #[test]
    fn test_cct_near_d65() {
        // 6504K should land close to the D65 chromaticity
        let xyz = cct_to_xyz(6504).unwrap();
        let sum = xyz.x + xyz.y + xyz.z;
        let x = xyz.x / sum;
        let y = xyz.y / sum;
        assert!((x - ILLUMINANT_D65[0]).abs() < 5e-3, "x = {}", x);
        assert!((y - ILLUMINANT_D65[1]).abs() < 5e-3, "y = {}", y);
    }

    #[test]
    fn test_compare_tolerance() {
        assert!(compare(&[0.5, 0.5], &[0.5005, 0.4995]));
        assert!(!compare(&[0.5, 0.5], &[0.502, 0.5]));
        assert!(!compare(&[0.5], &[0.5, 0.5]));
    }
}
