//! The OkLab perceptual color space.
//!
//! OkLab maps XYZ through an LMS-like cone matrix, a cube root, and a
//! final mixing matrix. The published cone matrix expects D65-relative
//! XYZ, while this engine connects spaces at D50, so the first matrix
//! is pre-composed with a Bradford adaptation from D50 to D65.
//!
//! # Reference
//!
//! Björn Ottosson, "A perceptual color space for image processing".

use crate::space::validate_base;
use chroma_core::Result;
use chroma_math::{
    Adaptation, ILLUMINANT_D50, ILLUMINANT_D65, Mat3, Vec3, chromatic_adaptation, xy_y_to_xyz,
};

// XYZ (D65) to LMS cone responses
const M1_TMP: Mat3 = Mat3::from_cols([
    [0.8189330101, 0.0329845436, 0.0482003018],
    [0.3618667424, 0.9293118715, 0.2643662691],
    [-0.1288597137, 0.0361456387, 0.6338517070],
]);

// Nonlinear cone responses to Lab coordinates
const M2: Mat3 = Mat3::from_cols([
    [0.2104542553, 1.9779984951, 0.0259040371],
    [0.7936177850, -2.4285922050, 0.7827717662],
    [-0.0040720468, 0.4505937099, -0.8086757660],
]);

/// The OkLab color space: L in `[0, 1]`, a and b in `[-0.5, 0.5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OkLabColorSpace {
    pub(crate) name: String,
    pub(crate) id: i32,
    m1: Mat3,
    m2: Mat3,
    inverse_m1: Mat3,
    inverse_m2: Mat3,
}

impl OkLabColorSpace {
    /// Creates an OkLab space with the given name and id.
    pub fn new(name: impl Into<String>, id: i32) -> Result<Self> {
        let name = name.into();
        validate_base(&name, id)?;

        let d50_to_d65 = chromatic_adaptation(
            Adaptation::Bradford.matrix(),
            xy_y_to_xyz(ILLUMINANT_D50),
            xy_y_to_xyz(ILLUMINANT_D65),
        );
        let m1 = M1_TMP * d50_to_d65;

        Ok(Self {
            name,
            id,
            m1,
            m2: M2,
            inverse_m1: m1.inverse(),
            inverse_m2: M2.inverse(),
        })
    }

    /// Converts Lab coordinates to D50 XYZ.
    pub fn to_xyz(&self, v: Vec3) -> Vec3 {
        let v = Vec3::new(
            v.x.clamp(0.0, 1.0),
            v.y.clamp(-0.5, 0.5),
            v.z.clamp(-0.5, 0.5),
        );
        let lms = self.inverse_m2 * v;
        self.inverse_m1 * (lms * lms * lms)
    }

    /// Converts D50 XYZ to Lab coordinates.
    pub fn from_xyz(&self, v: Vec3) -> Vec3 {
        self.m2 * (self.m1 * v).map(f32::cbrt)
    }
}
