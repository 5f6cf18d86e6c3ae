//! # chroma-math
//!
//! Math utilities for the chroma-rs color management engine.
//!
//! Provides the small linear algebra core the conversion pipeline is
//! built on, plus chromatic adaptation:
//!
//! - [`Vec3`] - Color triplets (RGB, XYZ) and white points
//! - [`Mat3`] - Row-major 3x3 matrices for gamut transforms
//! - [`Adaptation`] - Bradford / Von Kries / CAT02 white point adaptation
//! - Standard illuminant chromaticities ([`ILLUMINANT_D65`] et al.)
//!
//! ## Example
//!
//! ```rust
//! use chroma_math::{Adaptation, adaptation_matrix, ILLUMINANT_D65, ILLUMINANT_D50};
//!
//! let m = adaptation_matrix(
//!     Adaptation::Bradford,
//!     &ILLUMINANT_D65,
//!     &ILLUMINANT_D50,
//! ).unwrap();
//! assert!(m.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapt;
pub mod mat3;
pub mod vec3;

pub use adapt::{
    Adaptation, ILLUMINANT_A, ILLUMINANT_B, ILLUMINANT_C, ILLUMINANT_D50, ILLUMINANT_D50_XYZ,
    ILLUMINANT_D55, ILLUMINANT_D60, ILLUMINANT_D65, ILLUMINANT_D75, ILLUMINANT_E,
    adaptation_matrix, cct_to_xyz, chromatic_adaptation, compare, white_point_to_xyz, xy_y_to_xyz,
};
pub use mat3::Mat3;
pub use vec3::Vec3;
