//! Parametric transfer function descriptors.
//!
//! A [`TransferParameters`] tuple describes an electro-optical transfer
//! function of the form:
//!
//! # Formula
//!
//! ```text
//! EOTF(x) = (a*x + b)^g + e   for x >= d
//!           c*x + f           for x <  d
//! ```
//!
//! The ICC-style 7-parameter model covers pure gamma curves, the sRGB
//! piecewise curve, and similar broadcast curves. Two sentinel values of
//! `g` select entirely different curve families instead: HLG and PQ,
//! whose parameters are packed into the same seven fields with remapped
//! meanings (see [`Curve`](crate::Curve)).

use chroma_core::{Error, Result};

/// Parameters of an ICC parametric transfer function, or of an HLG/PQ
/// curve when `g` holds one of the sentinel values.
///
/// Fields are public and read-only by convention; use [`new`] or
/// [`new_full`] to construct validated values.
///
/// [`new`]: TransferParameters::new
/// [`new_full`]: TransferParameters::new_full
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferParameters {
    /// Variable `a` in the EOTF equation.
    pub a: f64,
    /// Variable `b` in the EOTF equation.
    pub b: f64,
    /// Variable `c` in the EOTF equation.
    pub c: f64,
    /// Variable `d` in the EOTF equation.
    pub d: f64,
    /// Variable `e` in the EOTF equation.
    pub e: f64,
    /// Variable `f` in the EOTF equation.
    pub f: f64,
    /// Exponent `g`, or one of the HLG/PQ sentinels.
    pub g: f64,
}

impl TransferParameters {
    /// Sentinel exponent marking a PQ (ST 2084) parameter packing.
    pub const TYPE_PQISH: f64 = -2.0;

    /// Sentinel exponent marking an HLG parameter packing.
    pub const TYPE_HLGISH: f64 = -3.0;

    /// Creates parameters for the 5-argument form (`e = f = 0`).
    ///
    /// # Errors
    ///
    /// See [`TransferParameters::new_full`].
    pub fn new(a: f64, b: f64, c: f64, d: f64, g: f64) -> Result<Self> {
        Self::new_full(a, b, c, d, 0.0, 0.0, g)
    }

    /// Creates a full 7-parameter descriptor.
    ///
    /// Validation rejects parameter combinations that would describe a
    /// constant or decreasing curve. HLG/PQ sentinel packings skip the
    /// shape checks since their fields have different meanings.
    ///
    /// # Errors
    ///
    /// - [`Error::NanTransferParameter`] if any field is NaN
    /// - [`Error::DegenerateTransferFunction`] if the curve would be
    ///   constant or decreasing
    pub fn new_full(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64) -> Result<Self> {
        if a.is_nan() || b.is_nan() || c.is_nan() || d.is_nan() || e.is_nan() || f.is_nan()
            || g.is_nan()
        {
            return Err(Error::NanTransferParameter);
        }

        if !is_special_g(g) {
            // The native representation is float; allow one float ulp above 1.
            if !(d >= 0.0 && d <= 1.0 + f32::EPSILON as f64) {
                return Err(Error::degenerate_transfer(format!(
                    "parameter d must be in the range [0..1], was {d}"
                )));
            }
            if d == 0.0 && (a == 0.0 || g == 0.0) {
                return Err(Error::degenerate_transfer(
                    "parameter a or g is zero, the transfer function is constant",
                ));
            }
            if d >= 1.0 && c == 0.0 {
                return Err(Error::degenerate_transfer(
                    "parameter c is zero, the transfer function is constant",
                ));
            }
            if (a == 0.0 || g == 0.0) && c == 0.0 {
                return Err(Error::degenerate_transfer(
                    "parameter a or g is zero, and c is zero, the transfer function is constant",
                ));
            }
            if c < 0.0 {
                return Err(Error::degenerate_transfer(
                    "the transfer function must be increasing",
                ));
            }
            if a < 0.0 || g < 0.0 {
                return Err(Error::degenerate_transfer(
                    "the transfer function must be positive or increasing",
                ));
            }
        }

        Ok(Self { a, b, c, d, e, f, g })
    }

    /// True if `g` carries the HLG sentinel.
    #[inline]
    pub fn is_hlgish(&self) -> bool {
        self.g == Self::TYPE_HLGISH
    }

    /// True if `g` carries the PQ sentinel.
    #[inline]
    pub fn is_pqish(&self) -> bool {
        self.g == Self::TYPE_PQISH
    }

    /// Compares two parameter tuples within the matching tolerance used
    /// by the registry: 1e-3 per field, except `d` at 2e-3 to absorb
    /// sRGB OETF/EOTF discretization variance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.a - other.a).abs() < 1e-3
            && (self.b - other.b).abs() < 1e-3
            && (self.c - other.c).abs() < 1e-3
            && (self.d - other.d).abs() < 2e-3
            && (self.e - other.e).abs() < 1e-3
            && (self.f - other.f).abs() < 1e-3
            && (self.g - other.g).abs() < 1e-3
    }
}

#[inline]
fn is_special_g(g: f64) -> bool {
    g == TransferParameters::TYPE_PQISH || g == TransferParameters::TYPE_HLGISH
}
