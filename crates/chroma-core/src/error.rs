//! Error types for chroma-core operations.
//!
//! This module provides the unified error handling system for all color
//! space construction and conversion operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Color space construction (malformed primaries, white points, ranges)
//! - Transfer parameter validation (NaN fields, degenerate curves)
//! - Packed color encoding/decoding (unregistered spaces, unknown ids)
//! - Color string parsing
//!
//! Numeric degeneracy (a singular matrix inversion, a zero luminance
//! coordinate) is deliberately *not* represented here: it propagates as
//! NaN/Inf through subsequent computations, since standards-derived
//! primaries never produce degenerate matrices in practice.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result};
//!
//! fn check_range(min: f32, max: f32) -> Result<()> {
//!     if min >= max {
//!         return Err(Error::InvalidRange { min, max });
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use crate::Model;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during color space and color value operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Construction errors**: [`InvalidName`](Error::InvalidName),
///   [`InvalidId`](Error::InvalidId), [`InvalidPrimaries`](Error::InvalidPrimaries),
///   [`InvalidWhitePoint`](Error::InvalidWhitePoint), [`InvalidRange`](Error::InvalidRange)
/// - **Transfer function errors**: [`NanTransferParameter`](Error::NanTransferParameter),
///   [`DegenerateTransferFunction`](Error::DegenerateTransferFunction)
/// - **Codec errors**: [`UnregisteredColorSpace`](Error::UnregisteredColorSpace),
///   [`UnknownId`](Error::UnknownId), [`TooManyComponents`](Error::TooManyComponents)
/// - **Argument errors**: [`NonRgbModel`](Error::NonRgbModel),
///   [`ComponentCountMismatch`](Error::ComponentCountMismatch),
///   [`UnknownColor`](Error::UnknownColor), [`InvalidTemperature`](Error::InvalidTemperature)
#[derive(Debug, Error)]
pub enum Error {
    /// A color space name must contain at least one character.
    #[error("the name of a color space must contain at least 1 character")]
    InvalidName,

    /// A color space id must lie in the range `[MIN_ID, MAX_ID]`.
    #[error("the id must be between {min} and {max}, was {id}")]
    InvalidId {
        /// The offending id.
        id: i32,
        /// Lower bound of the valid range (`MIN_ID`).
        min: i32,
        /// Upper bound of the valid range (`MAX_ID`).
        max: i32,
    },

    /// Primaries must be supplied as 6 floats in xyY or 9 floats in XYZ.
    #[error("primaries must be an array of 6 floats in xyY or 9 floats in XYZ, got {len}")]
    InvalidPrimaries {
        /// Length of the supplied array.
        len: usize,
    },

    /// A white point must be supplied as 2 floats in xyY or 3 floats in XYZ.
    #[error("a white point must be an array of 2 floats in xyY or 3 floats in XYZ, got {len}")]
    InvalidWhitePoint {
        /// Length of the supplied array.
        len: usize,
    },

    /// The component range of a color space must satisfy `min < max`.
    #[error("invalid range: min={min}, max={max}; min must be strictly < max")]
    InvalidRange {
        /// Supplied lower bound.
        min: f32,
        /// Supplied upper bound.
        max: f32,
    },

    /// Transfer function parameters cannot contain NaN.
    #[error("transfer function parameters cannot be NaN")]
    NanTransferParameter,

    /// The transfer parameter combination describes a constant or
    /// decreasing curve.
    #[error("invalid transfer function: {reason}")]
    DegenerateTransferFunction {
        /// Which validation rule was violated.
        reason: String,
    },

    /// Packing requires a color space returned by the registry, not an
    /// ad-hoc space with `MIN_ID`.
    #[error("unknown color space, please use a color space returned by the registry")]
    UnregisteredColorSpace,

    /// No registered color space carries this id.
    #[error("invalid color space id: {id}")]
    UnknownId {
        /// The id that was looked up.
        id: i32,
    },

    /// The packed encoding only supports color models with at most 3
    /// chromatic components plus alpha.
    #[error("the color space must use a color model with at most 3 components, has {count}")]
    TooManyComponents {
        /// Component count of the offending model.
        count: usize,
    },

    /// The operation requires a color encoded in an RGB color space.
    #[error("the color must be encoded in an RGB color space, the supplied model is {model:?}")]
    NonRgbModel {
        /// Model of the supplied color space.
        model: Model,
    },

    /// A component array was shorter than the color model requires.
    #[error("received a component array of length {got} but the color model requires {expected} (including alpha)")]
    ComponentCountMismatch {
        /// Required length (component count plus alpha).
        expected: usize,
        /// Supplied length.
        got: usize,
    },

    /// The color string is not `#RRGGBB`, `#AARRGGBB`, or a known name.
    #[error("unknown color: {input}")]
    UnknownColor {
        /// The string that failed to parse.
        input: String,
    },

    /// Correlated color temperature must be strictly positive.
    #[error("temperature must be greater than 0, was {cct}")]
    InvalidTemperature {
        /// The supplied temperature in kelvin.
        cct: i32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidId`] for the standard id range.
    #[inline]
    pub fn invalid_id(id: i32) -> Self {
        Self::InvalidId {
            id,
            min: crate::MIN_ID,
            max: crate::MAX_ID,
        }
    }

    /// Creates an [`Error::DegenerateTransferFunction`] error.
    #[inline]
    pub fn degenerate_transfer(reason: impl Into<String>) -> Self {
        Self::DegenerateTransferFunction {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnknownColor`] error.
    #[inline]
    pub fn unknown_color(input: impl Into<String>) -> Self {
        Self::UnknownColor {
            input: input.into(),
        }
    }

    /// Returns `true` if this is a construction-time error.
    #[inline]
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidName
                | Self::InvalidId { .. }
                | Self::InvalidPrimaries { .. }
                | Self::InvalidWhitePoint { .. }
                | Self::InvalidRange { .. }
                | Self::NanTransferParameter
                | Self::DegenerateTransferFunction { .. }
        )
    }

    /// Returns `true` if this is a packed-color codec error.
    #[inline]
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            Self::UnregisteredColorSpace | Self::UnknownId { .. } | Self::TooManyComponents { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = Error::InvalidRange { min: 1.0, max: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("min=1"));
        assert!(msg.contains("max=0"));
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_invalid_id_bounds() {
        let err = Error::invalid_id(64);
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("63"));
    }

    #[test]
    fn test_codec_predicates() {
        assert!(Error::UnregisteredColorSpace.is_codec_error());
        assert!(Error::UnknownId { id: 42 }.is_codec_error());
        assert!(!Error::InvalidName.is_codec_error());
    }
}
