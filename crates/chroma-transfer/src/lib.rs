//! # chroma-transfer
//!
//! Parametric transfer functions for the chroma-rs color management
//! engine.
//!
//! Provides:
//!
//! - [`TransferParameters`] - Validated 7-parameter curve descriptors,
//!   with sentinel exponents selecting the HLG and PQ families
//! - [`Curve`] - Tagged, evaluable curves in either direction
//! - [`presets`] - Standard tuples (sRGB, SMPTE 170M, BT.2020, ROMM,
//!   HLG, PQ)
//!
//! ## Example
//!
//! ```rust
//! use chroma_transfer::{Curve, presets};
//!
//! let eotf = Curve::Response(presets::SRGB);
//! let linear = eotf.eval(0.5);
//! assert!((linear - 0.2140).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod params;
pub mod presets;

pub use curve::Curve;
pub use params::TransferParameters;
