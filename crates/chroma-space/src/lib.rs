//! # chroma-space
//!
//! Color spaces for the chroma-rs color management engine.
//!
//! Provides:
//!
//! - [`ColorSpace`] - Closed union over RGB, XYZ, L*a*b*, and OkLab
//! - [`RgbColorSpace`] - Parametric RGB spaces with derived transforms
//! - [`registry`] - The canonical named spaces, keyed by [`Named`] or id
//! - [`Connector`] - Precomputed conversions between two spaces
//! - [`adapt`] - White point re-anchoring of RGB spaces
//!
//! ## Example
//!
//! ```rust
//! use chroma_core::{Named, RenderIntent};
//! use chroma_math::Vec3;
//! use chroma_space::{connect, registry};
//!
//! let srgb = registry::get(Named::Srgb);
//! let p3 = registry::get(Named::DisplayP3);
//!
//! let connector = connect(srgb, p3, RenderIntent::Perceptual);
//! let converted = connector.transform(Vec3::new(1.0, 0.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod connector;
pub mod oklab;
pub mod registry;
pub mod rgb;
pub mod space;

pub use chroma_core::Named;
pub use connector::{Connector, connect, connect_to_srgb};
pub use oklab::OkLabColorSpace;
pub use rgb::RgbColorSpace;
pub use space::{ColorSpace, LabColorSpace, XyzColorSpace, adapt};
