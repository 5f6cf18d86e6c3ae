//! # chroma-core
//!
//! Core types for the chroma-rs color management engine.
//!
//! This crate provides the foundational vocabulary used throughout the
//! chroma-rs workspace:
//!
//! - [`Model`] - Component layout of a color space (RGB, XYZ, LAB, CMYK)
//! - [`Named`] - The canonical registered color spaces and their ids
//! - [`RenderIntent`] - Gamut-mapping policy for connectors
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! This crate is the foundation of chroma-rs and has no internal
//! dependencies. All other chroma-rs crates depend on `chroma-core`:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-math (matrices, chromatic adaptation)
//!    +-- chroma-transfer (transfer functions)
//!    +-- chroma-space (color spaces, registry, connectors)
//!    +-- chroma-color (color values, packed codec)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{MAX_ID, MIN_ID, Model, Named, RenderIntent};
