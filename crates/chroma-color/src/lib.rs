//! # chroma-color
//!
//! Color values for the chroma-rs color management engine.
//!
//! Provides:
//!
//! - [`Color`] - A component array tagged with its color space
//! - [`packed`] - The 64-bit packed encoding (half floats + space id)
//! - [`argb`] - 8-bit ARGB color int helpers
//! - [`parse_color`] - `#RRGGBB` / `#AARRGGBB` / named color parsing
//! - [`hsv`] - HSV conversions over 8-bit channels
//!
//! ## Example
//!
//! ```rust
//! use chroma_color::{Color, parse_color};
//! use chroma_core::Named;
//! use chroma_space::registry;
//!
//! let teal = Color::from_argb(parse_color("teal")?);
//! let packed = teal.convert(registry::get(Named::DisplayP3)).pack()?;
//! assert!(chroma_color::packed::is_wide_gamut(packed)?);
//! # Ok::<(), chroma_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod argb;
pub mod color;
pub mod hsv;
pub mod packed;
pub mod parse;

pub use color::Color;
pub use hsv::{color_to_hsv, hsv_to_color, hsv_to_color_with_alpha, rgb_to_hsv};
pub use parse::parse_color;
