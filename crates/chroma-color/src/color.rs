//! The `Color` facade.
//!
//! A [`Color`] bundles a component array with the [`ColorSpace`] the
//! components are expressed in. The array always holds the space's
//! chromatic components followed by alpha, so a color in any of the
//! registered spaces carries 4 entries.
//!
//! # Example
//!
//! ```rust
//! use chroma_color::Color;
//! use chroma_core::Named;
//! use chroma_space::registry;
//!
//! let red = Color::from_argb(0xFFFF0000);
//! let p3 = red.convert(registry::get(Named::DisplayP3));
//! assert!(p3.red() < 1.0); // sRGB red sits inside the P3 gamut
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use chroma_core::{Error, Model, Named, RenderIntent, Result};
use chroma_math::Vec3;
use chroma_space::connector::{connect, connect_to_srgb};
use chroma_space::{ColorSpace, registry};

use crate::{argb, packed};

/// A color value tagged with its color space.
///
/// Components are stored in the space's natural order with alpha last.
/// Equality and hashing are structural over the component bits and the
/// color space, so two colors that render identically but live in
/// different spaces compare unequal.
#[derive(Debug, Clone)]
pub struct Color {
    components: Vec<f32>,
    color_space: ColorSpace,
}

impl Color {
    /// Creates an sRGB color from four `[0, 1]` components, saturating
    /// each to the valid range.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            components: vec![saturate(r), saturate(g), saturate(b), saturate(a)],
            color_space: registry::get(Named::Srgb).clone(),
        }
    }

    /// Creates an opaque sRGB color. Components are not saturated.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            components: vec![r, g, b, 1.0],
            color_space: registry::get(Named::Srgb).clone(),
        }
    }

    /// Creates an sRGB color from an 8-bit ARGB color int.
    pub fn from_argb(color: u32) -> Self {
        Self {
            components: vec![
                argb::red(color) as f32 / 255.0,
                argb::green(color) as f32 / 255.0,
                argb::blue(color) as f32 / 255.0,
                argb::alpha(color) as f32 / 255.0,
            ],
            color_space: registry::get(Named::Srgb).clone(),
        }
    }

    /// Decodes a 64-bit packed color.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownId`] if the packed id does not name a registered
    /// space.
    pub fn from_packed(color: u64) -> Result<Self> {
        Ok(Self {
            components: vec![
                packed::red(color),
                packed::green(color),
                packed::blue(color),
                packed::alpha(color),
            ],
            color_space: packed::color_space_of(color)?.clone(),
        })
    }

    /// Creates a color from components in an arbitrary color space.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyComponents`] if the space's model has more than
    /// 3 chromatic components.
    pub fn in_space(r: f32, g: f32, b: f32, a: f32, color_space: &ColorSpace) -> Result<Self> {
        let count = color_space.component_count();
        if count > 3 {
            return Err(Error::TooManyComponents { count });
        }
        Ok(Self {
            components: vec![r, g, b, a],
            color_space: color_space.clone(),
        })
    }

    /// Creates a color from a component slice, alpha last.
    ///
    /// The slice may be longer than needed; only the space's component
    /// count plus alpha is kept.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentCountMismatch`] if the slice is shorter than
    /// the model requires including alpha.
    pub fn from_components(components: &[f32], color_space: &ColorSpace) -> Result<Self> {
        let expected = color_space.component_count() + 1;
        if components.len() < expected {
            return Err(Error::ComponentCountMismatch {
                expected,
                got: components.len(),
            });
        }
        Ok(Self {
            components: components[..expected].to_vec(),
            color_space: color_space.clone(),
        })
    }

    /// The color space the components are expressed in.
    #[inline]
    pub fn color_space(&self) -> &ColorSpace {
        &self.color_space
    }

    /// The color model of this color's space.
    #[inline]
    pub fn model(&self) -> Model {
        self.color_space.model()
    }

    /// Whether this color's space has a gamut wider than sRGB.
    #[inline]
    pub fn is_wide_gamut(&self) -> bool {
        self.color_space.is_wide_gamut()
    }

    /// Whether this color's space is sRGB.
    #[inline]
    pub fn is_srgb(&self) -> bool {
        self.color_space.is_srgb()
    }

    /// Number of components including alpha.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.color_space.component_count() + 1
    }

    /// The components in the space's natural order, alpha last.
    #[inline]
    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// The component at `index`; panics when out of bounds like slice
    /// indexing does.
    #[inline]
    pub fn component(&self, index: usize) -> f32 {
        self.components[index]
    }

    /// The first component.
    #[inline]
    pub fn red(&self) -> f32 {
        self.components[0]
    }

    /// The second component.
    #[inline]
    pub fn green(&self) -> f32 {
        self.components[1]
    }

    /// The third component.
    #[inline]
    pub fn blue(&self) -> f32 {
        self.components[2]
    }

    /// The alpha component.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.components[self.components.len() - 1]
    }

    /// Converts this color into `destination` with perceptual intent.
    /// Alpha passes through unchanged.
    pub fn convert(&self, destination: &ColorSpace) -> Self {
        let connector = connect(&self.color_space, destination, RenderIntent::Perceptual);
        let c = connector.transform(Vec3::new(self.red(), self.green(), self.blue()));
        Self {
            components: vec![c.x, c.y, c.z, self.alpha()],
            color_space: destination.clone(),
        }
    }

    /// Packs this color into the 64-bit encoding.
    ///
    /// # Errors
    ///
    /// Propagates [`packed::pack`] failures for this color's space.
    pub fn pack(&self) -> Result<u64> {
        packed::pack(
            self.red(),
            self.green(),
            self.blue(),
            self.alpha(),
            &self.color_space,
        )
    }

    /// Converts this color to an 8-bit ARGB sRGB color int.
    ///
    /// Non-sRGB colors are routed through a connector to sRGB; the
    /// destination OETF saturates the result.
    pub fn to_argb(&self) -> u32 {
        if self.color_space.is_srgb() {
            return argb::argb_from_floats(self.alpha(), self.red(), self.green(), self.blue());
        }

        let connector = connect_to_srgb(&self.color_space, RenderIntent::Perceptual);
        let c = connector.transform(Vec3::new(self.red(), self.green(), self.blue()));
        argb::argb_from_floats(self.alpha(), c.x, c.y, c.z)
    }

    /// Returns the relative luminance, saturated to `[0, 1]`.
    ///
    /// The components are decoded through the space's EOTF and weighted
    /// with the BT.709 luminance coefficients.
    ///
    /// # Errors
    ///
    /// [`Error::NonRgbModel`] if this color's space is not RGB.
    pub fn luminance(&self) -> Result<f32> {
        let Some(rgb) = self.color_space.as_rgb() else {
            return Err(Error::NonRgbModel {
                model: self.color_space.model(),
            });
        };
        let r = rgb.eotf(f64::from(self.red()));
        let g = rgb.eotf(f64::from(self.green()));
        let b = rgb.eotf(f64::from(self.blue()));
        Ok(saturate((0.2126 * r + 0.7152 * g + 0.0722 * b) as f32))
    }
}

impl Default for Color {
    /// Opaque black in sRGB.
    fn default() -> Self {
        Self {
            components: vec![0.0, 0.0, 0.0, 1.0],
            color_space: registry::get(Named::Srgb).clone(),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.components.len() == other.components.len()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a.to_bits() == b.to_bits())
            && self.color_space == other.color_space
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in &self.components {
            c.to_bits().hash(state);
        }
        self.color_space.name().hash(state);
        self.color_space.id().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(")?;
        for c in &self.components {
            write!(f, "{c}, ")?;
        }
        write!(f, "{})", self.color_space.name())
    }
}

#[inline]
fn saturate(v: f32) -> f32 {
    if v <= 0.0 {
        0.0
    } else if v >= 1.0 {
        1.0
    } else {
        v
    }
}
