//! Connectors: precomputed conversions between two color spaces.
//!
//! A [`Connector`] routes component tuples from a source space to a
//! destination space through the D50 connection space. Three shapes
//! exist, picked once at construction:
//!
//! - [`Connector::Identity`] - source and destination are the same
//!   space; values pass through untouched
//! - [`Connector::Rgb`] - both endpoints are RGB; the linear transforms
//!   and any adaptation collapse into one precomposed matrix
//! - [`Connector::Generic`] - at least one endpoint is XYZ or Lab;
//!   conversion goes through each endpoint's `to_xyz`/`from_xyz` with
//!   D50-adapted RGB endpoints
//!
//! Only [`RenderIntent::Absolute`] alters the math: it scales by the
//! white point ratio instead of adapting. The other three intents share
//! the relative colorimetric path.

use crate::rgb::RgbColorSpace;
use crate::space::{ColorSpace, adapt_to_d50, adapt_to_illuminant_d50};
use chroma_core::{Model, Named, RenderIntent};
use chroma_math::{ILLUMINANT_D50_XYZ, Mat3, Vec3, compare, xy_y_to_xyz};
use crate::registry;

/// A precomputed conversion between two color spaces.
#[derive(Debug, Clone)]
pub enum Connector {
    /// Copy-through between a space and itself.
    Identity(IdentityConnector),
    /// RGB-to-RGB through a single precomposed matrix.
    Rgb(RgbConnector),
    /// Conversion through XYZ with D50-adapted endpoints.
    Generic(GenericConnector),
}

impl Connector {
    /// The source color space.
    pub fn source(&self) -> &ColorSpace {
        match self {
            Self::Identity(c) => &c.space,
            Self::Rgb(c) => &c.source,
            Self::Generic(c) => &c.source,
        }
    }

    /// The destination color space.
    pub fn destination(&self) -> &ColorSpace {
        match self {
            Self::Identity(c) => &c.space,
            Self::Rgb(c) => &c.destination,
            Self::Generic(c) => &c.destination,
        }
    }

    /// The render intent this connector was built with.
    pub fn render_intent(&self) -> RenderIntent {
        match self {
            Self::Identity(c) => c.intent,
            Self::Rgb(c) => c.intent,
            Self::Generic(c) => c.intent,
        }
    }

    /// Converts a source tuple to destination components.
    pub fn transform(&self, v: Vec3) -> Vec3 {
        match self {
            Self::Identity(_) => v,
            Self::Rgb(c) => c.transform(v),
            Self::Generic(c) => c.transform(v),
        }
    }
}

/// Copy-through connector for identical endpoints.
#[derive(Debug, Clone)]
pub struct IdentityConnector {
    space: ColorSpace,
    intent: RenderIntent,
}

/// RGB-to-RGB connector with one precomposed linear transform.
#[derive(Debug, Clone)]
pub struct RgbConnector {
    source: ColorSpace,
    destination: ColorSpace,
    transform: Mat3,
    intent: RenderIntent,
}

impl RgbConnector {
    fn new(source: &RgbColorSpace, destination: &RgbColorSpace, intent: RenderIntent) -> Self {
        let transform = Self::compute_transform(source, destination, intent);
        Self {
            source: ColorSpace::Rgb(source.clone()),
            destination: ColorSpace::Rgb(destination.clone()),
            transform,
            intent,
        }
    }

    fn compute_transform(
        source: &RgbColorSpace,
        destination: &RgbColorSpace,
        intent: RenderIntent,
    ) -> Mat3 {
        if compare(&source.white_point(), &destination.white_point()) {
            // Same white point, connect directly in the shared PCS
            return destination.inverse_transform() * source.transform();
        }

        // Route through CIE XYZ D50
        let mut transform = adapt_to_illuminant_d50(source.white_point(), source.transform());
        let inverse_transform =
            adapt_to_illuminant_d50(destination.white_point(), destination.transform()).inverse();

        if intent == RenderIntent::Absolute {
            let src_xyz = xy_y_to_xyz(source.white_point());
            let dst_xyz = xy_y_to_xyz(destination.white_point());
            transform = transform.scaled_rows(src_xyz / dst_xyz);
        }

        inverse_transform * transform
    }

    fn transform(&self, v: Vec3) -> Vec3 {
        let (Some(source), Some(destination)) = (self.source.as_rgb(), self.destination.as_rgb())
        else {
            unreachable!("RGB connector endpoints are RGB by construction");
        };
        destination.from_linear(self.transform * source.to_linear(v))
    }
}

/// Connector for endpoints that are not both RGB.
#[derive(Debug, Clone)]
pub struct GenericConnector {
    source: ColorSpace,
    destination: ColorSpace,
    transform_source: ColorSpace,
    transform_destination: ColorSpace,
    scale: Option<Vec3>,
    intent: RenderIntent,
}

impl GenericConnector {
    fn new(source: &ColorSpace, destination: &ColorSpace, intent: RenderIntent) -> Self {
        Self {
            source: source.clone(),
            destination: destination.clone(),
            transform_source: adapt_to_d50(source),
            transform_destination: adapt_to_d50(destination),
            scale: Self::compute_scale(source, destination, intent),
            intent,
        }
    }

    // Absolute rendering with exactly one RGB endpoint scales XYZ by the
    // ratio of the RGB white point to D50.
    fn compute_scale(
        source: &ColorSpace,
        destination: &ColorSpace,
        intent: RenderIntent,
    ) -> Option<Vec3> {
        if intent != RenderIntent::Absolute {
            return None;
        }
        let src_rgb = source.as_rgb();
        let dst_rgb = destination.as_rgb();
        if src_rgb.is_some() == dst_rgb.is_some() {
            return None;
        }
        let src_xyz = src_rgb.map_or(ILLUMINANT_D50_XYZ, |rgb| xy_y_to_xyz(rgb.white_point()));
        let dst_xyz = dst_rgb.map_or(ILLUMINANT_D50_XYZ, |rgb| xy_y_to_xyz(rgb.white_point()));
        Some(src_xyz / dst_xyz)
    }

    fn transform(&self, v: Vec3) -> Vec3 {
        let mut xyz = self.transform_source.to_xyz(v);
        if let Some(scale) = self.scale {
            xyz = xyz * scale;
        }
        self.transform_destination.from_xyz(xyz)
    }
}

/// Builds a connector from `source` to `destination`.
///
/// Identical endpoints produce a copy-through connector, which records
/// [`RenderIntent::Relative`] regardless of the requested intent.
pub fn connect(source: &ColorSpace, destination: &ColorSpace, intent: RenderIntent) -> Connector {
    if source == destination {
        return Connector::Identity(IdentityConnector {
            space: source.clone(),
            intent: RenderIntent::Relative,
        });
    }

    if let (ColorSpace::Rgb(src), ColorSpace::Rgb(dst)) = (source, destination) {
        return Connector::Rgb(RgbConnector::new(src, dst, intent));
    }

    Connector::Generic(GenericConnector::new(source, destination, intent))
}

/// Builds a connector from `source` to sRGB. A source that already
/// behaves like sRGB yields a copy-through connector.
pub fn connect_to_srgb(source: &ColorSpace, intent: RenderIntent) -> Connector {
    if source.is_srgb() {
        return Connector::Identity(IdentityConnector {
            space: source.clone(),
            intent: RenderIntent::Relative,
        });
    }
    if source.model() == Model::Rgb {
        return connect(source, registry::get(Named::Srgb), intent);
    }
    Connector::Generic(GenericConnector::new(
        source,
        registry::get(Named::Srgb),
        intent,
    ))
}
