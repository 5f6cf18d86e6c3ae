//! Color model, named color space, and render intent enumerations.
//!
//! These are the closed vocabularies of the color management engine: the
//! component layout of a color space ([`Model`]), the canonical registered
//! spaces ([`Named`]), and the gamut-mapping policy used when connecting
//! two spaces ([`RenderIntent`]).

/// Smallest valid color space id.
///
/// `-1` denotes a color space that is not part of the registry: ad-hoc
/// spaces produced by chromatic adaptation or connector construction.
/// Such spaces cannot be encoded into a packed color.
pub const MIN_ID: i32 = -1;

/// Largest valid color space id.
///
/// Ids occupy 6 bits in the packed 64-bit color representation, so a
/// registered color space id is always in `[0, 63]`.
pub const MAX_ID: i32 = 63;

/// Component layout of a color space.
///
/// Each model carries a fixed component count, which determines the arity
/// of every component array accepted by a color space of that model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Additive red/green/blue, 3 components.
    Rgb,
    /// CIE XYZ tristimulus, 3 components.
    Xyz,
    /// Lightness plus two chroma axes (CIE L*a*b*, OkLab), 3 components.
    Lab,
    /// Cyan/magenta/yellow/black, 4 components.
    Cmyk,
}

impl Model {
    /// Number of components in this model, excluding alpha.
    #[inline]
    pub const fn component_count(self) -> usize {
        match self {
            Model::Rgb | Model::Xyz | Model::Lab => 3,
            Model::Cmyk => 4,
        }
    }
}

/// Canonical named color spaces.
///
/// The discriminant of each variant is the color space's registry id and
/// its slot in the packed 64-bit color encoding. The order is therefore
/// part of the wire format and must never change.
///
/// Note that [`Named::OkLab`] and [`Named::DisplayBt2020`] are declared but
/// not populated in the registry; looking them up silently falls back to
/// sRGB (see `chroma-space`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Named {
    /// sRGB IEC 61966-2.1, the standard display space (id 0).
    Srgb,
    /// sRGB with a linear transfer function.
    LinearSrgb,
    /// scRGB-nl, sRGB primaries with an extended non-linear range.
    ExtendedSrgb,
    /// scRGB, sRGB primaries with an extended linear range.
    LinearExtendedSrgb,
    /// Rec. ITU-R BT.709-5.
    Bt709,
    /// Rec. ITU-R BT.2020-1.
    Bt2020,
    /// SMPTE RP 431-2-2007 DCI (P3), theatrical projection.
    DciP3,
    /// Display P3, DCI-P3 primaries with a D65 white point.
    DisplayP3,
    /// NTSC (1953), illuminant C.
    Ntsc1953,
    /// SMPTE-C RGB.
    SmpteC,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// ROMM RGB ISO 22028-2:2013 (ProPhoto RGB).
    ProPhotoRgb,
    /// SMPTE ST 2065-1:2012 ACES, AP0 primaries.
    Aces,
    /// Academy S-2014-004 ACEScg, AP1 primaries.
    AcesCg,
    /// Generic CIE XYZ, relative to D50.
    CieXyz,
    /// Generic CIE L*a*b*, relative to D50.
    CieLab,
    /// BT.2020 with the Hybrid Log-Gamma encoding.
    Bt2020Hlg,
    /// BT.2020 with the Perceptual Quantizer encoding.
    Bt2020Pq,
    /// OkLab. Declared but unregistered; lookup falls back to sRGB.
    OkLab,
    /// Display BT.2020. Declared but unregistered; lookup falls back to sRGB.
    DisplayBt2020,
}

impl Named {
    /// The registry id and packed-color slot of this named space.
    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }
}

/// Gamut-mapping policy selected when connecting two color spaces.
///
/// Only [`RenderIntent::Absolute`] changes connector behavior: it applies
/// a white-point scale instead of relative colorimetric matching. The
/// other three intents are computed identically by the matrix-composition
/// algorithm (no gamut-mapping tables are available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderIntent {
    /// Compress the source gamut into the destination gamut.
    #[default]
    Perceptual,
    /// Relative colorimetric: match colors through white-point adaptation.
    Relative,
    /// Preserve saturation over hue and lightness.
    Saturation,
    /// Absolute colorimetric: scale by the white-point ratio instead of
    /// adapting.
    Absolute,
}
