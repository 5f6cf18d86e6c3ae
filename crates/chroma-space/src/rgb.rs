//! Parametric RGB color spaces.
//!
//! An [`RgbColorSpace`] is defined by chromaticity primaries, a white
//! point, and a pair of transfer curves. Construction derives the
//! RGB-to-XYZ transform from the chromaticities unless an explicit
//! transform is supplied, and classifies the space (sRGB-equivalent,
//! wide gamut) once up front.
//!
//! # Transform Derivation
//!
//! The transform is the unique matrix whose columns are the XYZ
//! coordinates of the primaries, scaled so that the all-ones RGB tuple
//! maps to the white point with unit luminance. The per-primary
//! luminances fall out of a closed-form solution of that constraint.

use crate::space::validate_base;
use chroma_core::{Error, MIN_ID, Result};
use chroma_math::{ILLUMINANT_D65, Mat3, Vec3, compare};
use chroma_transfer::{Curve, TransferParameters, presets};

pub(crate) const SRGB_PRIMARIES: [f32; 6] = [0.640, 0.330, 0.300, 0.600, 0.150, 0.060];
pub(crate) const NTSC_1953_PRIMARIES: [f32; 6] = [0.67, 0.33, 0.21, 0.71, 0.14, 0.08];
pub(crate) const DCI_P3_PRIMARIES: [f32; 6] = [0.680, 0.320, 0.265, 0.690, 0.150, 0.060];
pub(crate) const BT2020_PRIMARIES: [f32; 6] = [0.708, 0.292, 0.170, 0.797, 0.131, 0.046];

// Placeholder primaries for achromatic (gray) transforms, which have no
// meaningful chromaticity triangle.
pub(crate) const GRAY_PRIMARIES: [f32; 6] = [1.0; 6];

/// An RGB color space defined by primaries, a white point, and a pair
/// of transfer curves.
#[derive(Debug, Clone)]
pub struct RgbColorSpace {
    pub(crate) name: String,
    pub(crate) id: i32,
    white_point: [f32; 2],
    primaries: [f32; 6],
    transform: Mat3,
    inverse_transform: Mat3,
    oetf: Curve,
    eotf: Curve,
    min: f32,
    max: f32,
    transfer_parameters: Option<TransferParameters>,
    is_wide_gamut: bool,
    is_srgb: bool,
}

impl RgbColorSpace {
    /// Creates an RGB space from primaries, a white point, and transfer
    /// parameters, with a `[0, 1]` component range.
    ///
    /// # Errors
    ///
    /// See [`RgbColorSpace::with_curves`].
    pub fn new(
        name: impl Into<String>,
        primaries: &[f32],
        white_point: &[f32],
        function: TransferParameters,
    ) -> Result<Self> {
        Self::with_params_id(name.into(), primaries, white_point, None, function, MIN_ID)
    }

    /// Creates an RGB space with a pure power transfer curve and a
    /// `[0, 1]` component range.
    pub fn with_gamma(
        name: impl Into<String>,
        primaries: &[f32],
        white_point: &[f32],
        gamma: f64,
    ) -> Result<Self> {
        Self::with_gamma_range(name.into(), primaries, white_point, gamma, 0.0, 1.0, MIN_ID)
    }

    /// Creates an RGB space from explicit transfer curves.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`] for an empty name
    /// - [`Error::InvalidPrimaries`] unless primaries has 6 (xyY) or
    ///   9 (XYZ) entries
    /// - [`Error::InvalidWhitePoint`] unless the white point has 2 (xyY)
    ///   or 3 (XYZ) entries
    /// - [`Error::InvalidRange`] unless `min < max`
    pub fn with_curves(
        name: impl Into<String>,
        primaries: &[f32],
        white_point: &[f32],
        oetf: Curve,
        eotf: Curve,
        min: f32,
        max: f32,
    ) -> Result<Self> {
        Self::from_parts(
            name.into(),
            primaries,
            white_point,
            None,
            oetf,
            eotf,
            min,
            max,
            None,
            MIN_ID,
        )
    }

    /// Creates an RGB space from an RGB-to-XYZ transform, deriving the
    /// primaries and white point from the matrix columns.
    pub fn from_transform(
        name: impl Into<String>,
        to_xyz: &Mat3,
        oetf: Curve,
        eotf: Curve,
    ) -> Result<Self> {
        Self::from_parts(
            name.into(),
            &compute_primaries(to_xyz),
            &compute_white_point(to_xyz),
            None,
            oetf,
            eotf,
            0.0,
            1.0,
            None,
            MIN_ID,
        )
    }

    /// Creates an RGB space from an RGB-to-XYZ transform and transfer
    /// parameters.
    ///
    /// Achromatic transforms (zero off-diagonal entries) have no
    /// meaningful chromaticity triangle; they keep the supplied matrix
    /// and the all-ones placeholder primaries. Other transforms rebuild
    /// the matrix from the derived primaries and white point like the
    /// other constructors.
    pub fn from_transform_params(
        name: impl Into<String>,
        to_xyz: &Mat3,
        function: TransferParameters,
    ) -> Result<Self> {
        let gray = is_gray(to_xyz);
        let primaries = if gray {
            GRAY_PRIMARIES
        } else {
            compute_primaries(to_xyz)
        };
        Self::with_params_id(
            name.into(),
            &primaries,
            &compute_white_point(to_xyz),
            gray.then_some(*to_xyz),
            function,
            MIN_ID,
        )
    }

    pub(crate) fn with_params_id(
        name: String,
        primaries: &[f32],
        white_point: &[f32],
        transform: Option<Mat3>,
        function: TransferParameters,
        id: i32,
    ) -> Result<Self> {
        Self::from_parts(
            name,
            primaries,
            white_point,
            transform,
            Curve::oetf_of(&function),
            Curve::eotf_of(&function),
            0.0,
            1.0,
            Some(function),
            id,
        )
    }

    pub(crate) fn with_gamma_range(
        name: String,
        primaries: &[f32],
        white_point: &[f32],
        gamma: f64,
        min: f32,
        max: f32,
        id: i32,
    ) -> Result<Self> {
        let (oetf, eotf) = if gamma == 1.0 {
            (Curve::Identity, Curve::Identity)
        } else {
            (Curve::Gamma(1.0 / gamma), Curve::Gamma(gamma))
        };
        Self::from_parts(
            name,
            primaries,
            white_point,
            None,
            oetf,
            eotf,
            min,
            max,
            Some(TransferParameters::new(1.0, 0.0, 0.0, 0.0, gamma)?),
            id,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        primaries: &[f32],
        white_point: &[f32],
        transform: Option<Mat3>,
        oetf: Curve,
        eotf: Curve,
        min: f32,
        max: f32,
        transfer_parameters: Option<TransferParameters>,
        id: i32,
    ) -> Result<Self> {
        validate_base(&name, id)?;

        if primaries.len() != 6 && primaries.len() != 9 {
            return Err(Error::InvalidPrimaries {
                len: primaries.len(),
            });
        }
        if white_point.len() != 2 && white_point.len() != 3 {
            return Err(Error::InvalidWhitePoint {
                len: white_point.len(),
            });
        }
        if min >= max {
            return Err(Error::InvalidRange { min, max });
        }

        let white_point = xy_white_point(white_point);
        let primaries = xy_primaries(primaries);

        let transform = transform.unwrap_or_else(|| compute_xyz_matrix(&primaries, &white_point));
        let inverse_transform = transform.inverse();

        let is_wide_gamut = is_wide_gamut(&primaries, min, max);
        let is_srgb = is_srgb(&primaries, &white_point, &oetf, &eotf, min, max, id);

        Ok(Self {
            name,
            id,
            white_point,
            primaries,
            transform,
            inverse_transform,
            oetf,
            eotf,
            min,
            max,
            transfer_parameters,
            is_wide_gamut,
            is_srgb,
        })
    }

    /// Rebuilds this space with a replacement transform and white point,
    /// keeping everything else. Used by chromatic adaptation; the result
    /// is an ad-hoc space. The caller has already validated the white
    /// point length.
    pub(crate) fn adapted(&self, transform: Mat3, white_point: &[f32]) -> Self {
        let white_point = xy_white_point(white_point);
        Self {
            name: self.name.clone(),
            id: MIN_ID,
            white_point,
            primaries: self.primaries,
            transform,
            inverse_transform: transform.inverse(),
            oetf: self.oetf,
            eotf: self.eotf,
            min: self.min,
            max: self.max,
            transfer_parameters: self.transfer_parameters,
            is_wide_gamut: self.is_wide_gamut,
            is_srgb: is_srgb(
                &self.primaries,
                &white_point,
                &self.oetf,
                &self.eotf,
                self.min,
                self.max,
                MIN_ID,
            ),
        }
    }

    /// The space's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The space's registry id, or `MIN_ID` for ad-hoc spaces.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The white point as xy chromaticity.
    pub fn white_point(&self) -> [f32; 2] {
        self.white_point
    }

    /// The primaries as xy chromaticity pairs (R, G, B).
    pub fn primaries(&self) -> [f32; 6] {
        self.primaries
    }

    /// The RGB-to-XYZ transform of linear components.
    pub fn transform(&self) -> Mat3 {
        self.transform
    }

    /// The XYZ-to-RGB transform producing linear components.
    pub fn inverse_transform(&self) -> Mat3 {
        self.inverse_transform
    }

    /// Smallest valid component value.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Largest valid component value.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// The transfer parameters this space was built from, if it was
    /// built from the ICC parametric model. HLG and PQ packings are not
    /// ICC parameters and are not exposed.
    pub fn transfer_parameters(&self) -> Option<TransferParameters> {
        match self.transfer_parameters {
            Some(p) if p != presets::BT2020_PQ && p != presets::BT2020_HLG => Some(p),
            _ => None,
        }
    }

    /// Applies the opto-electronic transfer function, clamping the
    /// result to the component range.
    pub fn oetf(&self, x: f64) -> f64 {
        self.clamp(self.oetf.eval(x))
    }

    /// Applies the electro-optical transfer function after clamping the
    /// input to the component range.
    pub fn eotf(&self, x: f64) -> f64 {
        self.eotf.eval(self.clamp(x))
    }

    // The stored parameters, HLG/PQ packings included. Registry matching
    // compares against these rather than the public accessor.
    pub(crate) fn raw_transfer_parameters(&self) -> Option<TransferParameters> {
        self.transfer_parameters
    }

    pub(crate) fn oetf_curve(&self) -> Curve {
        self.oetf
    }

    pub(crate) fn eotf_curve(&self) -> Curve {
        self.eotf
    }

    /// True if this space behaves exactly like sRGB: same primaries,
    /// white point, range, and curves within tolerance.
    pub fn is_srgb(&self) -> bool {
        self.is_srgb
    }

    /// True if the chromaticity triangle covers more than 90% of NTSC
    /// 1953 while containing sRGB, or the range extends outside `[0, 1]`.
    pub fn is_wide_gamut(&self) -> bool {
        self.is_wide_gamut
    }

    /// Decodes encoded components to linear light.
    pub fn to_linear(&self, v: Vec3) -> Vec3 {
        v.map(|x| self.eotf(x as f64) as f32)
    }

    /// Encodes linear components with this space's curve.
    pub fn from_linear(&self, v: Vec3) -> Vec3 {
        v.map(|x| self.oetf(x as f64) as f32)
    }

    /// Converts encoded components to XYZ.
    pub fn to_xyz(&self, v: Vec3) -> Vec3 {
        self.transform * self.to_linear(v)
    }

    /// Converts XYZ to encoded components.
    pub fn from_xyz(&self, v: Vec3) -> Vec3 {
        self.from_linear(self.inverse_transform * v)
    }

    fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min as f64, self.max as f64)
    }
}

impl PartialEq for RgbColorSpace {
    fn eq(&self, other: &Self) -> bool {
        if self.id != other.id
            || self.name != other.name
            || self.min != other.min
            || self.max != other.max
            || self.white_point != other.white_point
            || self.primaries != other.primaries
        {
            return false;
        }
        match (&self.transfer_parameters, &other.transfer_parameters) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.oetf == other.oetf && self.eotf == other.eotf,
            _ => false,
        }
    }
}

fn is_gray(to_xyz: &Mat3) -> bool {
    let m = &to_xyz.m;
    m[0][1] == 0.0
        && m[0][2] == 0.0
        && m[1][0] == 0.0
        && m[1][2] == 0.0
        && m[2][0] == 0.0
        && m[2][1] == 0.0
}

fn is_srgb(
    primaries: &[f32; 6],
    white_point: &[f32; 2],
    oetf: &Curve,
    eotf: &Curve,
    min: f32,
    max: f32,
    id: i32,
) -> bool {
    if id == 0 {
        return true;
    }
    if !compare(primaries, &SRGB_PRIMARIES) || !compare(white_point, &ILLUMINANT_D65) {
        return false;
    }
    if min != 0.0 || max != 1.0 {
        return false;
    }

    let srgb_oetf = Curve::RcpResponse(presets::SRGB);
    let srgb_eotf = Curve::Response(presets::SRGB);

    let mut x = 0.0;
    while x <= 1.0 {
        if (oetf.eval(x) - srgb_oetf.eval(x)).abs() > 1e-3 {
            return false;
        }
        if (eotf.eval(x) - srgb_eotf.eval(x)).abs() > 1e-3 {
            return false;
        }
        x += 1.0 / 255.0;
    }
    true
}

fn is_wide_gamut(primaries: &[f32; 6], min: f32, max: f32) -> bool {
    (area(primaries) / area(&NTSC_1953_PRIMARIES) > 0.9 && contains(primaries, &SRGB_PRIMARIES))
        || (min < 0.0 && max > 1.0)
}

fn area(primaries: &[f32; 6]) -> f32 {
    let [rx, ry, gx, gy, bx, by] = *primaries;
    let det = rx * gy + ry * bx + gx * by - gy * bx - ry * gx - rx * by;
    (0.5 * det).abs()
}

fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

// True if the triangle p2 lies inside the triangle p1, testing each
// vertex of p1 against the adjacent edges of p2.
fn contains(p1: &[f32; 6], p2: &[f32; 6]) -> bool {
    // p1 translated so each p2 vertex is the origin
    let p0 = [
        p1[0] - p2[0],
        p1[1] - p2[1],
        p1[2] - p2[2],
        p1[3] - p2[3],
        p1[4] - p2[4],
        p1[5] - p2[5],
    ];
    if cross(p0[0], p0[1], p2[0] - p2[4], p2[1] - p2[5]) < 0.0
        || cross(p2[0] - p2[2], p2[1] - p2[3], p0[0], p0[1]) < 0.0
    {
        return false;
    }
    if cross(p0[2], p0[3], p2[2] - p2[0], p2[3] - p2[1]) < 0.0
        || cross(p2[2] - p2[4], p2[3] - p2[5], p0[2], p0[3]) < 0.0
    {
        return false;
    }
    if cross(p0[4], p0[5], p2[4] - p2[2], p2[5] - p2[3]) < 0.0
        || cross(p2[4] - p2[0], p2[5] - p2[1], p0[4], p0[5]) < 0.0
    {
        return false;
    }
    true
}

fn compute_primaries(to_xyz: &Mat3) -> [f32; 6] {
    let r = to_xyz.col(0);
    let g = to_xyz.col(1);
    let b = to_xyz.col(2);

    let r_sum = r.x + r.y + r.z;
    let g_sum = g.x + g.y + g.z;
    let b_sum = b.x + b.y + b.z;

    [
        r.x / r_sum,
        r.y / r_sum,
        g.x / g_sum,
        g.y / g_sum,
        b.x / b_sum,
        b.y / b_sum,
    ]
}

fn compute_white_point(to_xyz: &Mat3) -> [f32; 2] {
    let w = *to_xyz * Vec3::ONE;
    let sum = w.x + w.y + w.z;
    [w.x / sum, w.y / sum]
}

fn xy_primaries(primaries: &[f32]) -> [f32; 6] {
    if primaries.len() == 9 {
        let mut xy = [0.0; 6];
        for i in 0..3 {
            let sum = primaries[3 * i] + primaries[3 * i + 1] + primaries[3 * i + 2];
            xy[2 * i] = primaries[3 * i] / sum;
            xy[2 * i + 1] = primaries[3 * i + 1] / sum;
        }
        xy
    } else {
        [
            primaries[0],
            primaries[1],
            primaries[2],
            primaries[3],
            primaries[4],
            primaries[5],
        ]
    }
}

fn xy_white_point(white_point: &[f32]) -> [f32; 2] {
    if white_point.len() == 3 {
        let sum = white_point[0] + white_point[1] + white_point[2];
        [white_point[0] / sum, white_point[1] / sum]
    } else {
        [white_point[0], white_point[1]]
    }
}

// Derives the RGB-to-XYZ transform whose columns are the primaries'
// XYZ coordinates, with per-primary luminances solved so the all-ones
// tuple lands on the white point at unit luminance.
fn compute_xyz_matrix(primaries: &[f32; 6], white_point: &[f32; 2]) -> Mat3 {
    let [rx, ry, gx, gy, bx, by] = *primaries;
    let [wx, wy] = *white_point;

    let one_rx_ry = (1.0 - rx) / ry;
    let one_gx_gy = (1.0 - gx) / gy;
    let one_bx_by = (1.0 - bx) / by;
    let one_wx_wy = (1.0 - wx) / wy;

    let rx_ry = rx / ry;
    let gx_gy = gx / gy;
    let bx_by = bx / by;
    let wx_wy = wx / wy;

    let b_y = ((one_wx_wy - one_rx_ry) * (gx_gy - rx_ry)
        - (wx_wy - rx_ry) * (one_gx_gy - one_rx_ry))
        / ((one_bx_by - one_rx_ry) * (gx_gy - rx_ry) - (bx_by - rx_ry) * (one_gx_gy - one_rx_ry));
    let g_y = (wx_wy - rx_ry - b_y * (bx_by - rx_ry)) / (gx_gy - rx_ry);
    let r_y = 1.0 - g_y - b_y;

    let r_y_ry = r_y / ry;
    let g_y_gy = g_y / gy;
    let b_y_by = b_y / by;

    Mat3::from_cols([
        [r_y_ry * rx, r_y, r_y_ry * (1.0 - rx - ry)],
        [g_y_gy * gx, g_y, g_y_gy * (1.0 - gx - gy)],
        [b_y_by * bx, b_y, b_y_by * (1.0 - bx - by)],
    ])
}
