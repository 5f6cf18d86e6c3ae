//! Evaluable transfer curves.
//!
//! A [`Curve`] is one scalar function of one variable, tagged by family
//! and direction. An RGB color space holds two of them, one per
//! direction, instead of boxed closures; this keeps curves comparable,
//! copyable, and cheap to dispatch.
//!
//! # Families
//!
//! - **Piecewise gamma** ([`Curve::Response`] / [`Curve::RcpResponse`]):
//!   the ICC 7-parameter model. The `Abs*` variants mirror the curve
//!   around zero for spaces whose range includes negative values.
//! - **HLG** and **PQ**: HDR curves whose parameters live in the same
//!   seven fields with remapped meanings, following Skia's tagged
//!   packing. The decode direction reads the fields directly; the
//!   encode direction inverts and negates them in place.
//!
//! All evaluation is in `f64`; callers cast to `f32` at API boundaries.
//! No domain clamping happens here.

use crate::TransferParameters;

/// A transfer curve in one direction, evaluable via [`Curve::eval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// The identity function.
    Identity,
    /// A pure power curve `x^g`.
    Gamma(f64),
    /// Piecewise gamma, decode direction (encoded signal to linear).
    Response(TransferParameters),
    /// Piecewise gamma, encode direction (linear to encoded signal).
    RcpResponse(TransferParameters),
    /// Sign-mirrored decode: `sign(x) * Response(|x|)`.
    AbsResponse(TransferParameters),
    /// Sign-mirrored encode: `sign(x) * RcpResponse(|x|)`.
    AbsRcpResponse(TransferParameters),
    /// HLG encode (linear scene light to signal).
    HlgOetf(TransferParameters),
    /// HLG decode (signal to linear scene light).
    HlgEotf(TransferParameters),
    /// PQ encode (linear display light to signal).
    PqOetf(TransferParameters),
    /// PQ decode (signal to linear display light).
    PqEotf(TransferParameters),
}

impl Curve {
    /// Selects the encode-direction curve for a parameter tuple.
    pub fn oetf_of(params: &TransferParameters) -> Self {
        if params.is_hlgish() {
            Self::HlgOetf(*params)
        } else if params.is_pqish() {
            Self::PqOetf(*params)
        } else {
            Self::RcpResponse(*params)
        }
    }

    /// Selects the decode-direction curve for a parameter tuple.
    ///
    /// PQ parameter packings decode through the encode-direction
    /// rational as well; only registry spaces pair [`Curve::PqOetf`]
    /// with [`Curve::PqEotf`] explicitly.
    pub fn eotf_of(params: &TransferParameters) -> Self {
        if params.is_hlgish() {
            Self::HlgEotf(*params)
        } else if params.is_pqish() {
            Self::PqOetf(*params)
        } else {
            Self::Response(*params)
        }
    }

    /// Evaluates the curve at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Gamma(g) => x.powf(*g),
            Self::Response(p) => response(x, p),
            Self::RcpResponse(p) => rcp_response(x, p),
            Self::AbsResponse(p) => response(x.abs(), p).copysign(x),
            Self::AbsRcpResponse(p) => rcp_response(x.abs(), p).copysign(x),
            Self::HlgOetf(p) => hlg_oetf(x, p),
            Self::HlgEotf(p) => hlg_eotf(x, p),
            Self::PqOetf(p) => pq_oetf(x, p),
            Self::PqEotf(p) => pq_eotf(x, p),
        }
    }

    /// True for the identity curve.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

// Piecewise gamma response. With e = f = 0 this reduces to the
// 5-parameter form.
#[inline]
fn response(x: f64, p: &TransferParameters) -> f64 {
    if x >= p.d {
        (p.a * x + p.b).powf(p.g) + p.e
    } else {
        p.c * x + p.f
    }
}

// Reciprocal piecewise gamma response.
#[inline]
fn rcp_response(x: f64, p: &TransferParameters) -> f64 {
    if x >= p.d * p.c {
        ((x - p.e).powf(1.0 / p.g) - p.b) / p.a
    } else {
        (x - p.f) / p.c
    }
}

fn hlg_oetf(x: f64, p: &TransferParameters) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x * sign;

    // Unpack the packed fields, inverting R, G, and a.
    let r = 1.0 / p.a;
    let g = 1.0 / p.b;
    let a = 1.0 / p.c;
    let b = p.d;
    let c = p.e;
    let k = p.f + 1.0;

    let x = x / k;
    sign * if x <= 1.0 {
        r * x.powf(g)
    } else {
        a * (x - b).ln() + c
    }
}

fn hlg_eotf(x: f64, p: &TransferParameters) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x * sign;

    let r = p.a;
    let g = p.b;
    let a = p.c;
    let b = p.d;
    let c = p.e;
    let k = p.f + 1.0;

    k * sign
        * if x * r <= 1.0 {
            (x * r).powf(g)
        } else {
            ((x - c) * a).exp() + b
        }
}

fn pq_oetf(x: f64, p: &TransferParameters) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x * sign;

    let a = -p.a;
    let b = p.d;
    let c = 1.0 / p.f;
    let d = p.b;
    let e = -p.e;
    let f = 1.0 / p.c;

    let xc = x.powf(c);
    let tmp = (a + b * xc).max(0.0);
    sign * (tmp / (d + e * xc)).powf(f)
}

fn pq_eotf(x: f64, p: &TransferParameters) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x * sign;

    let xc = x.powf(p.c);
    let tmp = (p.a + p.b * xc).max(0.0);
    sign * (tmp / (p.d + p.e * xc)).powf(p.f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn test_identity() {
        assert_eq!(Curve::Identity.eval(0.42), 0.42);
    }

    #[test]
    fn test_gamma() {
        let g = Curve::Gamma(2.2);
        assert!((g.eval(0.5) - 0.5f64.powf(2.2)).abs() < 1e-12);
    }

    #[test]
    fn test_piecewise_roundtrip() {
        let p = presets::SRGB;
        let eotf = Curve::Response(p);
        let oetf = Curve::RcpResponse(p);
        for i in 0..=100 {
            let x = i as f64 / 100.0;
            let rt = oetf.eval(eotf.eval(x));
            assert!((rt - x).abs() < 1e-9, "x = {x}, roundtrip = {rt}");
        }
    }

    #[test]
    fn test_abs_variants_mirror_sign() {
        let p = presets::SRGB;
        let eotf = Curve::AbsResponse(p);
        assert!((eotf.eval(-0.5) + eotf.eval(0.5)).abs() < 1e-12);
        let oetf = Curve::AbsRcpResponse(p);
        assert!((oetf.eval(-0.5) + oetf.eval(0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_hlg_roundtrip() {
        let p = presets::BT2020_HLG;
        let oetf = Curve::HlgOetf(p);
        let eotf = Curve::HlgEotf(p);
        for i in 1..=100 {
            let x = i as f64 / 100.0;
            let rt = oetf.eval(eotf.eval(x));
            assert!((rt - x).abs() < 1e-6, "x = {x}, roundtrip = {rt}");
        }
    }

    #[test]
    fn test_hlg_signal_anchors() {
        // In this packing, scene light is normalized so that signal 0.5
        // decodes to 1.0 and full signal decodes to 12.0, both scaled
        // by K = f + 1.
        let p = presets::BT2020_HLG;
        let k = p.f + 1.0;
        let half = Curve::HlgEotf(p).eval(0.5);
        assert!((half / k - 1.0).abs() < 1e-6, "half = {half}");
        let full = Curve::HlgEotf(p).eval(1.0);
        assert!((full / k - 12.0).abs() < 1e-3, "full = {full}");
    }

    #[test]
    fn test_pq_explicit_pair_inverts() {
        let p = presets::BT2020_PQ;
        let oetf = Curve::PqOetf(p);
        let eotf = Curve::PqEotf(p);
        for i in 1..=100 {
            let x = i as f64 / 100.0;
            let rt = eotf.eval(oetf.eval(x));
            assert!((rt - x).abs() < 1e-6, "x = {x}, roundtrip = {rt}");
        }
    }

    #[test]
    fn test_pq_parameter_path_is_not_an_inverse() {
        // Both directions derived from a PQish tuple evaluate the
        // encode-direction rational, so composing them does not
        // round-trip. This asymmetry is deliberate behavior.
        let p = presets::BT2020_PQ;
        let oetf = Curve::oetf_of(&p);
        let eotf = Curve::eotf_of(&p);
        assert_eq!(oetf, eotf);
        let x = 0.5;
        let rt = eotf.eval(oetf.eval(x));
        assert!((rt - x).abs() > 1e-3, "unexpected roundtrip: {rt}");
    }

    #[test]
    fn test_hlg_parameter_path_pairs_correctly() {
        let p = presets::BT2020_HLG;
        assert_eq!(Curve::oetf_of(&p), Curve::HlgOetf(p));
        assert_eq!(Curve::eotf_of(&p), Curve::HlgEotf(p));
    }
}
