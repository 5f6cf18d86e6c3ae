//! Standard transfer parameter tuples.
//!
//! Constants for the broadcast and print curves used by the registered
//! color spaces, plus scalar sRGB helpers for callers that only need
//! the canonical curve.

use crate::{Curve, TransferParameters};

/// sRGB (IEC 61966-2.1) piecewise curve.
///
/// # Formula
///
/// ```text
/// EOTF(x) = ((x + 0.055) / 1.055)^2.4   for x >= 0.04045
///           x / 12.92                   otherwise
/// ```
pub const SRGB: TransferParameters = TransferParameters {
    a: 1.0 / 1.055,
    b: 0.055 / 1.055,
    c: 1.0 / 12.92,
    d: 0.04045,
    e: 0.0,
    f: 0.0,
    g: 2.4,
};

/// SMPTE 170M curve, shared by BT.709, NTSC 1953, and SMPTE-C.
pub const SMPTE_170M: TransferParameters = TransferParameters {
    a: 1.0 / 1.099,
    b: 0.099 / 1.099,
    c: 1.0 / 4.5,
    d: 0.081,
    e: 0.0,
    f: 0.0,
    g: 1.0 / 0.45,
};

/// BT.2020 curve (10-bit signal constants).
pub const BT2020: TransferParameters = TransferParameters {
    a: 1.0 / 1.0993,
    b: 0.0993 / 1.0993,
    c: 1.0 / 4.5,
    d: 0.08145,
    e: 0.0,
    f: 0.0,
    g: 1.0 / 0.45,
};

/// ROMM RGB (ProPhoto) curve: gamma 1.8 with a linear toe.
pub const PRO_PHOTO_RGB: TransferParameters = TransferParameters {
    a: 1.0,
    b: 0.0,
    c: 1.0 / 16.0,
    d: 0.031248,
    e: 0.0,
    f: 0.0,
    g: 1.8,
};

/// BT.2100 HLG parameters in the tagged packing read by
/// [`Curve::HlgOetf`] and [`Curve::HlgEotf`].
pub const BT2020_HLG: TransferParameters = TransferParameters {
    a: 2.0,
    b: 2.0,
    c: 1.0 / 0.17883277,
    d: 0.28466892,
    e: 0.55991073,
    f: -0.685490157,
    g: TransferParameters::TYPE_HLGISH,
};

/// BT.2100 PQ parameters with an SDR white point of 203 nits, in the
/// tagged packing read by [`Curve::PqOetf`] and [`Curve::PqEotf`].
pub const BT2020_PQ: TransferParameters = TransferParameters {
    a: -1.555223,
    b: 1.860454,
    c: 32.0 / 2523.0,
    d: 2413.0 / 128.0,
    e: -2392.0 / 128.0,
    f: 8192.0 / 1305.0,
    g: TransferParameters::TYPE_PQISH,
};

/// Decodes an sRGB-encoded sample to linear light.
#[inline]
pub fn srgb_eotf(x: f64) -> f64 {
    Curve::Response(SRGB).eval(x)
}

/// Encodes a linear sample with the sRGB curve.
#[inline]
pub fn srgb_oetf(x: f64) -> f64 {
    Curve::RcpResponse(SRGB).eval(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_anchor_values() {
        assert!(srgb_eotf(0.0).abs() < 1e-12);
        assert!((srgb_eotf(1.0) - 1.0).abs() < 1e-9);
        // 50% gray encodes near 0.7354
        assert!((srgb_oetf(0.5) - 0.73536).abs() < 1e-4);
    }

    #[test]
    fn test_presets_pass_validation() {
        for p in [SRGB, SMPTE_170M, BT2020, PRO_PHOTO_RGB] {
            assert!(TransferParameters::new_full(p.a, p.b, p.c, p.d, p.e, p.f, p.g).is_ok());
        }
        assert!(BT2020_HLG.is_hlgish());
        assert!(BT2020_PQ.is_pqish());
    }

    #[test]
    fn test_smpte_170m_linear_segment_boundary() {
        let p = SMPTE_170M;
        let below = Curve::Response(p).eval(p.d - 1e-6);
        let above = Curve::Response(p).eval(p.d + 1e-6);
        assert!((below - above).abs() < 1e-4);
    }
}
