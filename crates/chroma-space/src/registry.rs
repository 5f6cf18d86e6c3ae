//! The named color space registry.
//!
//! A process-wide immutable table mapping [`Named`] values and small
//! integer ids to canonical [`ColorSpace`] instances. The table is
//! built once behind a [`OnceLock`] on first access and read-only
//! thereafter; packed colors embed the table slot in their low 6 bits.
//!
//! Lookup asymmetry: [`get`] by enum silently falls back to sRGB for
//! the declared-but-unregistered entries, while [`get_by_id`] reports
//! an error for any unoccupied slot.

use crate::rgb::{
    BT2020_PRIMARIES, DCI_P3_PRIMARIES, NTSC_1953_PRIMARIES, RgbColorSpace, SRGB_PRIMARIES,
};
use crate::space::{ColorSpace, LabColorSpace, XyzColorSpace, adapt};
use chroma_core::{Error, Named, Result};
use chroma_math::{
    Adaptation, ILLUMINANT_C, ILLUMINANT_D50, ILLUMINANT_D50_XYZ, ILLUMINANT_D60, ILLUMINANT_D65,
    Mat3, compare,
};
use chroma_transfer::{Curve, TransferParameters, presets};
use std::sync::OnceLock;

static REGISTRY: OnceLock<Vec<ColorSpace>> = OnceLock::new();

fn spaces() -> &'static [ColorSpace] {
    REGISTRY
        .get_or_init(|| build().expect("the registry is built from standards constants"))
}

/// Returns the canonical instance of a named color space.
///
/// [`Named::OkLab`] and [`Named::DisplayBt2020`] are declared but never
/// populated; looking them up returns sRGB.
pub fn get(name: Named) -> &'static ColorSpace {
    let table = spaces();
    table
        .get(name.id() as usize)
        .unwrap_or(&table[Named::Srgb.id() as usize])
}

/// Returns the color space occupying a packed-color id slot.
///
/// # Errors
///
/// [`Error::UnknownId`] if no registered space carries this id.
pub fn get_by_id(id: i32) -> Result<&'static ColorSpace> {
    usize::try_from(id)
        .ok()
        .and_then(|index| spaces().get(index))
        .ok_or(Error::UnknownId { id })
}

/// Finds the registered RGB space whose D50-adapted transform and
/// transfer parameters match the queried values within tolerance.
///
/// This is a linear scan; the registry holds fewer than twenty entries.
pub fn match_space(
    to_xyz_d50: &Mat3,
    function: &TransferParameters,
) -> Option<&'static ColorSpace> {
    for space in spaces() {
        let ColorSpace::Rgb(_) = space else { continue };
        let Ok(ColorSpace::Rgb(adapted)) =
            adapt(space, &ILLUMINANT_D50_XYZ.to_array(), Adaptation::Bradford)
        else {
            continue;
        };
        let params_match = adapted
            .raw_transfer_parameters()
            .is_some_and(|p| function.approx_eq(&p));
        if params_match && mat_approx_eq(to_xyz_d50, &adapted.transform()) {
            return Some(space);
        }
    }
    None
}

fn mat_approx_eq(a: &Mat3, b: &Mat3) -> bool {
    for i in 0..3 {
        if !compare(&a.m[i], &b.m[i]) {
            return false;
        }
    }
    true
}

fn build() -> Result<Vec<ColorSpace>> {
    let rgb = |space: RgbColorSpace| ColorSpace::Rgb(space);

    Ok(vec![
        rgb(RgbColorSpace::with_params_id(
            "sRGB IEC61966-2.1".into(),
            &SRGB_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            presets::SRGB,
            Named::Srgb.id(),
        )?),
        rgb(RgbColorSpace::with_gamma_range(
            "sRGB IEC61966-2.1 (Linear)".into(),
            &SRGB_PRIMARIES,
            &ILLUMINANT_D65,
            1.0,
            0.0,
            1.0,
            Named::LinearSrgb.id(),
        )?),
        rgb(RgbColorSpace::from_parts(
            "scRGB-nl IEC 61966-2-2:2003".into(),
            &SRGB_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            Curve::AbsRcpResponse(presets::SRGB),
            Curve::AbsResponse(presets::SRGB),
            -0.799,
            2.399,
            Some(presets::SRGB),
            Named::ExtendedSrgb.id(),
        )?),
        rgb(RgbColorSpace::with_gamma_range(
            "scRGB IEC 61966-2-2:2003".into(),
            &SRGB_PRIMARIES,
            &ILLUMINANT_D65,
            1.0,
            -0.5,
            7.499,
            Named::LinearExtendedSrgb.id(),
        )?),
        rgb(RgbColorSpace::with_params_id(
            "Rec. ITU-R BT.709-5".into(),
            &SRGB_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            presets::SMPTE_170M,
            Named::Bt709.id(),
        )?),
        rgb(RgbColorSpace::with_params_id(
            "Rec. ITU-R BT.2020-1".into(),
            &BT2020_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            presets::BT2020,
            Named::Bt2020.id(),
        )?),
        rgb(RgbColorSpace::with_gamma_range(
            "SMPTE RP 431-2-2007 DCI (P3)".into(),
            &DCI_P3_PRIMARIES,
            &[0.314, 0.351],
            2.6,
            0.0,
            1.0,
            Named::DciP3.id(),
        )?),
        rgb(RgbColorSpace::with_params_id(
            "Display P3".into(),
            &DCI_P3_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            presets::SRGB,
            Named::DisplayP3.id(),
        )?),
        rgb(RgbColorSpace::with_params_id(
            "NTSC (1953)".into(),
            &NTSC_1953_PRIMARIES,
            &ILLUMINANT_C,
            None,
            presets::SMPTE_170M,
            Named::Ntsc1953.id(),
        )?),
        rgb(RgbColorSpace::with_params_id(
            "SMPTE-C RGB".into(),
            &[0.630, 0.340, 0.310, 0.595, 0.155, 0.070],
            &ILLUMINANT_D65,
            None,
            presets::SMPTE_170M,
            Named::SmpteC.id(),
        )?),
        rgb(RgbColorSpace::with_gamma_range(
            "Adobe RGB (1998)".into(),
            &[0.64, 0.33, 0.21, 0.71, 0.15, 0.06],
            &ILLUMINANT_D65,
            2.2,
            0.0,
            1.0,
            Named::AdobeRgb.id(),
        )?),
        rgb(RgbColorSpace::with_params_id(
            "ROMM RGB ISO 22028-2:2013".into(),
            &[0.7347, 0.2653, 0.1596, 0.8404, 0.0366, 0.0001],
            &ILLUMINANT_D50,
            None,
            presets::PRO_PHOTO_RGB,
            Named::ProPhotoRgb.id(),
        )?),
        rgb(RgbColorSpace::with_gamma_range(
            "SMPTE ST 2065-1:2012 ACES".into(),
            &[0.73470, 0.26530, 0.0, 1.0, 0.00010, -0.0770],
            &ILLUMINANT_D60,
            1.0,
            -65504.0,
            65504.0,
            Named::Aces.id(),
        )?),
        rgb(RgbColorSpace::with_gamma_range(
            "Academy S-2014-004 ACEScg".into(),
            &[0.713, 0.293, 0.165, 0.830, 0.128, 0.044],
            &ILLUMINANT_D60,
            1.0,
            -65504.0,
            65504.0,
            Named::AcesCg.id(),
        )?),
        ColorSpace::Xyz(XyzColorSpace::new("Generic XYZ", Named::CieXyz.id())?),
        ColorSpace::Lab(LabColorSpace::new("Generic L*a*b*", Named::CieLab.id())?),
        rgb(RgbColorSpace::from_parts(
            "Hybrid Log Gamma encoding".into(),
            &BT2020_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            Curve::HlgOetf(presets::BT2020_HLG),
            Curve::HlgEotf(presets::BT2020_HLG),
            0.0,
            1.0,
            Some(presets::BT2020_HLG),
            Named::Bt2020Hlg.id(),
        )?),
        rgb(RgbColorSpace::from_parts(
            "Perceptual Quantizer encoding".into(),
            &BT2020_PRIMARIES,
            &ILLUMINANT_D65,
            None,
            Curve::PqOetf(presets::BT2020_PQ),
            Curve::PqEotf(presets::BT2020_PQ),
            0.0,
            1.0,
            Some(presets::BT2020_PQ),
            Named::Bt2020Pq.id(),
        )?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::Model;

    #[test]
    fn test_registry_slots_match_ids() {
        for (index, space) in spaces().iter().enumerate() {
            assert_eq!(space.id(), index as i32, "slot {index}: {}", space.name());
        }
        assert_eq!(spaces().len(), 18);
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(get(Named::Srgb).name(), "sRGB IEC61966-2.1");
        assert_eq!(get(Named::ExtendedSrgb).name(), "scRGB-nl IEC 61966-2-2:2003");
        assert_eq!(get(Named::Aces).name(), "SMPTE ST 2065-1:2012 ACES");
        assert_eq!(get(Named::CieXyz).model(), Model::Xyz);
        assert_eq!(get(Named::CieLab).model(), Model::Lab);
    }

    #[test]
    fn test_unregistered_names_fall_back_to_srgb() {
        assert_eq!(get(Named::OkLab), get(Named::Srgb));
        assert_eq!(get(Named::DisplayBt2020), get(Named::Srgb));
    }

    #[test]
    fn test_id_lookup_errors_on_empty_slots() {
        assert!(get_by_id(0).is_ok());
        assert_eq!(get_by_id(17).unwrap().name(), "Perceptual Quantizer encoding");
        assert!(matches!(get_by_id(18), Err(Error::UnknownId { id: 18 })));
        assert!(matches!(get_by_id(42), Err(Error::UnknownId { id: 42 })));
        assert!(get_by_id(-1).is_err());
    }

    #[test]
    fn test_srgb_flags() {
        let srgb = get(Named::Srgb);
        assert!(srgb.is_srgb());
        assert!(!srgb.is_wide_gamut());

        // Display P3 shares the sRGB curve but not the primaries
        let p3 = get(Named::DisplayP3);
        assert!(!p3.is_srgb());
        assert!(p3.is_wide_gamut());

        // Extended ranges count as wide gamut on range alone
        assert!(get(Named::LinearExtendedSrgb).is_wide_gamut());
        assert!(get(Named::Aces).is_wide_gamut());
    }

    #[test]
    fn test_component_ranges() {
        assert_eq!(get(Named::Srgb).min_value(0), 0.0);
        assert_eq!(get(Named::Srgb).max_value(0), 1.0);
        assert_eq!(get(Named::ExtendedSrgb).min_value(0), -0.799);
        assert_eq!(get(Named::ExtendedSrgb).max_value(0), 2.399);
        assert_eq!(get(Named::LinearExtendedSrgb).min_value(1), -0.5);
        assert_eq!(get(Named::LinearExtendedSrgb).max_value(1), 7.499);
        assert_eq!(get(Named::Aces).max_value(2), 65504.0);
    }

    #[test]
    fn test_match_finds_srgb() {
        let srgb = get(Named::Srgb);
        let adapted = adapt(srgb, &ILLUMINANT_D50_XYZ.to_array(), Adaptation::Bradford).unwrap();
        let d50_transform = adapted.as_rgb().unwrap().transform();

        let found = match_space(&d50_transform, &presets::SRGB).unwrap();
        assert_eq!(found, srgb);
    }

    #[test]
    fn test_match_rejects_mismatched_curve() {
        let srgb = get(Named::Srgb);
        let adapted = adapt(srgb, &ILLUMINANT_D50_XYZ.to_array(), Adaptation::Bradford).unwrap();
        let d50_transform = adapted.as_rgb().unwrap().transform();

        // Right matrix, wrong curve
        let gamma = TransferParameters::new(1.0, 0.0, 0.0, 0.0, 2.2).unwrap();
        assert!(match_space(&d50_transform, &gamma).is_none());
    }

    #[test]
    fn test_pro_photo_is_d50_native() {
        let romm = get(Named::ProPhotoRgb).as_rgb().unwrap();
        assert!(compare(&romm.white_point(), &ILLUMINANT_D50));
    }
}
