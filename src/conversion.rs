use crate::constants::{ArcSec, Degree, Radian, ARCSEC_PER_DEGREE};

/// Convert degrees to radians, as `deg / 180 · π`.
#[inline]
pub fn deg_to_rad(deg: Degree) -> Radian {
    deg / 180.0 * std::f64::consts::PI
}

/// Convert arcseconds to radians, going through degrees.
#[inline]
pub fn arcsec_to_rad(arcsec: ArcSec) -> Radian {
    deg_to_rad(arcsec / ARCSEC_PER_DEGREE)
}

/// Sexagesimal angle (degrees, arcminutes, arcseconds) to arcseconds.
///
/// Arguments
/// ---------
/// * `deg`: whole degrees
/// * `min`: whole arcminutes
/// * `sec`: arcseconds, with fraction
///
/// Return
/// ------
/// * the angle in arcseconds, `deg·3600 + min·60 + sec`
pub const fn dms_to_arcsec(deg: f64, min: f64, sec: f64) -> ArcSec {
    deg * 3600.0 + min * 60.0 + sec
}
