use hifitime::Epoch;

use crate::constants::{
    EphemerisSeconds, JulianCentury, DAYS_PER_JULIAN_CENTURY, SECONDS_PER_DAY,
};

/// Transformation from ephemeris seconds past J2000 to Julian centuries past J2000
///
/// Argument
/// --------
/// * `et`: ephemeris time in seconds past the J2000 epoch
///
/// Return
/// ------
/// * the same instant in Julian centuries of 36525 days past J2000
pub fn et_to_julian_centuries(et: EphemerisSeconds) -> JulianCentury {
    et / SECONDS_PER_DAY / DAYS_PER_JULIAN_CENTURY
}

/// Convert a rate per Julian century into a rate per second.
pub fn per_century_to_per_second(rate: f64) -> f64 {
    rate / DAYS_PER_JULIAN_CENTURY / SECONDS_PER_DAY
}

/// Transformation from an [`Epoch`] to ephemeris seconds past J2000
///
/// Argument
/// --------
/// * `epoch`: any hifitime epoch, whatever its time scale
///
/// Return
/// ------
/// * the epoch expressed as ephemeris time (ET) seconds past J2000
pub fn epoch_to_et(epoch: &Epoch) -> EphemerisSeconds {
    epoch.to_et_seconds()
}
