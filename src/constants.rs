//! # Constants and type definitions for ELP2000
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Time units (seconds per day, days per Julian century)
//! - Constants of the ELP2000 theory (precession, table count)
//! - Angle unit aliases used to keep arcseconds, degrees and radians apart
//!
//! The fundamental-argument polynomials themselves live in
//! [`fundamental_args`](crate::fundamental_args), next to the code that evaluates them.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Arcseconds per degree
pub const ARCSEC_PER_DEGREE: f64 = 3_600.0;

/// General precession in longitude at J2000, in arcseconds per Julian century
pub const PRECESSION: f64 = 5029.0966;

/// Number of coefficient tables of the ELP2000 theory (files `ELP1` to `ELP36`)
pub const TABLE_COUNT: usize = 36;

/// Number of (longitude, latitude, distance) table triplets
pub const TRIPLET_COUNT: usize = TABLE_COUNT / 3;

/// Prefix of the coefficient file names, the 1-based table number is appended
pub const TABLE_FILE_PREFIX: &str = "ELP";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Time in Julian centuries since J2000
pub type JulianCentury = f64;
/// Ephemeris time, in seconds past J2000
pub type EphemerisSeconds = f64;
