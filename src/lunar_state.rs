//! # Lunar state assembly
//!
//! Sums the 36 tables into the Moon's ecliptic longitude, latitude and distance, then turns
//! these spherical coordinates into a Cartesian position and velocity.
//!
//! Overview
//! -----------------
//! 1. [`accumulate`] evaluates the 12 (longitude, latitude, distance) table triplets at `t` and
//!    sums them into [`Perturbations`] (arcseconds and kilometers, rates per Julian century).
//! 2. [`assemble`] adds the mean longitude `W1` and converts the angles to radians, giving a
//!    [`SphericalState`].
//! 3. [`SphericalState::to_cartesian`] applies the spherical-to-Cartesian transform, with the
//!    product rule for the velocity, and rescales the rates from per century to per second.
//!
//! Units
//! -----------------
//! * `position`: kilometers (km)
//! * `velocity`: kilometers per second (km/s)
//!
//! The frame is the mean ecliptic and equinox of date of the ELP2000 theory, centered on the
//! Earth.

use std::ops::Sub;

use hifitime::Epoch;
use nalgebra::Vector3;

use crate::{
    coefficients::CoefficientStore,
    constants::{ArcSec, EphemerisSeconds, JulianCentury, Kilometer, Radian},
    conversion::arcsec_to_rad,
    dispatch::{triplets, Coordinate, TABLE_RULES},
    fundamental_args::FundamentalArguments,
    series::evaluate_table,
    time::{epoch_to_et, et_to_julian_centuries, per_century_to_per_second},
};

/// Summed table contributions, before `W1` is added.
///
/// Angles are in arcseconds, distance in kilometers, rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perturbations {
    pub longitude: ArcSec,
    pub longitude_rate: ArcSec,
    pub latitude: ArcSec,
    pub latitude_rate: ArcSec,
    pub distance: Kilometer,
    pub distance_rate: Kilometer,
}

/// Evaluate every table at `t` and sum each triplet slot into its coordinate.
///
/// Arguments
/// -----------------
/// * `store`: the loaded coefficient tables
/// * `t`: time in Julian centuries since J2000
///
/// Return
/// ----------
/// * the accumulated longitude, latitude and distance perturbations with their rates
pub fn accumulate(store: &CoefficientStore, t: JulianCentury) -> Perturbations {
    let args = FundamentalArguments::at(t);
    let tables = store.tables();
    let mut acc = Perturbations::default();

    for triplet in triplets() {
        for index in triplet {
            let rule = &TABLE_RULES[index];
            let sum = evaluate_table(&tables[index], rule.trig, rule.scale, &args, t);

            match rule.coordinate {
                Coordinate::Longitude => {
                    acc.longitude += sum.value;
                    acc.longitude_rate += sum.derivative;
                }
                Coordinate::Latitude => {
                    acc.latitude += sum.value;
                    acc.latitude_rate += sum.derivative;
                }
                Coordinate::Distance => {
                    acc.distance += sum.value;
                    acc.distance_rate += sum.derivative;
                }
            }
        }
    }

    acc
}

/// Geocentric ecliptic coordinates of the Moon and their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalState {
    pub longitude: Radian,
    pub longitude_rate: Radian,
    pub latitude: Radian,
    pub latitude_rate: Radian,
    pub distance: Kilometer,
    pub distance_rate: Kilometer,
}

/// Evaluate the theory at `t` into spherical coordinates.
///
/// The longitude is the accumulated perturbation plus the mean longitude `W1`, the latitude is
/// the accumulated perturbation alone. The distance needs no conversion.
pub fn assemble(store: &CoefficientStore, t: JulianCentury) -> SphericalState {
    let acc = accumulate(store, t);
    let w1 = FundamentalArguments::at(t).w1;

    SphericalState {
        longitude: arcsec_to_rad(acc.longitude + w1.value),
        longitude_rate: arcsec_to_rad(acc.longitude_rate + w1.rate),
        latitude: arcsec_to_rad(acc.latitude),
        latitude_rate: arcsec_to_rad(acc.latitude_rate),
        distance: acc.distance,
        distance_rate: acc.distance_rate,
    }
}

impl SphericalState {
    /// Convert to a Cartesian position (km) and velocity (km/s).
    ///
    /// Return
    /// ----------
    /// * `x = r·cosλ·cosβ`, `y = r·sinλ·cosβ`, `z = r·sinβ` and their time derivatives, divided
    ///   by the length of a Julian century in seconds.
    pub fn to_cartesian(&self) -> MoonState {
        let r = self.distance;
        let dr = self.distance_rate;
        let dlon = self.longitude_rate;
        let dlat = self.latitude_rate;

        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();

        let position = Vector3::new(
            r * cos_lon * cos_lat,
            r * sin_lon * cos_lat,
            r * sin_lat,
        );

        let velocity = Vector3::new(
            dr * cos_lon * cos_lat - r * sin_lon * cos_lat * dlon - r * cos_lon * sin_lat * dlat,
            dr * sin_lon * cos_lat + r * cos_lon * cos_lat * dlon - r * sin_lon * sin_lat * dlat,
            dr * sin_lat + r * cos_lat * dlat,
        )
        .map(per_century_to_per_second);

        MoonState { position, velocity }
    }
}

/// Geocentric Cartesian state of the Moon.
///
/// Fields
/// -----------------
/// * `position`: Cartesian position (km).
/// * `velocity`: Cartesian velocity (km/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl MoonState {
    /// Geocentric distance, in kilometers.
    pub fn distance(&self) -> Kilometer {
        self.position.norm()
    }

    /// Speed relative to the Earth, in km/s.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// The `(x, y, z, vx, vy, vz)` sextuple.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
        ]
    }
}

impl From<MoonState> for [f64; 6] {
    fn from(state: MoonState) -> Self {
        state.to_array()
    }
}

impl Sub for MoonState {
    type Output = Self;

    /// Component-wise difference of two states.
    fn sub(self, other: Self) -> Self::Output {
        MoonState {
            position: self.position - other.position,
            velocity: self.velocity - other.velocity,
        }
    }
}

impl Sub for &MoonState {
    type Output = MoonState;

    fn sub(self, other: Self) -> Self::Output {
        MoonState {
            position: self.position - other.position,
            velocity: self.velocity - other.velocity,
        }
    }
}

impl CoefficientStore {
    /// Geocentric state of the Moon at an ephemeris time.
    ///
    /// Arguments
    /// -----------------
    /// * `et`: ephemeris time, in seconds past J2000
    ///
    /// Return
    /// ----------
    /// * position in km and velocity in km/s
    pub fn get_state(&self, et: EphemerisSeconds) -> MoonState {
        self.spherical_state(et).to_cartesian()
    }

    /// Geocentric spherical coordinates of the Moon at an ephemeris time.
    pub fn spherical_state(&self, et: EphemerisSeconds) -> SphericalState {
        assemble(self, et_to_julian_centuries(et))
    }

    /// Geocentric state of the Moon at an [`Epoch`].
    pub fn state_at(&self, epoch: &Epoch) -> MoonState {
        self.get_state(epoch_to_et(epoch))
    }
}

#[cfg(test)]
mod lunar_state_test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{constants::TABLE_COUNT, fundamental_args::W1};

    fn store_with(extra: &[(usize, &str)]) -> CoefficientStore {
        let mut sources: Vec<String> = (1..=TABLE_COUNT).map(|n| format!(" ELP{n}\n")).collect();
        for (index, line) in extra {
            sources[*index].push_str(line);
            sources[*index].push('\n');
        }
        CoefficientStore::from_sources(&sources).unwrap()
    }

    #[test]
    fn test_accumulate_routes_by_coordinate() {
        let store = store_with(&[
            (0, "  0  0  0  0       10.00000"),
            (22, "  0  0  0  0  0  90.00000   2.00000"),
            (2, "  0  0  0  0   385000.00000"),
            (32, "  0  0  0  0  0  90.00000   3.00000"),
        ]);

        let acc = accumulate(&store, 0.5);
        // sin(0) longitude term contributes nothing
        assert_eq!(acc.longitude, 0.0);
        assert_relative_eq!(acc.latitude, 2.0, max_relative = 1e-15);
        assert_relative_eq!(acc.distance, 385003.0, max_relative = 1e-15);
        assert_eq!(acc.distance_rate, 0.0);
    }

    #[test]
    fn test_empty_store_follows_w1() {
        let store = store_with(&[]);
        let t = 0.25;
        let state = assemble(&store, t);
        let w1 = W1.evaluate(t);

        assert_eq!(state.longitude, arcsec_to_rad(w1.value));
        assert_eq!(state.longitude_rate, arcsec_to_rad(w1.rate));
        assert_eq!(state.latitude, 0.0);
        assert_eq!(state.distance, 0.0);
    }

    #[test]
    fn test_to_cartesian_circular_orbit() {
        let spherical = SphericalState {
            longitude: std::f64::consts::FRAC_PI_2,
            longitude_rate: 1.0,
            latitude: 0.0,
            latitude_rate: 0.0,
            distance: 1000.0,
            distance_rate: 0.0,
        };

        let state = spherical.to_cartesian();
        assert_relative_eq!(state.position.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(state.position.y, 1000.0, max_relative = 1e-12);
        assert_eq!(state.position.z, 0.0);

        let per_second = 1000.0 / 36525.0 / 86400.0;
        assert_relative_eq!(state.velocity.x, -per_second, max_relative = 1e-12);
        assert_relative_eq!(state.velocity.y, 0.0, epsilon = 1e-18);
        assert_relative_eq!(state.distance(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(state.speed(), per_second, max_relative = 1e-12);
    }

    #[test]
    fn test_to_cartesian_latitude_rate() {
        let spherical = SphericalState {
            longitude: 0.0,
            longitude_rate: 0.0,
            latitude: 0.0,
            latitude_rate: 2.0,
            distance: 10.0,
            distance_rate: 3.0,
        };

        let state = spherical.to_cartesian();
        let century = 36525.0 * 86400.0;
        assert_eq!(state.position, Vector3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(state.velocity.x, 3.0 / century, max_relative = 1e-15);
        assert_relative_eq!(state.velocity.z, 20.0 / century, max_relative = 1e-15);
    }

    #[test]
    fn test_state_array_and_difference() {
        let a = MoonState {
            position: Vector3::new(1.0, 2.0, 3.0),
            velocity: Vector3::new(4.0, 5.0, 6.0),
        };
        let b = MoonState {
            position: Vector3::new(1.0, 1.0, 1.0),
            velocity: Vector3::new(1.0, 1.0, 1.0),
        };

        assert_eq!(a.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(<[f64; 6]>::from(&a - &b), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!((a - b).position, Vector3::new(0.0, 1.0, 2.0));
    }
}
