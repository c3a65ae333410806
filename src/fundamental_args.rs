//! # Fundamental arguments of the ELP2000 theory
//!
//! Every periodic term of the theory is the sine of an integer combination of a handful of
//! slowly varying angles: the Delaunay arguments of the Moon (`D`, `l′`, `l`, `F`), the mean
//! longitudes of the planets (`Me`, `V`, `T`, `Ma`, `J`, `S`, `U`, `N`) and the mean longitude
//! of the Moon `W1`. This module evaluates them as polynomials in Julian centuries since J2000.
//!
//! ## Units
//!
//! * Angles are kept in **arcseconds**; radians only appear where a trigonometric function is
//!   applied (see [`arcsec_to_rad`](crate::conversion::arcsec_to_rad)).
//! * Rates are the closed-form derivative of the same polynomial, in **arcseconds per Julian
//!   century**.
//!
//! ## Precision tiers
//!
//! The main problem (tables 1–3) uses the full quartic Delaunay arguments. The perturbation
//! tables use their linear part only, and the planetary longitudes are linear as well. `W1` is
//! always quartic.
//!
//! ## See also
//! ------------
//! * [`ArgumentRule`](crate::dispatch::ArgumentRule) – how a table combines these angles.
//! * [`evaluate_table`](crate::series::evaluate_table) – the series summation consuming them.

use crate::{
    constants::{ArcSec, JulianCentury, PRECESSION},
    conversion::dms_to_arcsec,
};

const MAX_DEGREE: usize = 4;

/// Polynomial in Julian centuries, with coefficients in arcseconds (per century power).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: [ArcSec; 5],
    degree: usize,
}

impl Polynomial {
    /// Build a polynomial from its coefficients, constant term first.
    ///
    /// Only the terms up to `degree` are evaluated. A degree above 4 is clamped to 4.
    pub const fn new(coefficients: [ArcSec; 5], degree: usize) -> Self {
        Polynomial {
            coefficients,
            degree: if degree > MAX_DEGREE { MAX_DEGREE } else { degree },
        }
    }

    /// The constant and linear terms only.
    pub const fn linear(&self) -> Self {
        Polynomial::new(self.coefficients, 1)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Evaluate the polynomial and its derivative at `t`.
    ///
    /// Arguments
    /// -----------------
    /// * `t`: time in Julian centuries since J2000
    ///
    /// Return
    /// ----------
    /// * an [`Angle`] holding the value (arcsec) and the rate (arcsec / century)
    pub fn evaluate(&self, t: JulianCentury) -> Angle {
        let c = &self.coefficients;

        let mut value = c[0];
        let mut rate = 0.0;
        for k in 1..=self.degree {
            value += c[k] * t.powi(k as i32);
            rate += c[k] * k as f64 * t.powi(k as i32 - 1);
        }

        Angle { value, rate }
    }
}

/// An angle and its time derivative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    /// Value in arcseconds
    pub value: ArcSec,
    /// Rate in arcseconds per Julian century
    pub rate: ArcSec,
}

// -------------------------------------------------------------------------------------------------
// Polynomials of the theory
// -------------------------------------------------------------------------------------------------

/// Mean elongation of the Moon from the Sun
pub const D: Polynomial = Polynomial::new(
    [
        dms_to_arcsec(297.0, 51.0, 0.73512),
        1602961601.4603,
        -5.8681,
        0.006595,
        -0.00003184,
    ],
    4,
);

/// Mean anomaly of the Sun
pub const L_PRIME: Polynomial = Polynomial::new(
    [
        dms_to_arcsec(357.0, 31.0, 44.79306),
        129596581.0474,
        -0.5529,
        0.000147,
        0.0,
    ],
    3,
);

/// Mean anomaly of the Moon
pub const L: Polynomial = Polynomial::new(
    [
        dms_to_arcsec(134.0, 57.0, 48.28096),
        1717915923.4728,
        32.3893,
        0.051651,
        -0.00024471,
    ],
    4,
);

/// Argument of latitude of the Moon
pub const F: Polynomial = Polynomial::new(
    [
        dms_to_arcsec(93.0, 16.0, 19.55755),
        1739527263.0983,
        -12.2505,
        -0.001021,
        0.00000417,
    ],
    4,
);

/// Mean longitude of the Moon, referred to the mean equinox of J2000
pub const W1: Polynomial = Polynomial::new(
    [
        dms_to_arcsec(218.0, 18.0, 59.95571),
        1732559343.73604,
        -5.8883,
        0.006604,
        -0.00003169,
    ],
    4,
);

const fn planet(deg: f64, min: f64, sec: f64, rate: ArcSec) -> Polynomial {
    Polynomial::new([dms_to_arcsec(deg, min, sec), rate, 0.0, 0.0, 0.0], 1)
}

/// Mean longitude of Mercury
pub const MERCURY: Polynomial = planet(252.0, 15.0, 3.25986, 538101628.68898);
/// Mean longitude of Venus
pub const VENUS: Polynomial = planet(181.0, 58.0, 47.28305, 210664136.43355);
/// Mean longitude of the Earth-Moon barycenter (`T`)
pub const EARTH: Polynomial = planet(100.0, 27.0, 59.22059, 129597742.2758);
/// Mean longitude of Mars
pub const MARS: Polynomial = planet(355.0, 25.0, 59.78866, 68905077.59284);
/// Mean longitude of Jupiter
pub const JUPITER: Polynomial = planet(34.0, 21.0, 5.34212, 10925660.42861);
/// Mean longitude of Saturn
pub const SATURN: Polynomial = planet(50.0, 4.0, 38.89694, 4399609.65932);
/// Mean longitude of Uranus
pub const URANUS: Polynomial = planet(314.0, 3.0, 18.01841, 1542481.19393);
/// Mean longitude of Neptune, 304°20′55.19575″ as published for ELP2000-82B
pub const NEPTUNE: Polynomial = planet(304.0, 20.0, 55.19575, 786550.32074);

// -------------------------------------------------------------------------------------------------
// Evaluated argument sets
// -------------------------------------------------------------------------------------------------

/// The four Delaunay arguments of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DelaunayArguments {
    pub d: Angle,
    pub l_prime: Angle,
    pub l: Angle,
    pub f: Angle,
}

impl DelaunayArguments {
    fn quartic(t: JulianCentury) -> Self {
        DelaunayArguments {
            d: D.evaluate(t),
            l_prime: L_PRIME.evaluate(t),
            l: L.evaluate(t),
            f: F.evaluate(t),
        }
    }

    fn linear(t: JulianCentury) -> Self {
        DelaunayArguments {
            d: D.linear().evaluate(t),
            l_prime: L_PRIME.linear().evaluate(t),
            l: L.linear().evaluate(t),
            f: F.linear().evaluate(t),
        }
    }
}

/// Mean longitudes of the planets, `T` being the Earth-Moon barycenter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanetaryArguments {
    pub mercury: Angle,
    pub venus: Angle,
    pub earth: Angle,
    pub mars: Angle,
    pub jupiter: Angle,
    pub saturn: Angle,
    pub uranus: Angle,
    pub neptune: Angle,
}

/// Every fundamental argument needed by the 36 tables, at one instant.
///
/// Fields
/// -----------------
/// * `main_problem` – quartic Delaunay arguments, used by tables 1–3.
/// * `delaunay` – linear Delaunay arguments, used by every perturbation table.
/// * `planets` – linear planetary mean longitudes, used by tables 10–21.
/// * `w1` – quartic mean longitude of the Moon.
/// * `z` – `W1 + p·t`, the mean longitude with the general precession added back, used by
///   tables 4–9.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FundamentalArguments {
    pub main_problem: DelaunayArguments,
    pub delaunay: DelaunayArguments,
    pub planets: PlanetaryArguments,
    pub w1: Angle,
    pub z: Angle,
}

impl FundamentalArguments {
    /// Evaluate all fundamental arguments at `t` (Julian centuries since J2000).
    pub fn at(t: JulianCentury) -> Self {
        let w1 = W1.evaluate(t);
        let z = Angle {
            value: w1.value + PRECESSION * t,
            rate: w1.rate + PRECESSION,
        };

        FundamentalArguments {
            main_problem: DelaunayArguments::quartic(t),
            delaunay: DelaunayArguments::linear(t),
            planets: PlanetaryArguments {
                mercury: MERCURY.evaluate(t),
                venus: VENUS.evaluate(t),
                earth: EARTH.evaluate(t),
                mars: MARS.evaluate(t),
                jupiter: JUPITER.evaluate(t),
                saturn: SATURN.evaluate(t),
                uranus: URANUS.evaluate(t),
                neptune: NEPTUNE.evaluate(t),
            },
            w1,
            z,
        }
    }
}
