//! # Table dispatch rules
//!
//! The 36 ELP2000 tables differ in three ways only: which fundamental arguments their integer
//! multipliers apply to, whether the series is a sine or a cosine series, and whether the sum is
//! multiplied by `t` or `t²` afterwards. [`TABLE_RULES`] records these choices as data, one row
//! per table, together with the coordinate the table contributes to.
//!
//! ## Layout of the tables
//!
//! | Index   | Argument rule                          | Trig              | Post-scale |
//! |---------|----------------------------------------|-------------------|------------|
//! | 0–2     | [`ArgumentRule::MainProblem`]          | sin (2: cos)      | none       |
//! | 3–5     | [`ArgumentRule::EarthPerturbation`]    | sin               | none       |
//! | 6–8     | [`ArgumentRule::EarthPerturbation`]    | sin               | ×t         |
//! | 9–11    | [`ArgumentRule::PlanetaryLunar`]       | sin               | none       |
//! | 12–14   | [`ArgumentRule::PlanetaryLunar`]       | sin               | ×t         |
//! | 15–17   | [`ArgumentRule::PlanetarySolar`]       | sin               | none       |
//! | 18–20   | [`ArgumentRule::PlanetarySolar`]       | sin               | ×t         |
//! | 21–23   | [`ArgumentRule::Delaunay`]             | sin               | none       |
//! | 24–26   | [`ArgumentRule::Delaunay`]             | sin               | ×t         |
//! | 27–32   | [`ArgumentRule::Delaunay`]             | sin               | none       |
//! | 33–35   | [`ArgumentRule::Delaunay`]             | sin               | ×t²        |
//!
//! Tables come in consecutive (longitude, latitude, distance) triplets, see [`triplets`].

use itertools::Itertools;

use crate::{
    constants::{JulianCentury, TABLE_COUNT},
    fundamental_args::{Angle, FundamentalArguments},
    series::SeriesSum,
};

/// Which linear combination of fundamental arguments a table uses.
///
/// Each rule also fixes the record layout of its table (see
/// [`TermTable`](crate::coefficients::term_records::TermTable)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentRule {
    /// `i1·D + i2·l′ + i3·l + i4·F`, quartic arguments, no phase (tables 1–3)
    MainProblem,
    /// `i1·z + i2·D + i3·l′ + i4·l + i5·F` (tables 4–9)
    EarthPerturbation,
    /// `Me, V, T, Ma, J, S, U, N, D, l, F` (tables 10–15)
    PlanetaryLunar,
    /// `Me, V, T, Ma, J, S, U, D, l′, l, F` (tables 16–21)
    PlanetarySolar,
    /// `i2·D + i3·l′ + i4·l + i5·F`, `i1` is ignored (tables 22–36)
    Delaunay,
}

impl ArgumentRule {
    /// Number of integer multipliers stored per term, including the unused `i1` of
    /// [`ArgumentRule::Delaunay`].
    pub const fn multiplier_count(self) -> usize {
        match self {
            ArgumentRule::MainProblem => 4,
            ArgumentRule::EarthPerturbation | ArgumentRule::Delaunay => 5,
            ArgumentRule::PlanetaryLunar | ArgumentRule::PlanetarySolar => 11,
        }
    }

    /// Whether the terms carry a phase.
    pub const fn has_phase(self) -> bool {
        !matches!(self, ArgumentRule::MainProblem)
    }

    /// The fundamental arguments the multipliers of this rule apply to, in multiplier order.
    ///
    /// For [`ArgumentRule::Delaunay`] the basis starts at `i2`: the caller skips `i1`.
    pub fn basis(self, args: &FundamentalArguments) -> ArgumentBasis {
        let main = &args.main_problem;
        let del = &args.delaunay;
        let pl = &args.planets;

        match self {
            ArgumentRule::MainProblem => {
                ArgumentBasis::from_slice(&[main.d, main.l_prime, main.l, main.f])
            }
            ArgumentRule::EarthPerturbation => {
                ArgumentBasis::from_slice(&[args.z, del.d, del.l_prime, del.l, del.f])
            }
            ArgumentRule::PlanetaryLunar => ArgumentBasis::from_slice(&[
                pl.mercury, pl.venus, pl.earth, pl.mars, pl.jupiter, pl.saturn, pl.uranus,
                pl.neptune, del.d, del.l, del.f,
            ]),
            ArgumentRule::PlanetarySolar => ArgumentBasis::from_slice(&[
                pl.mercury, pl.venus, pl.earth, pl.mars, pl.jupiter, pl.saturn, pl.uranus,
                del.d, del.l_prime, del.l, del.f,
            ]),
            ArgumentRule::Delaunay => {
                ArgumentBasis::from_slice(&[del.d, del.l_prime, del.l, del.f])
            }
        }
    }
}

/// Up to eleven fundamental arguments, in the order of a rule's multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgumentBasis {
    angles: [Angle; 11],
    len: usize,
}

impl ArgumentBasis {
    fn from_slice(angles: &[Angle]) -> Self {
        let mut basis = ArgumentBasis {
            angles: [Angle::default(); 11],
            len: angles.len(),
        };
        basis.angles[..angles.len()].copy_from_slice(angles);
        basis
    }

    pub fn as_slice(&self) -> &[Angle] {
        &self.angles[..self.len]
    }
}

/// Trigonometric function of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sine,
    Cosine,
}

/// Scaling applied to a table sum once the series is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostScale {
    Identity,
    /// Multiply by `t`
    Linear,
    /// Multiply by `t²`
    Quadratic,
}

impl PostScale {
    /// Scale a series sum, propagating the derivative with the product rule.
    ///
    /// Arguments
    /// -----------------
    /// * `sum`: the raw series value and its derivative per Julian century
    /// * `t`: time in Julian centuries since J2000
    ///
    /// Return
    /// ----------
    /// * `(v, d)` for [`PostScale::Identity`], `(v·t, d·t + v)` for [`PostScale::Linear`],
    ///   `(v·t², d·t² + v·2t)` for [`PostScale::Quadratic`]
    pub fn apply(self, sum: SeriesSum, t: JulianCentury) -> SeriesSum {
        match self {
            PostScale::Identity => sum,
            PostScale::Linear => SeriesSum {
                value: sum.value * t,
                derivative: sum.derivative * t + sum.value,
            },
            PostScale::Quadratic => SeriesSum {
                value: sum.value * t.powi(2),
                derivative: sum.derivative * t.powi(2) + sum.value * 2.0 * t,
            },
        }
    }
}

/// Coordinate a table contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    /// Longitude, in arcseconds
    Longitude,
    /// Latitude, in arcseconds
    Latitude,
    /// Geocentric distance, in kilometers
    Distance,
}

/// How one table is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRule {
    pub argument: ArgumentRule,
    pub trig: Trig,
    pub scale: PostScale,
    pub coordinate: Coordinate,
}

const fn rule(argument: ArgumentRule, trig: Trig, scale: PostScale, index: usize) -> TableRule {
    let coordinate = match index % 3 {
        0 => Coordinate::Longitude,
        1 => Coordinate::Latitude,
        _ => Coordinate::Distance,
    };
    TableRule {
        argument,
        trig,
        scale,
        coordinate,
    }
}

use ArgumentRule::{Delaunay, EarthPerturbation, MainProblem, PlanetaryLunar, PlanetarySolar};
use PostScale::{Identity, Linear, Quadratic};
use Trig::{Cosine, Sine};

/// Evaluation rule of every table, indexed by 0-based table index (`ELP<index + 1>`).
pub const TABLE_RULES: [TableRule; TABLE_COUNT] = [
    rule(MainProblem, Sine, Identity, 0),
    rule(MainProblem, Sine, Identity, 1),
    rule(MainProblem, Cosine, Identity, 2),
    rule(EarthPerturbation, Sine, Identity, 3),
    rule(EarthPerturbation, Sine, Identity, 4),
    rule(EarthPerturbation, Sine, Identity, 5),
    rule(EarthPerturbation, Sine, Linear, 6),
    rule(EarthPerturbation, Sine, Linear, 7),
    rule(EarthPerturbation, Sine, Linear, 8),
    rule(PlanetaryLunar, Sine, Identity, 9),
    rule(PlanetaryLunar, Sine, Identity, 10),
    rule(PlanetaryLunar, Sine, Identity, 11),
    rule(PlanetaryLunar, Sine, Linear, 12),
    rule(PlanetaryLunar, Sine, Linear, 13),
    rule(PlanetaryLunar, Sine, Linear, 14),
    rule(PlanetarySolar, Sine, Identity, 15),
    rule(PlanetarySolar, Sine, Identity, 16),
    rule(PlanetarySolar, Sine, Identity, 17),
    rule(PlanetarySolar, Sine, Linear, 18),
    rule(PlanetarySolar, Sine, Linear, 19),
    rule(PlanetarySolar, Sine, Linear, 20),
    rule(Delaunay, Sine, Identity, 21),
    rule(Delaunay, Sine, Identity, 22),
    rule(Delaunay, Sine, Identity, 23),
    rule(Delaunay, Sine, Linear, 24),
    rule(Delaunay, Sine, Linear, 25),
    rule(Delaunay, Sine, Linear, 26),
    rule(Delaunay, Sine, Identity, 27),
    rule(Delaunay, Sine, Identity, 28),
    rule(Delaunay, Sine, Identity, 29),
    rule(Delaunay, Sine, Identity, 30),
    rule(Delaunay, Sine, Identity, 31),
    rule(Delaunay, Sine, Identity, 32),
    rule(Delaunay, Sine, Quadratic, 33),
    rule(Delaunay, Sine, Quadratic, 34),
    rule(Delaunay, Sine, Quadratic, 35),
];

/// Rule of the table at a 0-based index, `None` past the last table.
pub fn table_rule(index: usize) -> Option<&'static TableRule> {
    TABLE_RULES.get(index)
}

/// The twelve (longitude, latitude, distance) index triplets, in table order.
pub fn triplets() -> impl Iterator<Item = [usize; 3]> {
    (0..TABLE_COUNT).tuples().map(|(lon, lat, r)| [lon, lat, r])
}

#[cfg(test)]
mod dispatch_test {
    use std::collections::HashSet;

    use super::*;
    use crate::constants::TRIPLET_COUNT;

    #[test]
    fn test_every_index_has_one_rule() {
        for index in 0..TABLE_COUNT {
            assert!(table_rule(index).is_some(), "no rule for table {index}");
        }
        assert!(table_rule(TABLE_COUNT).is_none());
    }

    #[test]
    fn test_rule_ranges() {
        let expected = |index: usize| match index {
            0..=2 => (MainProblem, Identity),
            3..=5 => (EarthPerturbation, Identity),
            6..=8 => (EarthPerturbation, Linear),
            9..=11 => (PlanetaryLunar, Identity),
            12..=14 => (PlanetaryLunar, Linear),
            15..=17 => (PlanetarySolar, Identity),
            18..=20 => (PlanetarySolar, Linear),
            21..=23 => (Delaunay, Identity),
            24..=26 => (Delaunay, Linear),
            27..=32 => (Delaunay, Identity),
            _ => (Delaunay, Quadratic),
        };

        for (index, rule) in TABLE_RULES.iter().enumerate() {
            assert_eq!((rule.argument, rule.scale), expected(index), "table {index}");
            let trig = if index == 2 { Cosine } else { Sine };
            assert_eq!(rule.trig, trig, "table {index}");
        }
    }

    #[test]
    fn test_triplets_cover_each_index_once() {
        let triplets: Vec<[usize; 3]> = triplets().collect();
        assert_eq!(triplets.len(), TRIPLET_COUNT);

        let mut seen = HashSet::new();
        for [lon, lat, r] in triplets {
            assert_eq!(TABLE_RULES[lon].coordinate, Coordinate::Longitude);
            assert_eq!(TABLE_RULES[lat].coordinate, Coordinate::Latitude);
            assert_eq!(TABLE_RULES[r].coordinate, Coordinate::Distance);
            assert!(seen.insert(lon) && seen.insert(lat) && seen.insert(r));
        }
        assert_eq!(seen.len(), TABLE_COUNT);
    }

    #[test]
    fn test_basis_order() {
        let args = FundamentalArguments::at(0.1);
        let pl = &args.planets;
        let del = &args.delaunay;

        assert_eq!(
            PlanetaryLunar.basis(&args).as_slice(),
            &[
                pl.mercury, pl.venus, pl.earth, pl.mars, pl.jupiter, pl.saturn, pl.uranus,
                pl.neptune, del.d, del.l, del.f,
            ]
        );
        assert_eq!(
            PlanetarySolar.basis(&args).as_slice(),
            &[
                pl.mercury, pl.venus, pl.earth, pl.mars, pl.jupiter, pl.saturn, pl.uranus,
                del.d, del.l_prime, del.l, del.f,
            ]
        );
        assert_eq!(
            EarthPerturbation.basis(&args).as_slice(),
            &[args.z, del.d, del.l_prime, del.l, del.f]
        );

        let main = &args.main_problem;
        assert_eq!(
            MainProblem.basis(&args).as_slice(),
            &[main.d, main.l_prime, main.l, main.f]
        );
        assert_eq!(
            Delaunay.basis(&args).as_slice(),
            &[del.d, del.l_prime, del.l, del.f]
        );
        assert_eq!(
            Delaunay.basis(&args).as_slice().len() + 1,
            Delaunay.multiplier_count()
        );
    }

    #[test]
    fn test_planetary_arguments_are_distinct() {
        // a swapped column must change the argument
        let args = FundamentalArguments::at(0.1);
        let lunar = PlanetaryLunar.basis(&args);
        let angles = lunar.as_slice();
        for (i, a) in angles.iter().enumerate() {
            for b in &angles[i + 1..] {
                assert_ne!(a.value, b.value);
                assert_ne!(a.rate, b.rate);
            }
        }
    }

    #[test]
    fn test_post_scale_product_rule() {
        let sum = SeriesSum {
            value: 2.0,
            derivative: 3.0,
        };
        let t = 0.5;

        assert_eq!(Identity.apply(sum, t), sum);
        assert_eq!(
            Linear.apply(sum, t),
            SeriesSum {
                value: 1.0,
                derivative: 3.5
            }
        );
        assert_eq!(
            Quadratic.apply(sum, t),
            SeriesSum {
                value: 0.5,
                derivative: 2.75
            }
        );
    }
}
