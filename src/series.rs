//! # Series evaluation
//!
//! Each table is a trigonometric series `Σ A·sin(φ)` (or `Σ A·cos(φ)`), where the argument `φ` is
//! an integer combination of fundamental arguments plus a phase. The time derivative of the
//! series is summed in the same pass, using the closed-form rates of the fundamental arguments.
//!
//! For one term with multipliers `i_k`, phase `ph` (degrees) and amplitude `A`:
//!
//! ```text
//! φ  = (Σ i_k·arg_k) / 3600 + ph          degrees
//! φ' =  Σ i_k·rate_k                      arcsec / century
//! value      += A·sin(φ)
//! derivative += A·cos(φ)·φ'               (φ' converted to radians / century)
//! ```
//!
//! Terms are summed in file order and none is dropped, however small its amplitude.

use crate::{
    constants::{Degree, JulianCentury, ARCSEC_PER_DEGREE},
    conversion::{arcsec_to_rad, deg_to_rad},
    coefficients::term_records::TermTable,
    dispatch::{PostScale, Trig},
    fundamental_args::{Angle, FundamentalArguments},
};

/// Value of a series and its derivative per Julian century.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSum {
    pub value: f64,
    pub derivative: f64,
}

/// Sum the terms given as `(multipliers, phase, amplitude)` against a basis of arguments.
fn sum_terms<'a>(
    terms: impl Iterator<Item = (&'a [i32], Option<Degree>, f64)>,
    basis: &[Angle],
    trig: Trig,
) -> SeriesSum {
    let mut sum = SeriesSum::default();

    for (multipliers, phase, amplitude) in terms {
        let (arg, rate) = multipliers
            .iter()
            .zip(basis)
            .fold((0.0, 0.0), |(arg, rate), (&i, angle)| {
                let i = f64::from(i);
                (arg + i * angle.value, rate + i * angle.rate)
            });

        let mut arg_deg = arg / ARCSEC_PER_DEGREE;
        if let Some(phase) = phase {
            arg_deg += phase;
        }

        let (sin, cos) = deg_to_rad(arg_deg).sin_cos();
        let rate = arcsec_to_rad(rate);

        match trig {
            Trig::Sine => {
                sum.value += amplitude * sin;
                sum.derivative += amplitude * cos * rate;
            }
            Trig::Cosine => {
                sum.value += amplitude * cos;
                sum.derivative += amplitude * -sin * rate;
            }
        }
    }

    sum
}

/// Sum the series of one table, before any post-scaling.
pub fn sum_series(table: &TermTable, args: &FundamentalArguments, trig: Trig) -> SeriesSum {
    let basis = table.rule().basis(args);
    let basis = basis.as_slice();

    match table {
        TermTable::MainProblem(terms) => sum_terms(
            terms
                .iter()
                .map(|term| (&term.multipliers[..], None, term.amplitude)),
            basis,
            trig,
        ),
        TermTable::EarthPerturbation(terms) => sum_terms(
            terms
                .iter()
                .map(|term| (&term.multipliers[..], Some(term.phase), term.amplitude)),
            basis,
            trig,
        ),
        TermTable::PlanetaryLunar(terms) | TermTable::PlanetarySolar(terms) => sum_terms(
            terms
                .iter()
                .map(|term| (&term.multipliers[..], Some(term.phase), term.amplitude)),
            basis,
            trig,
        ),
        // i1 is not an argument multiplier for these tables
        TermTable::Delaunay(terms) => sum_terms(
            terms
                .iter()
                .map(|term| (&term.multipliers[1..], Some(term.phase), term.amplitude)),
            basis,
            trig,
        ),
    }
}

/// Evaluate one table at `t`: series sum, then post-scaling by `t` or `t²`.
///
/// The fundamental arguments combined by the multipliers are those of the table's own record
/// shape ([`TermTable::rule`]), so a table can never be summed against another group's basis.
///
/// Arguments
/// -----------------
/// * `table`: the term records
/// * `trig`: sine or cosine series
/// * `scale`: post-scaling of the table index (see [`TABLE_RULES`](crate::dispatch::TABLE_RULES))
/// * `args`: fundamental arguments evaluated at `t`
/// * `t`: time in Julian centuries since J2000
///
/// Return
/// ----------
/// * the table contribution and its derivative per Julian century, in arcseconds for
///   longitude/latitude tables and kilometers for distance tables
pub fn evaluate_table(
    table: &TermTable,
    trig: Trig,
    scale: PostScale,
    args: &FundamentalArguments,
    t: JulianCentury,
) -> SeriesSum {
    scale.apply(sum_series(table, args, trig), t)
}
