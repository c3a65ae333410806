//! Term records of the ELP2000 tables.
//!
//! One record is one data line of a table file. The record shape is fixed by the table group,
//! so every table is stored as a [`TermTable`] variant holding records of exactly the right
//! shape: there is no optional or keyed field to go missing at evaluation time.

use crate::{constants::Degree, dispatch::ArgumentRule};

/// Term of the main problem (tables 1–3): four Delaunay multipliers and an amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainProblemTerm {
    /// Multipliers of `D`, `l′`, `l`, `F`
    pub multipliers: [i32; 4],
    /// Amplitude, in arcseconds (longitude, latitude) or kilometers (distance)
    pub amplitude: f64,
}

/// Term with `N` integer multipliers, a phase in degrees and an amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasedTerm<const N: usize> {
    pub multipliers: [i32; N],
    pub phase: Degree,
    pub amplitude: f64,
}

/// The records of one table, tagged by the argument rule of its group.
#[derive(Debug, Clone, PartialEq)]
pub enum TermTable {
    MainProblem(Vec<MainProblemTerm>),
    EarthPerturbation(Vec<PhasedTerm<5>>),
    PlanetaryLunar(Vec<PhasedTerm<11>>),
    PlanetarySolar(Vec<PhasedTerm<11>>),
    /// Records keep the unused leading multiplier `i1` of the file layout
    Delaunay(Vec<PhasedTerm<5>>),
}

impl TermTable {
    /// An empty table of the given group.
    pub fn empty(rule: ArgumentRule) -> Self {
        match rule {
            ArgumentRule::MainProblem => TermTable::MainProblem(Vec::new()),
            ArgumentRule::EarthPerturbation => TermTable::EarthPerturbation(Vec::new()),
            ArgumentRule::PlanetaryLunar => TermTable::PlanetaryLunar(Vec::new()),
            ArgumentRule::PlanetarySolar => TermTable::PlanetarySolar(Vec::new()),
            ArgumentRule::Delaunay => TermTable::Delaunay(Vec::new()),
        }
    }

    /// The argument rule matching the record shape.
    pub fn rule(&self) -> ArgumentRule {
        match self {
            TermTable::MainProblem(_) => ArgumentRule::MainProblem,
            TermTable::EarthPerturbation(_) => ArgumentRule::EarthPerturbation,
            TermTable::PlanetaryLunar(_) => ArgumentRule::PlanetaryLunar,
            TermTable::PlanetarySolar(_) => ArgumentRule::PlanetarySolar,
            TermTable::Delaunay(_) => ArgumentRule::Delaunay,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TermTable::MainProblem(terms) => terms.len(),
            TermTable::EarthPerturbation(terms) | TermTable::Delaunay(terms) => terms.len(),
            TermTable::PlanetaryLunar(terms) | TermTable::PlanetarySolar(terms) => terms.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
