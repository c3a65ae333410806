//! # ELP2000 fixed-column table reader
//!
//! Utilities to parse the text files `ELP1`..`ELP36` into [`TermTable`] values.
//!
//! ## Overview
//! -----------------
//! Each file starts with one header line, followed by one term per line. A term is a run of
//! integer multipliers (3 columns each, starting at column 0), then for every table but the
//! first three a phase in degrees, then an amplitude. The column layout depends on the table
//! group only:
//!
//! | Tables | Multipliers      | Phase     | Amplitude |
//! |--------|------------------|-----------|-----------|
//! | 1–3    | `i1..i4` (0..12) | –         | `14..27`  |
//! | 4–9    | `i1..i5` (0..15) | `16..25`  | `26..35`  |
//! | 10–21  | `i1..i11` (0..33)| `34..43`  | `44..53`  |
//! | 22–36  | `i1..i5` (0..15) | `16..25`  | `26..35`  |
//!
//! Columns are byte offsets. Fields are trimmed before parsing, so right- or left-aligned
//! numbers are both accepted. The last field may be cut short by the end of the line, but every
//! field has to start inside the line. Lines holding only whitespace are not terms and are
//! skipped.
//!
//! ## Error Handling
//! -----------------
//! Line-level failures are reported as a [`TableDefect`] and wrapped into
//! [`ElpError::MalformedTable`] with the 1-based table number and line number. The first defect
//! aborts the whole table.
use std::ops::Range;

use camino::Utf8Path;
use log::debug;

use crate::{
    constants::TABLE_FILE_PREFIX,
    dispatch::ArgumentRule,
    elp_errors::{ElpError, TableDefect},
};

use super::term_records::{MainProblemTerm, PhasedTerm, TermTable};

const MULTIPLIER_WIDTH: usize = 3;

const MULTIPLIER_NAMES: [&str; 11] = [
    "i1", "i2", "i3", "i4", "i5", "i6", "i7", "i8", "i9", "i10", "i11",
];

/// Column layout of one table group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub multipliers: usize,
    pub phase: Option<Range<usize>>,
    pub amplitude: Range<usize>,
}

impl ColumnLayout {
    /// Layout of the tables evaluated with `rule`.
    pub fn for_rule(rule: ArgumentRule) -> Self {
        match rule {
            ArgumentRule::MainProblem => ColumnLayout {
                multipliers: 4,
                phase: None,
                amplitude: 14..27,
            },
            ArgumentRule::EarthPerturbation | ArgumentRule::Delaunay => ColumnLayout {
                multipliers: 5,
                phase: Some(16..25),
                amplitude: 26..35,
            },
            ArgumentRule::PlanetaryLunar | ArgumentRule::PlanetarySolar => ColumnLayout {
                multipliers: 11,
                phase: Some(34..43),
                amplitude: 44..53,
            },
        }
    }
}

/// File name of a table, from its 1-based number.
pub fn table_file_name(table: usize) -> String {
    format!("{TABLE_FILE_PREFIX}{table}")
}

/// Slice a trimmed field out of a line.
fn field<'a>(
    line: &'a str,
    name: &'static str,
    range: Range<usize>,
) -> Result<&'a str, TableDefect> {
    if line.len() <= range.start {
        return Err(TableDefect::ShortLine {
            field: name,
            needed: range.end,
            found: line.len(),
        });
    }

    let end = range.end.min(line.len());
    line.get(range.start..end)
        .map(str::trim)
        .ok_or_else(|| TableDefect::InvalidField {
            field: name,
            value: line.to_string(),
        })
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    name: &'static str,
    range: Range<usize>,
) -> Result<T, TableDefect> {
    let raw = field(line, name, range)?;
    raw.parse().map_err(|_| TableDefect::InvalidField {
        field: name,
        value: raw.to_string(),
    })
}

fn parse_multipliers<const N: usize>(line: &str) -> Result<[i32; N], TableDefect> {
    let mut multipliers = [0; N];
    for (k, slot) in multipliers.iter_mut().enumerate() {
        let start = k * MULTIPLIER_WIDTH;
        *slot = parse_field(line, MULTIPLIER_NAMES[k], start..start + MULTIPLIER_WIDTH)?;
    }
    Ok(multipliers)
}

fn parse_main_problem_term(
    line: &str,
    layout: &ColumnLayout,
) -> Result<MainProblemTerm, TableDefect> {
    debug_assert_eq!(layout.multipliers, 4);
    Ok(MainProblemTerm {
        multipliers: parse_multipliers(line)?,
        amplitude: parse_field(line, "A", layout.amplitude.clone())?,
    })
}

fn parse_phased_term<const N: usize>(
    line: &str,
    layout: &ColumnLayout,
) -> Result<PhasedTerm<N>, TableDefect> {
    debug_assert_eq!(N, layout.multipliers);
    let multipliers = parse_multipliers(line)?;
    let phase = match &layout.phase {
        Some(range) => parse_field(line, "ph", range.clone())?,
        None => 0.0,
    };
    Ok(PhasedTerm {
        multipliers,
        phase,
        amplitude: parse_field(line, "A", layout.amplitude.clone())?,
    })
}

/// Parse every data line of a table into records of type `T`.
fn parse_terms<T>(
    content: &str,
    table: usize,
    parse_line: impl Fn(&str) -> Result<T, TableDefect>,
) -> Result<Vec<T>, ElpError> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line).map_err(|defect| ElpError::MalformedTable {
                table,
                line: index + 1,
                defect,
            })
        })
        .collect()
}

/// Parse the text of one table (header line included).
///
/// Arguments
/// -----------------
/// * `content` – Full text of the table file.
/// * `table` – 1-based table number, used for error reporting.
/// * `rule` – Argument rule of the table group, which selects the column layout.
///
/// Return
/// ----------
/// * The parsed [`TermTable`], records in file order, or [`ElpError::MalformedTable`] on the first
///   defective line.
pub fn parse_table(
    content: &str,
    table: usize,
    rule: ArgumentRule,
) -> Result<TermTable, ElpError> {
    let layout = ColumnLayout::for_rule(rule);

    let terms = match rule {
        ArgumentRule::MainProblem => TermTable::MainProblem(parse_terms(content, table, |line| {
            parse_main_problem_term(line, &layout)
        })?),
        ArgumentRule::EarthPerturbation => TermTable::EarthPerturbation(parse_terms(
            content,
            table,
            |line| parse_phased_term(line, &layout),
        )?),
        ArgumentRule::PlanetaryLunar => TermTable::PlanetaryLunar(parse_terms(
            content,
            table,
            |line| parse_phased_term(line, &layout),
        )?),
        ArgumentRule::PlanetarySolar => TermTable::PlanetarySolar(parse_terms(
            content,
            table,
            |line| parse_phased_term(line, &layout),
        )?),
        ArgumentRule::Delaunay => TermTable::Delaunay(parse_terms(content, table, |line| {
            parse_phased_term(line, &layout)
        })?),
    };

    debug!("ELP{table}: {} terms ({rule:?})", terms.len());
    Ok(terms)
}

/// Read and parse the file `ELP<table>` from `directory`.
///
/// A missing or unreadable file is reported as [`TableDefect::MissingSource`] at line 0.
pub fn read_table_file(
    directory: &Utf8Path,
    table: usize,
    rule: ArgumentRule,
) -> Result<TermTable, ElpError> {
    let path = directory.join(table_file_name(table));
    let content = std::fs::read_to_string(&path).map_err(|err| ElpError::MalformedTable {
        table,
        line: 0,
        defect: TableDefect::MissingSource(format!("{path}: {err}")),
    })?;

    parse_table(&content, table, rule)
}

#[cfg(test)]
mod table_reader_test {
    use super::*;

    const MAIN_PROBLEM: &str = "\
 MAIN PROBLEM. LONGITUDE
  0  0  1  0   22639.55000
  2  0 -1  0    4586.43061

  2  0  0  0    2369.91227
";

    const EARTH_PERTURBATION: &str = "\
 EARTH PERTURBATIONS. LONGITUDE
  0  0  0  0  1 270.00000   0.00003
  1  0  0  0  0 179.93473   3.80323
";

    const PLANETARY: &str = "\
 PLANETARY PERTURBATIONS. TABLE 1. LONGITUDE
  0  0  0  0  0  0  0  0  2  0 -1  90.00000   0.00021
  0 18-16  0  0  0  0  0  0  1  0 100.27760  14.24883
";

    #[test]
    fn test_parse_main_problem() {
        let table = parse_table(MAIN_PROBLEM, 1, ArgumentRule::MainProblem).unwrap();
        assert_eq!(
            table,
            TermTable::MainProblem(vec![
                MainProblemTerm {
                    multipliers: [0, 0, 1, 0],
                    amplitude: 22639.55,
                },
                MainProblemTerm {
                    multipliers: [2, 0, -1, 0],
                    amplitude: 4586.43061,
                },
                MainProblemTerm {
                    multipliers: [2, 0, 0, 0],
                    amplitude: 2369.91227,
                },
            ])
        );
    }

    #[test]
    fn test_parse_earth_perturbation() {
        let table = parse_table(EARTH_PERTURBATION, 4, ArgumentRule::EarthPerturbation).unwrap();
        let TermTable::EarthPerturbation(terms) = table else {
            panic!("wrong table variant");
        };
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1].multipliers, [1, 0, 0, 0, 0]);
        assert_eq!(terms[1].phase, 179.93473);
        assert_eq!(terms[1].amplitude, 3.80323);
    }

    #[test]
    fn test_parse_planetary_with_packed_columns() {
        let table = parse_table(PLANETARY, 10, ArgumentRule::PlanetaryLunar).unwrap();
        let TermTable::PlanetaryLunar(terms) = table else {
            panic!("wrong table variant");
        };
        assert_eq!(terms[0].multipliers, [0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -1]);
        assert_eq!(terms[1].multipliers, [0, 18, -16, 0, 0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(terms[1].phase, 100.2776);
        assert_eq!(terms[1].amplitude, 14.24883);
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let table = parse_table(" HEADER\n", 22, ArgumentRule::Delaunay).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.rule(), ArgumentRule::Delaunay);
    }

    #[test]
    fn test_short_line() {
        let content = " HEADER\n  0  0  1\n";
        let err = parse_table(content, 2, ArgumentRule::MainProblem).unwrap_err();
        assert_eq!(
            err,
            ElpError::MalformedTable {
                table: 2,
                line: 2,
                defect: TableDefect::ShortLine {
                    field: "i4",
                    needed: 12,
                    found: 9,
                },
            }
        );
    }

    #[test]
    fn test_invalid_amplitude() {
        let content = " HEADER\n  0  0  0  0  1 270.00000   0.0x003\n";
        let err = parse_table(content, 23, ArgumentRule::Delaunay).unwrap_err();
        assert_eq!(
            err,
            ElpError::MalformedTable {
                table: 23,
                line: 2,
                defect: TableDefect::InvalidField {
                    field: "A",
                    value: "0.0x003".into(),
                },
            }
        );
    }

    #[test]
    fn test_invalid_multiplier() {
        let content = " HEADER\n  0  a  0  0  1 270.00000   0.00003\n";
        let err = parse_table(content, 5, ArgumentRule::EarthPerturbation).unwrap_err();
        assert_eq!(err.table(), Some(5));
        assert!(matches!(
            err,
            ElpError::MalformedTable {
                line: 2,
                defect: TableDefect::InvalidField { field: "i2", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap();
        let err = read_table_file(path, 17, ArgumentRule::PlanetarySolar).unwrap_err();
        assert!(matches!(
            err,
            ElpError::MalformedTable {
                table: 17,
                line: 0,
                defect: TableDefect::MissingSource(_),
            }
        ));
    }

    #[test]
    fn test_table_file_name() {
        assert_eq!(table_file_name(1), "ELP1");
        assert_eq!(table_file_name(36), "ELP36");
    }
}
