//! # Coefficient store
//!
//! [`CoefficientStore`] holds the 36 tables of the ELP2000 theory, parsed once and immutable
//! afterwards. A store only exists once every table has been read successfully, so any code
//! holding a `&CoefficientStore` can evaluate the theory without further checks.
//!
//! ```text
//! CoefficientStore
//! └── tables: [TermTable; 36]     (index i ↔ file ELP<i + 1>)
//!     ├── MainProblem(Vec<MainProblemTerm>)        0..3
//!     ├── EarthPerturbation(Vec<PhasedTerm<5>>)    3..9
//!     ├── PlanetaryLunar(Vec<PhasedTerm<11>>)      9..15
//!     ├── PlanetarySolar(Vec<PhasedTerm<11>>)      15..21
//!     └── Delaunay(Vec<PhasedTerm<5>>)             21..36
//! ```
//!
//! ## See also
//! ------------
//! * [`table_reader`] – fixed-column parsing of the table files.
//! * [`crate::lunar_state`] – evaluation methods on the store.
use camino::Utf8Path;
use log::info;

use crate::{
    constants::TABLE_COUNT,
    dispatch::TABLE_RULES,
    elp_errors::{ElpError, TableDefect},
};

use term_records::TermTable;

pub mod table_reader;
pub mod term_records;

/// The 36 coefficient tables of the theory, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientStore {
    tables: [TermTable; TABLE_COUNT],
}

impl CoefficientStore {
    /// Load the files `ELP1`..`ELP36` from a directory.
    ///
    /// The first line of every file is a header and is skipped. Loading stops at the first
    /// missing file or malformed line; nothing is returned in that case.
    ///
    /// Arguments
    /// -----------------
    /// * `directory`: directory containing the 36 table files
    ///
    /// Return
    /// ----------
    /// * The loaded store, or [`ElpError::MalformedTable`] naming the faulty table (1-based) and
    ///   line.
    pub fn load(directory: &Utf8Path) -> Result<Self, ElpError> {
        let tables = TABLE_RULES
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                table_reader::read_table_file(directory, index + 1, rule.argument)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let store = Self::from_tables(tables)?;
        info!(
            "Loaded ELP2000 tables from {directory}: {} terms",
            store.total_terms()
        );
        Ok(store)
    }

    /// Build a store from the in-memory text of the 36 tables, in table order.
    ///
    /// Each text follows the file format, header line included.
    ///
    /// Return
    /// ----------
    /// * The store, [`ElpError::TableCount`] if `sources` does not hold exactly 36 texts, or
    ///   [`ElpError::MalformedTable`] on the first malformed line.
    pub fn from_sources<S: AsRef<str>>(sources: &[S]) -> Result<Self, ElpError> {
        if sources.len() != TABLE_COUNT {
            return Err(ElpError::TableCount {
                expected: TABLE_COUNT,
                found: sources.len(),
            });
        }

        let tables = sources
            .iter()
            .zip(TABLE_RULES.iter())
            .enumerate()
            .map(|(index, (source, rule))| {
                table_reader::parse_table(source.as_ref(), index + 1, rule.argument)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_tables(tables)
    }

    /// Build a store from already parsed tables, in table order.
    ///
    /// Every table must carry the record shape its index requires.
    pub fn from_tables(tables: Vec<TermTable>) -> Result<Self, ElpError> {
        let tables: [TermTable; TABLE_COUNT] =
            tables
                .try_into()
                .map_err(|tables: Vec<TermTable>| ElpError::TableCount {
                    expected: TABLE_COUNT,
                    found: tables.len(),
                })?;

        if let Some((index, table)) = tables
            .iter()
            .enumerate()
            .find(|(index, table)| table.rule() != TABLE_RULES[*index].argument)
        {
            return Err(ElpError::MalformedTable {
                table: index + 1,
                line: 0,
                defect: TableDefect::ShapeMismatch {
                    expected: TABLE_RULES[index].argument,
                    found: table.rule(),
                },
            });
        }

        Ok(CoefficientStore { tables })
    }

    /// All tables, indexed by 0-based table index.
    pub fn tables(&self) -> &[TermTable; TABLE_COUNT] {
        &self.tables
    }

    /// The table at a 0-based index, `None` past the last table.
    pub fn table(&self, index: usize) -> Option<&TermTable> {
        self.tables.get(index)
    }

    /// Number of terms of every table.
    pub fn term_counts(&self) -> [usize; TABLE_COUNT] {
        std::array::from_fn(|index| self.tables[index].len())
    }

    pub fn total_terms(&self) -> usize {
        self.tables.iter().map(TermTable::len).sum()
    }
}
