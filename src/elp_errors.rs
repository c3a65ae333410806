use thiserror::Error;

use crate::dispatch::ArgumentRule;

/// Defect found while reading one coefficient table.
///
/// Variants
/// -----------------
/// * `MissingSource` – The table file could not be opened or read; payload carries the I/O message.
/// * `ShortLine` – The line ends before a column required by the table layout.
/// * `InvalidField` – A required column does not hold a number; payload names the field and the
///   offending text.
/// * `ShapeMismatch` – A pre-parsed table does not have the record shape of its index.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableDefect {
    #[error("table source is missing or unreadable: {0}")]
    MissingSource(String),

    #[error("line is too short: field `{field}` needs {needed} columns, found {found}")]
    ShortLine {
        field: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("invalid numeric value for field `{field}`: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("table has {found:?} records where {expected:?} records are expected")]
    ShapeMismatch {
        expected: ArgumentRule,
        found: ArgumentRule,
    },
}

#[derive(Error, Debug)]
pub enum ElpError {
    #[error("ELP2000 coefficient tables are not loaded")]
    NotLoaded,

    #[error("ELP2000 coefficient tables are already loaded")]
    AlreadyLoaded,

    #[error("Malformed table ELP{table} at line {line}: {defect}")]
    MalformedTable {
        /// 1-based table number, as in the file name `ELP<table>`
        table: usize,
        /// 1-based line number in the file, 0 when the source itself is unusable
        line: usize,
        defect: TableDefect,
    },

    #[error("Expected {expected} coefficient tables, got {found}")]
    TableCount { expected: usize, found: usize },

    #[error("ELP2000 data directory not found: {0}")]
    DataDirectoryNotFound(String),

    #[error("Invalid ELP2000 data source: {0}")]
    InvalidDataSource(String),
}

impl ElpError {
    /// The 1-based table number carried by a [`ElpError::MalformedTable`], if any.
    pub fn table(&self) -> Option<usize> {
        match self {
            ElpError::MalformedTable { table, .. } => Some(*table),
            _ => None,
        }
    }
}

impl PartialEq for ElpError {
    fn eq(&self, other: &Self) -> bool {
        use ElpError::*;
        match (self, other) {
            (
                MalformedTable {
                    table: t1,
                    line: l1,
                    defect: d1,
                },
                MalformedTable {
                    table: t2,
                    line: l2,
                    defect: d2,
                },
            ) => t1 == t2 && l1 == l2 && d1 == d2,
            (
                TableCount {
                    expected: e1,
                    found: f1,
                },
                TableCount {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (DataDirectoryNotFound(a), DataDirectoryNotFound(b)) => a == b,
            (InvalidDataSource(a), InvalidDataSource(b)) => a == b,

            // Unit variants
            (NotLoaded, NotLoaded) => true,
            (AlreadyLoaded, AlreadyLoaded) => true,

            _ => false,
        }
    }
}
