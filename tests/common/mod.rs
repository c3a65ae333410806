#![allow(dead_code)]

use std::fs;

use approx::assert_relative_eq;
use camino::{Utf8Path, Utf8PathBuf};
use elp2000::{constants::TABLE_COUNT, CoefficientStore, MoonState};
use tempfile::TempDir;

/// Directory of the synthetic ELP1..ELP36 data set.
pub fn fixture_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/elp_fixture")
}

pub fn load_fixture() -> CoefficientStore {
    CoefficientStore::load(&fixture_dir()).unwrap()
}

/// Number of non-blank lines after the header of the fixture file `ELP<table>`.
pub fn data_line_count(table: usize) -> usize {
    let content = fs::read_to_string(fixture_dir().join(format!("ELP{table}"))).unwrap();
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Copy of the fixture data set into a temporary directory, without the file `ELP<missing>`.
pub fn fixture_copy_without(missing: usize) -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

    for table in (1..=TABLE_COUNT).filter(|&table| table != missing) {
        let name = format!("ELP{table}");
        fs::copy(fixture_dir().join(&name), path.join(&name)).unwrap();
    }

    (dir, path)
}

pub fn assert_state_close(actual: &MoonState, expected: &MoonState, epsilon: f64) {
    assert_relative_eq!(actual.position, expected.position, epsilon = epsilon);
    assert_relative_eq!(actual.velocity, expected.velocity, epsilon = epsilon);
}
