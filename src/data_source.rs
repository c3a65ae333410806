//! # Location of the ELP2000 table files
//!
//! The 36 files `ELP1`..`ELP36` are not shipped with the crate. [`ElpDataSource`] tells the
//! loader where to find them:
//!
//! * an explicit directory,
//! * the directory named by the `ELP2000_DATA_DIR` environment variable (default),
//! * the per-user cache directory, `<cache>/elp2000_cache/elp2000`.
//!
//! A source can also be written as a string, which is handy for command line options and
//! configuration files:
//!
//! ```rust, ignore
//! use elp2000::data_source::ElpDataSource;
//!
//! let source: ElpDataSource = "dir:/data/elp2000".parse()?;
//! let source = ElpDataSource::try_from("env")?;
//! let source = ElpDataSource::try_from("cache")?;
//! ```
use std::{env, str::FromStr};

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;

use crate::elp_errors::ElpError;

/// Environment variable read by [`ElpDataSource::Environment`].
pub const ELP_DATA_DIR_ENV: &str = "ELP2000_DATA_DIR";

const CACHE_ROOT: &str = "elp2000_cache";
const CACHE_SUBDIR: &str = "elp2000";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ElpDataSource {
    /// A directory given by the caller
    Directory(Utf8PathBuf),
    /// The directory named by `ELP2000_DATA_DIR`
    #[default]
    Environment,
    /// The per-user cache directory
    Cache,
}

impl ElpDataSource {
    /// Resolve the source into an existing directory.
    ///
    /// Return
    /// ----------
    /// * The directory holding the table files, or [`ElpError::DataDirectoryNotFound`] if it
    ///   cannot be determined or does not exist.
    pub fn resolve(&self) -> Result<Utf8PathBuf, ElpError> {
        let directory = match self {
            ElpDataSource::Directory(path) => path.clone(),
            ElpDataSource::Environment => directory_from_env(env::var(ELP_DATA_DIR_ENV))?,
            ElpDataSource::Cache => cache_directory()?,
        };

        existing_directory(directory)
    }
}

fn directory_from_env(value: Result<String, env::VarError>) -> Result<Utf8PathBuf, ElpError> {
    match value {
        Ok(path) if !path.trim().is_empty() => Ok(Utf8PathBuf::from(path)),
        Ok(_) => Err(ElpError::DataDirectoryNotFound(format!(
            "{ELP_DATA_DIR_ENV} is empty"
        ))),
        Err(err) => Err(ElpError::DataDirectoryNotFound(format!(
            "{ELP_DATA_DIR_ENV}: {err}"
        ))),
    }
}

/// Default cache location of the table files, `<cache>/elp2000_cache/elp2000`.
///
/// The directory is not created.
pub fn cache_directory() -> Result<Utf8PathBuf, ElpError> {
    let base_dir = BaseDirs::new().ok_or_else(|| {
        ElpError::DataDirectoryNotFound("cannot determine the user cache directory".into())
    })?;

    let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
        ElpError::DataDirectoryNotFound(format!(
            "cache directory is not valid UTF-8: {}",
            base_dir.cache_dir().display()
        ))
    })?;

    Ok(cache_path.join(CACHE_ROOT).join(CACHE_SUBDIR))
}

fn existing_directory(directory: Utf8PathBuf) -> Result<Utf8PathBuf, ElpError> {
    if directory.is_dir() {
        Ok(directory)
    } else {
        Err(ElpError::DataDirectoryNotFound(directory.into_string()))
    }
}

impl FromStr for ElpDataSource {
    type Err = ElpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "env" => Ok(ElpDataSource::Environment),
            "cache" => Ok(ElpDataSource::Cache),
            other => match other.strip_prefix("dir:") {
                Some(path) if !path.is_empty() => Ok(ElpDataSource::Directory(path.into())),
                _ => Err(ElpError::InvalidDataSource(format!(
                    "expected \"dir:<path>\", \"env\" or \"cache\", got {s:?}"
                ))),
            },
        }
    }
}

impl TryFrom<&str> for ElpDataSource {
    type Error = ElpError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod data_source_test {
    use super::*;

    #[test]
    fn test_parse_sources() {
        assert_eq!(
            ElpDataSource::try_from("dir:/data/elp"),
            Ok(ElpDataSource::Directory("/data/elp".into()))
        );
        assert_eq!("env".parse::<ElpDataSource>(), Ok(ElpDataSource::Environment));
        assert_eq!(" cache ".parse::<ElpDataSource>(), Ok(ElpDataSource::Cache));
        assert_eq!(ElpDataSource::default(), ElpDataSource::Environment);
    }

    #[test]
    fn test_parse_invalid_source() {
        for value in ["", "dir:", "http://example.org/elp", "Cache"] {
            assert!(
                matches!(
                    ElpDataSource::try_from(value),
                    Err(ElpError::InvalidDataSource(_))
                ),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let source = ElpDataSource::Directory(path.clone());
        assert_eq!(source.resolve(), Ok(path.clone()));

        let missing = ElpDataSource::Directory(path.join("missing"));
        assert_eq!(
            missing.resolve(),
            Err(ElpError::DataDirectoryNotFound(
                path.join("missing").into_string()
            ))
        );
    }

    #[test]
    fn test_directory_from_env() {
        assert_eq!(
            directory_from_env(Ok("/data/elp".into())),
            Ok(Utf8PathBuf::from("/data/elp"))
        );
        assert!(matches!(
            directory_from_env(Err(env::VarError::NotPresent)),
            Err(ElpError::DataDirectoryNotFound(_))
        ));
        assert!(matches!(
            directory_from_env(Ok("  ".into())),
            Err(ElpError::DataDirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_cache_directory_layout() {
        if let Ok(path) = cache_directory() {
            assert!(path.ends_with("elp2000_cache/elp2000"));
        }
    }
}
