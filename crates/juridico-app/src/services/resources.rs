//! Language resources installed under the data directory.
//!
//! A missing resource gets exactly one recovery attempt: the bundled copy is
//! written to its expected location and read back. If that read fails too the
//! error is returned and startup aborts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::paths::{AppPaths, PathError};
use crate::text::{BUNDLED_STOPWORDS, StopwordSet};

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("failed to read stopwords from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install stopwords at {path}: {source}")]
    Install {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads the Portuguese stopword list from the data directory, installing the
/// bundled list first when it is absent.
pub fn load_stopwords(paths: &AppPaths) -> Result<StopwordSet, ResourceError> {
    let path = paths.stopwords_file()?;
    load_stopwords_at(&path)
}

pub fn load_stopwords_at(path: &Path) -> Result<StopwordSet, ResourceError> {
    match read_stopwords(path) {
        Ok(set) => Ok(set),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "stopword list missing; installing bundled copy");
            install_stopwords(path)?;
            read_stopwords(path).map_err(|source| ResourceError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(ResourceError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes the bundled stopword list to `path`, replacing any existing file.
pub fn install_stopwords(path: &Path) -> Result<(), ResourceError> {
    fs::write(path, BUNDLED_STOPWORDS).map_err(|source| ResourceError::Install {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "installed bundled stopword list");
    Ok(())
}

fn read_stopwords(path: &Path) -> io::Result<StopwordSet> {
    let raw = fs::read_to_string(path)?;
    let set = StopwordSet::parse(&raw);
    if set.is_empty() {
        warn!(path = %path.display(), "stopword list is empty");
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn installs_bundled_list_when_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = AppPaths::new(tmp.path()).expect("paths");
        let file = paths.stopwords_file().expect("file path");
        assert!(!file.exists());

        let set = load_stopwords(&paths).expect("load with recovery");
        assert_eq!(set.len(), StopwordSet::bundled().len());
        assert_eq!(
            fs::read_to_string(&file).expect("installed file"),
            BUNDLED_STOPWORDS
        );
    }

    #[test]
    fn prefers_existing_list() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = AppPaths::new(tmp.path()).expect("paths");
        let file = paths.stopwords_file().expect("file path");
        fs::write(&file, "processo\nautos\n").expect("write custom list");

        let set = load_stopwords(&paths).expect("load");
        assert_eq!(set.len(), 2);
        assert!(set.contains("autos"));
        assert!(!set.contains("de"));
    }

    #[test]
    fn failed_recovery_is_fatal() {
        let tmp = TempDir::new().expect("tempdir");
        let file = tmp.path().join("missing-dir").join("portuguese.txt");

        let err = load_stopwords_at(&file).unwrap_err();
        assert!(matches!(err, ResourceError::Install { .. }), "got {err:?}");
    }

    #[test]
    fn unreadable_list_is_not_overwritten() {
        let tmp = TempDir::new().expect("tempdir");
        let dir_in_place = tmp.path().join("portuguese.txt");
        fs::create_dir(&dir_in_place).expect("create dir");

        let err = load_stopwords_at(&dir_in_place).unwrap_err();
        assert!(matches!(err, ResourceError::Read { .. }), "got {err:?}");
        assert!(dir_in_place.is_dir());
    }
}
