//! Filesystem path helpers (XDG-aware) for installed language resources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

const STOPWORDS_FILE: &str = "portuguese.txt";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("unable to determine project directories")]
    MissingProjectDirs,
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Container providing filesystem paths for the application. In production this is
/// rooted at `$XDG_DATA_HOME/juridico`; tests may construct custom instances.
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    /// Construct paths rooted under the provided directory, ensuring it exists.
    pub fn new<P: AsRef<Path>>(base: P) -> Result<Self, PathError> {
        let base = base.as_ref().to_path_buf();
        ensure_dir(&base)?;
        Ok(Self { base_dir: base })
    }

    /// Base data directory.
    pub fn data_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding installed stopword lists (`.../stopwords`).
    pub fn stopwords_dir(&self) -> Result<PathBuf, PathError> {
        let mut path = self.base_dir.clone();
        path.push("stopwords");
        ensure_dir(&path)
    }

    /// Portuguese stopword list (`.../stopwords/portuguese.txt`).
    pub fn stopwords_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.stopwords_dir()?.join(STOPWORDS_FILE))
    }
}

pub fn project_dirs() -> Result<ProjectDirs, PathError> {
    ProjectDirs::from("dev", "juridico", "juridico").ok_or(PathError::MissingProjectDirs)
}

pub fn default_data_dir() -> Result<PathBuf, PathError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

fn ensure_dir(path: &Path) -> Result<PathBuf, PathError> {
    if let Err(err) = fs::create_dir_all(path) {
        if err.kind() != io::ErrorKind::AlreadyExists {
            return Err(PathError::CreateDir {
                path: path.to_path_buf(),
                source: err,
            });
        }
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_stopwords_dir_on_demand() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = AppPaths::new(tmp.path().join("data")).expect("paths");
        let file = paths.stopwords_file().expect("stopwords file path");

        assert!(paths.data_dir().is_dir());
        assert!(file.parent().expect("parent").is_dir());
        assert!(file.ends_with("stopwords/portuguese.txt"));
        assert!(!file.exists());
    }

    #[test]
    fn rejects_base_that_is_a_file() {
        let tmp = TempDir::new().expect("tempdir");
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").expect("write blocker");

        let err = AppPaths::new(blocker.join("nested")).unwrap_err();
        assert!(matches!(err, PathError::CreateDir { .. }));
    }
}
