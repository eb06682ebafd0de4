//! Filesystem path lookups.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn canonicalize_impl(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).context("Failed to canonicalize path")
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_path_lookups() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        // Test is_dir
        assert!(runtime.is_dir(dir.path()));
        assert!(!runtime.is_dir(&dir.path().join("missing")));

        // Test canonicalize
        let canonical = runtime.canonicalize(dir.path()).unwrap();
        assert!(canonical.is_absolute());
    }

    #[test]
    fn test_real_runtime_canonicalize_missing_path() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        let result = runtime.canonicalize(&dir.path().join("missing"));
        assert!(result.is_err());
    }
}
