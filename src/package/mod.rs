//! Package layout module
//!
//! This module provides abstractions for describing an installed
//! libflacarray package: where its root lives, the directories derived
//! from that root, and the version string baked in at build time.

mod discovery;

use std::path::{Path, PathBuf};

pub use discovery::find_package_root;

/// Package version, injected at build time from git metadata.
pub const VERSION: &str = env!("FLACARRAY_VERSION");

/// Base name of the native library, without the `lib` prefix or suffix.
pub const LIB_NAME: &str = "flacarray";

/// Directory layout of an installed package.
///
/// All paths are derived from a single root directory:
/// headers under `include/` and libraries under `lib/`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageLayout {
    root: PathBuf,
    include_dir: PathBuf,
    lib_dir: PathBuf,
}

impl PackageLayout {
    /// Build the layout from a package root directory.
    pub fn from_root(root: PathBuf) -> Self {
        let include_dir = root.join("include");
        let lib_dir = root.join("lib");
        Self {
            root,
            include_dir,
            lib_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    /// Full path of the shared library for the given platform suffix.
    pub fn shared_lib(&self, suffix: &str) -> PathBuf {
        self.lib_dir.join(format!("lib{LIB_NAME}{suffix}"))
    }
}
