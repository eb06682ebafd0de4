//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the process
//! environment and filesystem lookups, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and executable location
//! - `fs` - Filesystem path lookups

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    /// Path of the running executable, before symlink resolution.
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn is_dir(&self, path: &Path) -> bool;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }
}
