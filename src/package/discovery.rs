use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Environment variable that overrides the package root location.
pub const ROOT_ENV_VAR: &str = "FLACARRAY_ROOT";

/// Find the root directory of the installed package.
///
/// When `FLACARRAY_ROOT` is set and non-empty, the package root is taken
/// from it. Otherwise the root is derived from the location of the running
/// executable: an executable installed under a `bin/` directory reports
/// the directory above it, any other location reports the executable's
/// own directory.
///
/// The returned path is always canonical.
#[tracing::instrument(skip(runtime))]
pub fn find_package_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if let Ok(root) = runtime.env_var(ROOT_ENV_VAR)
        && !root.is_empty()
    {
        log::debug!("Using package root from {ROOT_ENV_VAR}: {root}");
        return validated_root(runtime, Path::new(&root));
    }

    let exe = runtime
        .current_exe()
        .context("Failed to locate the running executable")?;
    let exe = runtime
        .canonicalize(&exe)
        .context("Failed to canonicalize the executable path")?;

    let root = root_from_exe(&exe)?;
    log::debug!("Using package root derived from executable: {}", root.display());
    Ok(root)
}

/// Canonicalize an externally supplied root and confirm it is a directory.
fn validated_root<R: Runtime>(runtime: &R, root: &Path) -> Result<PathBuf> {
    let root = runtime
        .canonicalize(root)
        .with_context(|| format!("Failed to resolve the directory named by {ROOT_ENV_VAR}"))?;
    if !runtime.is_dir(&root) {
        bail!("{ROOT_ENV_VAR} does not name a directory: {}", root.display());
    }
    Ok(root)
}

/// Derive the package root from a canonical executable path.
///
/// `<root>/bin/flacarray-config` reports `<root>`; an executable living
/// anywhere else reports its own directory.
fn root_from_exe(exe: &Path) -> Result<PathBuf> {
    let Some(exe_dir) = exe.parent() else {
        bail!("Executable path has no parent directory: {}", exe.display());
    };

    if exe_dir.file_name().is_some_and(|name| name == "bin")
        && let Some(root) = exe_dir.parent()
    {
        return Ok(root.to_path_buf());
    }

    Ok(exe_dir.to_path_buf())
}
