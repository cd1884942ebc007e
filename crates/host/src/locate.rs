//! Resolving a module path to the shared object to load.

use std::env::consts::ARCH;
use std::path::{Path, PathBuf};

use crate::error::{HostError, Result};

/// Resolves `module` to the shared object [`Module::load`] should open.
///
/// Anything that is not a directory is returned unchanged, so a nonexistent
/// path still reaches the loader and produces its platform diagnostic. A
/// directory is treated as a bundle and resolves to
/// `Contents/<arch>-linux/<stem>.so`, the layout audio plugin bundles use on
/// Linux.
///
/// [`Module::load`]: crate::Module::load
pub fn library_path(module: &Path) -> Result<PathBuf> {
    if !module.is_dir() {
        return Ok(module.to_owned());
    }

    let stem = module
        .file_stem()
        .ok_or_else(|| HostError::LibraryNotFound(module.to_owned()))?;

    let candidate = module
        .join("Contents")
        .join(format!("{ARCH}-linux"))
        .join(stem)
        .with_extension("so");

    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(HostError::LibraryNotFound(module.to_owned()))
    }
}
