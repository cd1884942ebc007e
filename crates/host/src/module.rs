//! Owned handle to a loaded plugin module.

use std::ffi::c_void;
use std::fmt;
use std::mem::ManuallyDrop;
use std::path::{Path, PathBuf};

use libloading::os::unix::{Library, RTLD_LAZY, RTLD_LOCAL};

use crate::entry::{EntryPoint, RawEntryFn};
use crate::error::{HostError, Result};

/// An owned handle to a dynamically loaded plugin module.
///
/// The handle is released when the module is dropped; use [`Module::close`]
/// to release it explicitly and observe `dlclose` failures. Because `close`
/// consumes the module, releasing the same handle twice is impossible.
pub struct Module {
    handle: *mut c_void,
    path: PathBuf,
}

impl Module {
    /// Opens the shared object at `path` with lazy symbol binding.
    ///
    /// Symbols referenced inside the module are resolved on first use, not
    /// at load time (`RTLD_LAZY`), and the module's own exports are not made
    /// visible to later loads (`RTLD_LOCAL`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let library =
            unsafe { Library::open(Some(path), RTLD_LAZY | RTLD_LOCAL) }.map_err(|source| {
                HostError::Load {
                    path: path.to_owned(),
                    source,
                }
            })?;

        Ok(Self {
            handle: library.into_raw(),
            path: path.to_owned(),
        })
    }

    /// Resolves the exported entry function named `symbol`.
    ///
    /// The returned [`EntryPoint`] borrows this module, so it cannot outlive
    /// the mapping its function pointer points into.
    pub fn entry(&self, symbol: &str) -> Result<EntryPoint<'_>> {
        if symbol.contains('\0') {
            return Err(HostError::InvalidSymbolName(symbol.to_owned()));
        }

        // Borrow the raw handle as a library for the lookup. Ownership (and
        // with it the single release) stays with the module.
        let library = ManuallyDrop::new(unsafe { Library::from_raw(self.handle) });
        let func = unsafe {
            *library
                .get::<RawEntryFn>(symbol.as_bytes())
                .map_err(|source| HostError::SymbolNotFound {
                    symbol: symbol.to_owned(),
                    source,
                })?
        };

        Ok(EntryPoint::new(func, self.handle, symbol))
    }

    /// Path the module was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Releases the module, consuming the handle.
    ///
    /// Fails with [`HostError::Unload`] if the platform refuses to unmap the
    /// module, for example because it is still referenced.
    pub fn close(self) -> Result<()> {
        let mut this = ManuallyDrop::new(self);
        let _path = std::mem::take(&mut this.path);

        let library = unsafe { Library::from_raw(this.handle) };
        library.close().map_err(|source| HostError::Unload { source })
    }
}

impl Drop for Module {
    fn drop(&mut self) {
        // Best-effort release for early-exit paths; `close` is the checked
        // release on the success path.
        drop(unsafe { Library::from_raw(self.handle) });
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module").field("path", &self.path).finish()
    }
}
