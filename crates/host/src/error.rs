//! Error types for module loading and release.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors from locating, loading, resolving, or releasing a plugin module.
///
/// Every variant is fatal to a probe run. A module whose entry function ran
/// but returned a failure status is not an error here; that outcome is
/// [`InitStatus::Declined`](crate::InitStatus::Declined).
#[derive(Debug, Error)]
pub enum HostError {
    /// `dlopen` failed: missing file, wrong architecture, or a relocation
    /// failure. The source carries the platform's `dlerror` text.
    #[error("dlopen failed for {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// `dlsym` failed: the module does not export the requested symbol.
    #[error("dlsym failed for symbol '{symbol}'")]
    SymbolNotFound {
        symbol: String,
        #[source]
        source: libloading::Error,
    },

    /// `dlclose` failed: the module could not be unmapped.
    #[error("dlclose failed")]
    Unload {
        #[source]
        source: libloading::Error,
    },

    /// A bundle directory contained no library for this platform.
    #[error("no library for this platform in bundle {0}")]
    LibraryNotFound(PathBuf),

    /// The requested symbol name contained an interior NUL byte.
    #[error("invalid symbol name '{0}'")]
    InvalidSymbolName(String),
}
