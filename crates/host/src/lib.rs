//! Entrycheck Host - Loading and probing native plugin modules.
//!
//! A plugin module is a shared object exporting a single well-known entry
//! function. This crate owns the load / resolve / invoke / release sequence:
//!
//! 1. [`library_path`] turns a module path (plain file or bundle directory)
//!    into the shared object to open.
//! 2. [`Module::load`] opens it with lazy symbol binding.
//! 3. [`Module::entry`] resolves the entry export into an [`EntryPoint`].
//! 4. [`EntryPoint::invoke`] runs it and yields an [`InitStatus`].
//! 5. [`Module::close`] releases the module.

#[cfg(not(unix))]
compile_error!("entrycheck-host requires dlopen semantics and only builds on Unix");

mod entry;
mod error;
mod locate;
mod module;

pub use entry::{EntryPoint, InitStatus};
pub use error::{HostError, Result};
pub use locate::library_path;
pub use module::Module;

/// Entry symbol plugin modules are expected to export.
pub const DEFAULT_ENTRY_SYMBOL: &str = "ModuleEntry";
