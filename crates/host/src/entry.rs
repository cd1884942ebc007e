//! Typed adapter around a resolved module entry function.

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;

use crate::module::Module;

/// ABI of the module entry export.
///
/// The dynamic loader cannot verify this signature; it is assumed. The
/// contract is one opaque pointer-sized argument (the module's own handle)
/// and a one-byte status return where nonzero means the module initialized.
/// A module exporting a different signature under the expected name is
/// undefined behavior at the call site in [`EntryPoint::invoke`].
pub(crate) type RawEntryFn = unsafe extern "C" fn(*mut c_void) -> u8;

/// Outcome of invoking a module's entry function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    /// The entry function returned nonzero: the module initialized.
    Initialized,

    /// The entry function returned zero: the module loaded and its entry
    /// ran, but it declined initialization. Deliberately not a
    /// [`HostError`](crate::HostError) kind.
    Declined,
}

impl InitStatus {
    /// Whether the module reported successful initialization.
    pub fn is_initialized(self) -> bool {
        matches!(self, InitStatus::Initialized)
    }
}

/// A resolved entry function, valid only while its module stays loaded.
///
/// An `EntryPoint` is a transient lookup result with no lifecycle of its
/// own; the borrow on the [`Module`] keeps the mapping alive for as long as
/// the function pointer can be called.
pub struct EntryPoint<'m> {
    func: RawEntryFn,
    handle: *mut c_void,
    symbol: String,
    _module: PhantomData<&'m Module>,
}

impl EntryPoint<'_> {
    pub(crate) fn new(func: RawEntryFn, handle: *mut c_void, symbol: &str) -> Self {
        Self {
            func,
            handle,
            symbol: symbol.to_owned(),
            _module: PhantomData,
        }
    }

    /// Symbol name this entry point was resolved from.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Calls the entry function, passing the module handle as its sole
    /// argument, and interprets the returned status byte.
    pub fn invoke(&self) -> InitStatus {
        // SAFETY: `func` was resolved from the module `handle` belongs to,
        // the lifetime parameter keeps that module loaded, and the assumed
        // calling convention is documented on `RawEntryFn`.
        let status = unsafe { (self.func)(self.handle) };

        if status != 0 {
            InitStatus::Initialized
        } else {
            InitStatus::Declined
        }
    }
}

impl fmt::Debug for EntryPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint")
            .field("symbol", &self.symbol)
            .finish()
    }
}
