//! Types describing the storage of a [`Callable`].
//!
//! [`Callable`]: crate::Callable

mod cell;

pub use cell::RawCell;

use crate::Signature;

/// A method together with the instance it is invoked on.
///
/// This is the record stored in a [`RawCell`] by [`Callable::from_method()`].
///
/// [`Callable::from_method()`]: crate::Callable::from_method()
#[derive(Clone, Copy)]
#[repr(C)]
pub(crate) struct MethodRecord<I, M> {
    pub(crate) method: M,
    pub(crate) instance: I,
}

/// The storage shared by both representations of a [`Callable`].
///
/// Only the dispatch pointer stored next to it knows which field is initialized, so the contents
/// cannot be inspected.
///
/// [`Callable`]: crate::Callable
pub union RawData<S: Signature> {
    function: S,
    cell: RawCell,
}

impl<S: Signature> RawData<S> {
    pub(crate) fn from_fn(function: S) -> Self {
        Self { function }
    }

    pub(crate) fn from_method<I: Copy>(instance: I, method: S::Method<I>) -> Self {
        Self {
            cell: RawCell::new(MethodRecord { method, instance }),
        }
    }

    /// # Safety
    ///
    /// The data must have been created with [`RawData::from_fn()`].
    pub(crate) unsafe fn function(&self) -> S {
        // SAFETY: caller ensures `function` is the initialized field.
        unsafe { self.function }
    }

    /// # Safety
    ///
    /// The data must have been created with [`RawData::from_method()`] for the instance type `I`.
    pub(crate) unsafe fn method<I: Copy>(&self) -> MethodRecord<I, S::Method<I>> {
        // SAFETY: caller ensures `cell` is the initialized field, and that it contains a record of
        // this exact type.
        unsafe { self.cell.read::<MethodRecord<I, S::Method<I>>>() }
    }
}

impl<S: Signature> Clone for RawData<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for RawData<S> {}

impl<S: Signature> core::fmt::Debug for RawData<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Can't read either field without knowing which one is initialized.
        f.debug_struct("RawData").finish_non_exhaustive()
    }
}
