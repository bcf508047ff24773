//! Fixed-capacity tables of [`Callable`]s, for use as callback registries and event handler
//! tables that must not allocate.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod array;
mod error;

pub use array::CallbackTable;
pub use error::{AccessError, CapacityError};

#[doc(no_inline)]
pub use stackcall_callable::{Callable, Signature};

/// Identifies a slot in a [`CallbackTable`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handle(u32);

impl Handle {
    /// Creates a [`Handle`] referring to the slot at the given `index`.
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// The index of the slot.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
