use crate::{error::AccessErrorKind, AccessError, Callable, CapacityError, Handle, Signature};
use core::cell::Cell;

/// A table of up to `N` [`Callable`]s backed by an array.
///
/// Slots are modified through shared references, so callbacks may register or unregister other
/// callbacks (or themselves) while being dispatched.
pub struct CallbackTable<'a, S: Signature, const N: usize> {
    slots: [Cell<Option<Callable<'a, S>>>; N],
}

impl<'a, S: Signature, const N: usize> CallbackTable<'a, S, N> {
    /// The number of slots in the table, truncated to a [`u32`] value.
    #[allow(clippy::cast_possible_truncation)]
    pub const CAPACITY: u32 = if (usize::BITS > u32::BITS) && (N > u32::MAX as usize) {
        u32::MAX
    } else {
        N as u32
    };

    #[allow(clippy::declare_interior_mutable_const)]
    const VACANT: Cell<Option<Callable<'a, S>>> = Cell::new(None);

    /// Creates a new table with every slot vacant.
    pub const fn new() -> Self {
        Self {
            slots: [Self::VACANT; N],
        }
    }

    fn slot(&self, handle: Handle) -> Result<&Cell<Option<Callable<'a, S>>>, AccessError> {
        usize::try_from(handle.index())
            .ok()
            .and_then(|index| self.slots.get(index))
            .ok_or(AccessError {
                index: handle.index(),
                kind: AccessErrorKind::OutOfBounds {
                    capacity: Self::CAPACITY,
                },
            })
    }

    fn vacant(handle: Handle) -> AccessError {
        AccessError {
            index: handle.index(),
            kind: AccessErrorKind::Vacant,
        }
    }

    /// Returns the total number of slots.
    pub fn capacity(&self) -> u32 {
        Self::CAPACITY
    }

    /// Returns the number of registered callbacks.
    pub fn len(&self) -> u32 {
        let count = self
            .slots
            .iter()
            .filter(|slot| slot.get().is_some())
            .count();

        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Returns `true` if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.get().is_none())
    }

    /// Stores the `callable` in the first vacant slot.
    ///
    /// # Errors
    ///
    /// Returns an error if every slot is occupied.
    pub fn register(&self, callable: Callable<'a, S>) -> Result<Handle, CapacityError> {
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.get().is_none() {
                let Ok(index) = u32::try_from(index) else {
                    break;
                };

                slot.set(Some(callable));
                return Ok(Handle::from_index(index));
            }
        }

        Err(CapacityError {
            capacity: Self::CAPACITY,
        })
    }

    /// Stores the `callable` in the given slot, returning the callback that was previously
    /// registered there.
    ///
    /// # Errors
    ///
    /// Returns an error if the `handle` is out of bounds.
    pub fn replace(
        &self,
        handle: Handle,
        callable: Callable<'a, S>,
    ) -> Result<Option<Callable<'a, S>>, AccessError> {
        Ok(self.slot(handle)?.replace(Some(callable)))
    }

    /// Removes the callback in the given slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the `handle` is out of bounds, or if the slot is vacant.
    pub fn unregister(&self, handle: Handle) -> Result<Callable<'a, S>, AccessError> {
        self.slot(handle)?
            .take()
            .ok_or_else(|| Self::vacant(handle))
    }

    /// Gets the callback in the given slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the `handle` is out of bounds, or if the slot is vacant.
    pub fn get(&self, handle: Handle) -> Result<Callable<'a, S>, AccessError> {
        self.slot(handle)?.get().ok_or_else(|| Self::vacant(handle))
    }

    /// Invokes the callback in the given slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the `handle` is out of bounds, or if the slot is vacant. The callback
    /// itself cannot fail.
    pub fn dispatch(&self, handle: Handle, arguments: S::Args) -> Result<S::Output, AccessError> {
        Ok(self.get(handle)?.call_with(arguments))
    }

    /// Invokes every registered callback in slot order, discarding the results.
    ///
    /// Returns the number of callbacks that were invoked.
    pub fn broadcast(&self, arguments: S::Args) -> u32
    where
        S::Args: Clone,
    {
        self.broadcast_with(arguments, |_, _| ())
    }

    /// Invokes every registered callback in slot order, passing each result to `f`.
    ///
    /// A slot is read right before its callback is invoked, so changes made to later slots by an
    /// earlier callback are observed.
    ///
    /// Returns the number of callbacks that were invoked.
    pub fn broadcast_with<F>(&self, arguments: S::Args, mut f: F) -> u32
    where
        S::Args: Clone,
        F: FnMut(Handle, S::Output),
    {
        let mut invoked = 0u32;
        for (index, slot) in self.slots.iter().enumerate() {
            let (Some(callable), Ok(index)) = (slot.get(), u32::try_from(index)) else {
                continue;
            };

            f(Handle::from_index(index), callable.call_with(arguments.clone()));
            invoked = invoked.saturating_add(1);
        }

        invoked
    }

    /// Returns an iterator over the registered callbacks and their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, Callable<'a, S>)> + '_ {
        self.slots
            .iter()
            .zip(0..Self::CAPACITY)
            .filter_map(|(slot, index)| Some((Handle::from_index(index), slot.get()?)))
    }

    /// Unregisters every callback.
    pub fn clear(&self) {
        for slot in self.slots.iter() {
            slot.set(None);
        }
    }
}

impl<S: Signature, const N: usize> Default for CallbackTable<'_, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Signature, const N: usize> From<[Callable<'a, S>; N]> for CallbackTable<'a, S, N> {
    fn from(callables: [Callable<'a, S>; N]) -> Self {
        Self {
            slots: callables.map(|callable| Cell::new(Some(callable))),
        }
    }
}

impl<S: Signature, const N: usize> core::fmt::Debug for CallbackTable<'_, S, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
