#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum AccessErrorKind {
    OutOfBounds { capacity: u32 },
    Vacant,
}

/// Error type used when a [`Handle`] does not refer to a registered callback.
///
/// [`Handle`]: crate::Handle
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AccessError {
    pub(crate) index: u32,
    pub(crate) kind: AccessErrorKind,
}

impl AccessError {
    /// The slot index that was accessed.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns `true` if the index was in bounds, but no callback was registered there.
    pub fn is_vacant(&self) -> bool {
        matches!(self.kind, AccessErrorKind::Vacant)
    }
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            AccessErrorKind::OutOfBounds { capacity } => write!(
                f,
                "index {} is out of bounds for a table of {capacity} callbacks",
                self.index
            ),
            AccessErrorKind::Vacant => {
                write!(f, "no callback registered at index {}", self.index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccessError {}

/// Error type used when a [`CallbackTable`] has no free slots left.
///
/// [`CallbackTable`]: crate::CallbackTable
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CapacityError {
    pub(crate) capacity: u32,
}

impl CapacityError {
    /// The number of slots in the table.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "all {} callback slots are in use", self.capacity)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}
