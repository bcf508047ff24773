use core::mem::{align_of, size_of, MaybeUninit};

type Word = MaybeUninit<*const ()>;

const WORDS: usize = RawCell::CAPACITY.div_ceil(size_of::<Word>());

/// Inline, pointer-aligned storage for a method and the instance it is invoked on.
///
/// The [`CAPACITY`] is large enough for a function pointer followed by a wide pointer, such as a
/// `&dyn Trait` or a `&[T]`, which is the largest reference Rust produces.
///
/// [`CAPACITY`]: RawCell::CAPACITY
#[derive(Clone, Copy)]
pub struct RawCell {
    words: [Word; WORDS],
}

/// Rejects types that cannot be stored in a [`RawCell`] when [`RawCell::new()`] is instantiated.
struct Fits<T>(core::marker::PhantomData<T>);

impl<T> Fits<T> {
    const ASSERT: () = assert!(
        RawCell::can_store::<T>(),
        "bound method and instance do not fit into the inline storage of a `Callable`"
    );
}

impl RawCell {
    /// The number of bytes available for a method and its instance.
    pub const CAPACITY: usize = size_of::<fn()>() + size_of::<*const dyn core::any::Any>();

    /// Returns `true` if an instance of `T` can be stored in a [`RawCell`].
    ///
    /// This requires that [`size_of::<T>()`] does not exceed the [`CAPACITY`], and that the
    /// alignment of `T` is no stricter than that of a pointer.
    ///
    /// [`size_of::<T>()`]: core::mem::size_of()
    /// [`CAPACITY`]: RawCell::CAPACITY
    pub const fn can_store<T>() -> bool {
        size_of::<T>() <= Self::CAPACITY && align_of::<T>() <= align_of::<Self>()
    }

    pub(crate) fn new<T: Copy>(value: T) -> Self {
        let () = Fits::<T>::ASSERT;

        let mut cell = Self {
            words: [MaybeUninit::uninit(); WORDS],
        };

        // SAFETY: `Fits` ensures the size and alignment of `T` are valid.
        unsafe {
            core::ptr::write(cell.words.as_mut_ptr().cast::<T>(), value);
        }

        cell
    }

    /// Reads a `T` out of the cell.
    ///
    /// # Safety
    ///
    /// The cell must contain a valid instance of `T`, written by [`RawCell::new()`].
    pub(crate) unsafe fn read<T: Copy>(&self) -> T {
        debug_assert!(Self::can_store::<T>());

        // SAFETY: caller ensures the cell contains a valid `T`.
        unsafe { core::ptr::read(self.words.as_ptr().cast::<T>()) }
    }
}

impl core::fmt::Debug for RawCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Can't read bytes, might be `uninit`.
        f.debug_struct("RawCell")
            .field("capacity", &Self::CAPACITY)
            .finish_non_exhaustive()
    }
}
