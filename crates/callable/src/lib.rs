//! A fixed-size, allocation-free wrapper that can invoke either a free function or a method
//! bound to an instance through one call site.
//!
//! A [`Callable`] stores a single *dispatch pointer* next to a small inline buffer. The buffer
//! holds either a function pointer or a `(method, instance)` pair, and the dispatch pointer knows
//! how to read it back. Calling the wrapper never needs to know which of the two is present.
//!
//! ```
//! use core::cell::Cell;
//! use stackcall_callable::Callable;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! struct Counter {
//!     count: Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self, by: i32) -> i32 {
//!         self.count.set(self.count.get() + by);
//!         self.count.get()
//!     }
//! }
//!
//! let sum = Callable::<fn(i32, i32) -> i32>::from_fn(add);
//! assert_eq!(sum.call(2, 3), 5);
//!
//! let counter = Counter { count: Cell::new(10) };
//! let increment = Callable::<fn(i32) -> i32>::from_method(&counter, Counter::increment);
//! assert_eq!(increment.call(4), 14);
//! assert_eq!(counter.count.get(), 14);
//! ```
//!
//! The wrapper does not own what it refers to. The instance is borrowed for `'a`, and the
//! referenced functions are plain function pointers.

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

/// Invokes `$macro` with every supported parameter list, from zero to nine arguments.
macro_rules! with_parameters {
    ($macro:ident) => {
        $macro! {
            fn "no arguments" () = 0;
            fn "one argument" (a0: A0) = 1;
            fn "two arguments" (a0: A0, a1: A1) = 2;
            fn "three arguments" (a0: A0, a1: A1, a2: A2) = 3;
            fn "four arguments" (a0: A0, a1: A1, a2: A2, a3: A3) = 4;
            fn "five arguments" (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4) = 5;
            fn "six arguments" (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5) = 6;
            fn "seven arguments" (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6) = 7;
            fn "eight arguments" (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7) = 8;
            fn "nine arguments" (a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8) = 9;
        }
    };
}

pub mod raw;
mod signature;

pub use signature::Signature;

use raw::RawData;

/// A non-owning reference to either a free function or a method bound to an instance.
///
/// The type parameter `S` is the function pointer type describing the call, for example
/// `fn(i32, i32) -> i32`. See [`Signature`] for the supported forms.
///
/// # Representations
///
/// A [`Callable`] is created with exactly one of two constructors, and cannot be rebound
/// afterwards:
/// - [`from_fn()`] stores a function pointer of type `S`.
/// - [`from_method()`] stores a method of type [`S::Method<I>`] together with the instance `I`
///   it is invoked on.
///
/// Both are invoked with [`call()`] (or [`call_with()`] from generic code).
///
/// # Size
///
/// The size is the same for every `S` and does not depend on the constructor used: one dispatch
/// pointer followed by [`RawCell::CAPACITY`] bytes of pointer-aligned storage.
///
/// # Thread Safety
///
/// The instance type is erased, so whether it may be shared across threads is unknown. A
/// [`Callable`] is therefore neither [`Send`] nor [`Sync`], even for signatures and instances that
/// are:
///
/// ```compile_fail
/// # use stackcall_callable::Callable;
/// fn double(value: i32) -> i32 {
///     value * 2
/// }
///
/// let doubled = Callable::<fn(i32) -> i32>::from_fn(double);
/// std::thread::spawn(move || doubled.call(21));
/// ```
///
/// [`from_fn()`]: Callable::from_fn()
/// [`from_method()`]: Callable::from_method()
/// [`S::Method<I>`]: Signature::Method
/// [`call()`]: Callable::call()
/// [`call_with()`]: Callable::call_with()
/// [`RawCell::CAPACITY`]: raw::RawCell::CAPACITY
pub struct Callable<'a, S: Signature> {
    /// Always corresponds to the representation written into `data`.
    dispatch: S::Dispatch,
    data: RawData<S>,
    _marker: core::marker::PhantomData<CallablePhantom<'a>>,
}

struct CallablePhantom<'a> {
    /// Allows a [`Callable`] to reference instances that live for at least `'a`.
    _lifetime: &'a (),
    /// The erased instance may not be thread safe, so a [`Callable`] is neither [`Send`] nor
    /// [`Sync`].
    _not_thread_safe: *const (),
}

impl<'a, S: Signature> Callable<'a, S> {
    /// Creates a [`Callable`] that invokes the given free function.
    ///
    /// The function is typically a function item that is coerced to `S`:
    ///
    /// ```
    /// # use stackcall_callable::Callable;
    /// let len = Callable::<fn(&'static str) -> usize>::from_fn(str::len);
    /// assert_eq!(len.call("hello"), 5);
    /// ```
    pub fn from_fn(function: S) -> Self {
        Self {
            dispatch: S::function_dispatch(),
            data: RawData::from_fn(function),
            _marker: core::marker::PhantomData,
        }
    }

    /// Creates a [`Callable`] that invokes `method` on the given `instance`.
    ///
    /// The `instance` is usually a shared reference, but can be any [`Copy`] handle, including
    /// references to trait objects. Methods that mutate their instance should do so through
    /// interior mutability.
    ///
    /// # Compile Errors
    ///
    /// The `(method, instance)` pair must fit into the [`RawCell`]. Otherwise, the program is
    /// rejected when `from_method` is instantiated:
    ///
    /// ```compile_fail
    /// # use stackcall_callable::Callable;
    /// fn sum(words: [usize; 4], extra: usize) -> usize {
    ///     words.iter().sum::<usize>() + extra
    /// }
    ///
    /// let oversized = Callable::<fn(usize) -> usize>::from_method([1usize; 4], sum);
    /// ```
    ///
    /// Instances requiring stricter alignment than a pointer are rejected as well:
    ///
    /// ```compile_fail
    /// # use stackcall_callable::Callable;
    /// #[derive(Clone, Copy)]
    /// #[repr(align(16))]
    /// struct Wide(u8);
    ///
    /// let overaligned =
    ///     Callable::<fn(u8) -> u8>::from_method(Wide(1), |wide: Wide, value| wide.0 + value);
    /// ```
    ///
    /// [`RawCell`]: raw::RawCell
    pub fn from_method<I: Copy + 'a>(instance: I, method: S::Method<I>) -> Self {
        Self {
            dispatch: S::method_dispatch::<I>(),
            data: RawData::from_method(instance, method),
            _marker: core::marker::PhantomData,
        }
    }

    /// Invokes the active representation with the arguments given as a tuple.
    ///
    /// This is equivalent to [`call()`], but can be used by code that is generic over the
    /// [`Signature`].
    ///
    /// [`call()`]: Callable::call()
    #[inline]
    pub fn call_with(&self, arguments: S::Args) -> S::Output {
        // SAFETY: `dispatch` was installed alongside the representation in `data`.
        unsafe { S::invoke(self.dispatch, &self.data, arguments) }
    }
}

macro_rules! calls {
    {$(
        fn $description:literal ($($argument:ident: $param:ident),*) = $arity:literal;
    )*} => {$(
        #[allow(clippy::too_many_arguments)]
        impl<'a, $($param,)* R> Callable<'a, fn($($param),*) -> R> {
            #[doc = concat!(
                "Invokes the stored function or bound method with ",
                $description,
                ", returning its result unchanged."
            )]
            #[inline]
            pub fn call(&self $(, $argument: $param)*) -> R {
                // SAFETY: `dispatch` was installed alongside the representation in `data`.
                unsafe { (self.dispatch)(&self.data $(, $argument)*) }
            }
        }
    )*};
}

with_parameters!(calls);

impl<S: Signature> From<S> for Callable<'_, S> {
    fn from(function: S) -> Self {
        Self::from_fn(function)
    }
}

impl<S: Signature> Clone for Callable<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for Callable<'_, S> {}

impl<S: Signature> core::fmt::Debug for Callable<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &core::any::type_name::<S>())
            .finish_non_exhaustive()
    }
}
