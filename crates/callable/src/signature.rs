use crate::raw::RawData;

#[allow(unreachable_pub)]
mod private {
    pub trait Sealed {}
}

/// Describes the argument and result types of a [`Callable`].
///
/// This trait is implemented for function pointer types with up to nine parameters, such as
/// `fn()`, `fn(i32) -> i32` or `fn(u8, &'a str) -> Option<char>`. It cannot be implemented
/// outside of this crate.
///
/// Parameters whose types contain elided lifetimes (`fn(&str)`) are *higher-ranked* and do not
/// implement this trait. Name the lifetime instead (`fn(&'a str)`).
///
/// [`Callable`]: crate::Callable
pub trait Signature: Copy + private::Sealed {
    /// The type returned by the function.
    type Output;

    /// The parameter types, in order, as a tuple.
    type Args;

    /// Function pointer type for methods invoked on an instance of type `I`.
    ///
    /// For a signature `fn(A0, A1) -> R`, this is `fn(I, A0, A1) -> R`: the instance is passed
    /// as an implicit leading parameter.
    type Method<I>: Copy;

    /// Function pointer type used to invoke the active representation of a [`Callable`].
    ///
    /// For a signature `fn(A0, A1) -> R`, this is `unsafe fn(&RawData<Self>, A0, A1) -> R`.
    ///
    /// [`Callable`]: crate::Callable
    type Dispatch: Copy;

    /// The number of parameters.
    const ARITY: usize;

    /// Returns the dispatch pointer used when the [`RawData`] contains a function pointer.
    #[doc(hidden)]
    fn function_dispatch() -> Self::Dispatch;

    /// Returns the dispatch pointer used when the [`RawData`] contains a method invoked on an
    /// instance of type `I`.
    #[doc(hidden)]
    fn method_dispatch<I: Copy>() -> Self::Dispatch;

    /// Calls the `dispatch` pointer with the arguments unpacked from a tuple.
    ///
    /// # Safety
    ///
    /// The `dispatch` pointer must have been produced for the representation stored in `data`.
    #[doc(hidden)]
    unsafe fn invoke(dispatch: Self::Dispatch, data: &RawData<Self>, arguments: Self::Args)
        -> Self::Output;
}

macro_rules! signatures {
    {$(
        fn $description:literal ($($argument:ident: $param:ident),*) = $arity:literal;
    )*} => {$(
        impl<$($param,)* R> private::Sealed for fn($($param),*) -> R {}

        #[allow(clippy::too_many_arguments)]
        impl<$($param,)* R> Signature for fn($($param),*) -> R {
            type Output = R;
            type Args = ($($param,)*);
            type Method<I> = fn(I $(, $param)*) -> R;
            type Dispatch = unsafe fn(&RawData<Self> $(, $param)*) -> R;

            const ARITY: usize = $arity;

            fn function_dispatch() -> Self::Dispatch {
                let dispatch: Self::Dispatch = |data $(, $argument)*| {
                    // SAFETY: caller ensures `data` contains a function pointer.
                    let function = unsafe { data.function() };
                    function($($argument),*)
                };

                dispatch
            }

            fn method_dispatch<I: Copy>() -> Self::Dispatch {
                let dispatch: Self::Dispatch = |data $(, $argument)*| {
                    // SAFETY: caller ensures `data` contains a method record for `I`.
                    let record = unsafe { data.method::<I>() };
                    (record.method)(record.instance $(, $argument)*)
                };

                dispatch
            }

            unsafe fn invoke(
                dispatch: Self::Dispatch,
                data: &RawData<Self>,
                ($($argument,)*): Self::Args,
            ) -> R {
                // SAFETY: ensured by caller.
                unsafe { dispatch(data $(, $argument)*) }
            }
        }
    )*};
}

with_parameters!(signatures);
