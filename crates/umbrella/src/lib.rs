//! Fixed-size, allocation-free callables that invoke either a free function or a method bound to
//! an instance, with one uniform call site.
//!
//! # Related Crates
//!
//! The implementation for [`stackcall`](crate) is split into component crates:
//! - [`stackcall_callable`], which provides [`Callable`] and the [`Signature`] trait. Its items
//!   are re-exported in the crate root.
//! - [`stackcall_table`], which provides fixed-capacity callback tables. It is enabled by the
//!   [`table`](crate#table) feature flag, and is re-exported as the [`table`] module.
//!
//! # Feature Flags
//!
//! By default, the [`std`](crate#std) and [`table`](crate#table) flags are enabled.
//!
//! ## `std`
//!
//! Enables a dependency on the [Rust standard library](std), implementing
//! `std::error::Error` for the error types in the [`table`] module.
//!
//! - Enabled by: [`default`](crate#feature-flags)
//!
//! ## `table`
//!
//! Provides fixed-capacity callback tables, enabling the [`table`] module. Adds a dependency on
//! the [`stackcall_table`] crate.
//!
//! - Enabled by: [`default`](crate#feature-flags)

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub use stackcall_callable::{raw, Callable, Signature};

#[cfg(feature = "table")]
#[doc(inline)]
pub use stackcall_table as table;
