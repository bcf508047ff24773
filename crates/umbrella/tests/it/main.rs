//! Integration tests for [`stackcall`].

#[cfg(feature = "table")]
mod table;
