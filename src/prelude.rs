//! Prelude module for jalali_date crate.
//!
//! Re-exports the derive_more macros used by the date value types.

pub use derive_more::Display;
