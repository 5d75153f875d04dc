//! Word lists and dictionary handling
//!
//! Provides the embedded builtin word list, the normalization contract for
//! external lists, and the caller-owned [`Dictionary`] value.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{BUILTIN, BUILTIN_COUNT};
