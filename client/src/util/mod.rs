//! Helpers behind the auth panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, the Google
//! script) from the pure validation and decoding logic so the latter can be
//! unit-tested natively.

pub mod gsi;
pub mod identity;
pub mod session;
pub mod validate;
