//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The panel has a single state object driven by an action reducer, so every
//! transition is testable without a browser.

pub mod auth;
