//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthPanel` owns the panel state signal and hands a dispatch callback to
//! its children; the children only read state and emit actions.

pub mod auth_form;
pub mod auth_panel;
pub mod field_input;
pub mod google_button;
pub mod toggle_panel;
