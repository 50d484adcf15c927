//! Data shapes exchanged with storage and the identity provider.

pub mod types;
