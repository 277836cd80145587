//! Module boundary over the domain primitives consumed by this crate.

pub use employee_registry_core::{contract, envelope, routing};
