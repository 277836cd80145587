//! AWS-oriented adapters and handlers for the employee registry.
//!
//! This crate owns runtime integration details (Lambda entrypoints, the
//! store adapter seam, and DynamoDB item marshalling) and exposes a single
//! runtime module boundary for the contract, envelope, and routing
//! primitives owned by `employee_registry_core`.

pub mod adapters;
pub mod handlers;
pub mod runtime;
