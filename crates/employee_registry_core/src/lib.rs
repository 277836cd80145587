//! Shared employee registry domain primitives.
//!
//! This crate owns deterministic request/response contracts, envelope
//! canonicalization, and route resolution. It intentionally excludes AWS SDK
//! and Lambda runtime concerns; those live in `employee_registry_lambda`.

pub mod contract;
pub mod envelope;
pub mod routing;
