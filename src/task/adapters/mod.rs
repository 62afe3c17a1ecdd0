//! Adapter implementations of the task ports.
//!
//! - [`mongo`]: document-store gateway and repository
//! - [`memory`]: in-process repository for tests and local tooling

pub mod memory;
pub mod mongo;
