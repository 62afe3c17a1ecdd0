//! Taskflow: a minimal task-management service.
//!
//! Clients query and mutate tasks through a typed graph API backed by a
//! document store.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (document store, memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage gateway, repositories and service
//! - [`api`]: Graph API schema over the task service
//! - [`server`]: HTTP surface serving the graph API
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
