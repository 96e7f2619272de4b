// src/registry/mod.rs

//! Command registry client.
//!
//! - [`model`] holds the wire model (`CommandSpec`, `CommandFormat`).
//! - [`api`] holds the `Registry` trait and the HTTP implementation the
//!   executor uses in production.

pub mod api;
pub mod model;

pub use api::{HttpRegistry, Registry};
pub use model::{BinaryLocation, CommandFormat, CommandSpec};
