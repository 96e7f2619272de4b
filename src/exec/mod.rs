// src/exec/mod.rs

//! Command execution layer.
//!
//! - [`executor`] builds an executor from raw arguments: parse the
//!   reference, open the log session, resolve the specification, dispatch
//!   on format.
//! - [`binary`] runs `binary`-format commands as local subprocesses and
//!   multiplexes their output into the log.
//! - [`log_session`] owns the per-invocation log file.

pub mod binary;
pub mod executor;
pub mod log_session;

pub use executor::{Executor, new};
pub use log_session::LogSession;
