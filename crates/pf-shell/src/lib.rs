//! # pf-shell
//!
//! Outer layer of the portfolio site.
//!
//! ## Modules
//!
//! - **bootstrap**: config loading, tracing, dependency wiring and the runtime
//! - **commands**: command handlers returning JSON to the caller

pub mod bootstrap;
pub mod commands;

pub use bootstrap::{create_runtime, load_config, AppRuntime};
