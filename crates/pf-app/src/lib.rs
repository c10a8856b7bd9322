//! Portfolio Application Orchestration Layer
//!
//! Use cases that load content, open catalog sessions over it and manage
//! user preferences. Everything external arrives through `pf_core::ports`.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
