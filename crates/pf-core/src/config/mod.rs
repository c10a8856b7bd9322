//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTOs mapped from the TOML config file. No validation, no
//! policy, no default computation: an empty path is a fact the caller
//! resolves, not an error.

mod app_config;

pub use app_config::AppConfig;
