//! Command handlers
//!
//! Each command takes the runtime plus plain arguments and returns
//! `Result<serde_json::Value, String>`, ready to print or send.

pub mod catalog;
pub mod dto;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod settings;

pub use error::map_err;
