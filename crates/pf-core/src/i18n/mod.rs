//! UI string table for the supported languages.
//!
//! ## Behavior / 行为
//!
//! - Keys form a closed set ([`UiKey`]); an unknown key string parses to `None`.
//! - Every key has a string in every [`Language`], so lookup cannot fail.

mod language;
mod ui;

pub use language::{Language, UnknownLanguage};
pub use ui::{translate, UiKey};
