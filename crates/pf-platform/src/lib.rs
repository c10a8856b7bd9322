//! # pf-platform
//!
//! Adapters for facts that come from the host: where per-user data lives
//! and how large the window currently is.

pub mod app_dirs;
pub mod viewport;

pub use app_dirs::DirsAppDirsAdapter;
pub use viewport::ObservedViewport;
