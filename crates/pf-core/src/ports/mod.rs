//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! or platform adapters that implement them. The catalog logic itself never
//! touches a port: it receives entries and viewport facts as plain values.

pub mod app_dirs;
mod clock;
pub mod content_source;
pub mod errors;
pub mod settings;
mod viewport;

pub use app_dirs::AppDirsPort;
pub use clock::*;
pub use content_source::ContentSourcePort;
pub use errors::AppDirsError;
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use viewport::*;
