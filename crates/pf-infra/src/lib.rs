//! Infrastructure adapters for the portfolio site: content collections on
//! disk, the JSON settings file and the system clock.

pub mod content;
pub mod settings;
pub mod time;

pub use content::{ContentError, FileContentSource};
pub use settings::{FileSettingsRepository, SettingsMigrator};
pub use time::SystemClock;
