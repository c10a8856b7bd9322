pub mod defaults;
pub mod model;
pub mod version;

pub use model::{CatalogSettings, GeneralSettings, Settings, Theme, CURRENT_SCHEMA_VERSION};
pub use version::SettingsVersion;
