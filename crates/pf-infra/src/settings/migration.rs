use anyhow::{bail, Result};
use pf_core::ports::SettingsMigrationPort;
use pf_core::settings::model::{CatalogSettings, Settings, CURRENT_SCHEMA_VERSION};
use pf_core::settings::SettingsVersion;
use tracing::info;

/// v1 → v2: the `catalog` section appears.
///
/// Serde already fills a missing section with defaults, so the step only has
/// to make sure v1 files never carry a half-populated section forward.
struct MigrationV1ToV2;

impl SettingsMigrationPort for MigrationV1ToV2 {
    fn from_version(&self) -> u32 {
        SettingsVersion::V1.as_u32()
    }

    fn to_version(&self) -> u32 {
        SettingsVersion::V2.as_u32()
    }

    fn migrate(&self, mut settings: Settings) -> Result<Settings> {
        settings.catalog = CatalogSettings::default();
        settings.schema_version = self.to_version();
        Ok(settings)
    }
}

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(MigrationV1ToV2)],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        loop {
            let current = settings.schema_version;

            if current >= CURRENT_SCHEMA_VERSION {
                break;
            }

            let Some(migration) = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
            else {
                bail!("no settings migration found from version {current}");
            };

            settings = migration.migrate(settings)?;
            info!(
                from = migration.from_version(),
                to = migration.to_version(),
                "Settings migrated"
            );
        }

        Ok(settings)
    }
}
