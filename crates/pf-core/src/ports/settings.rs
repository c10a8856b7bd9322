use async_trait::async_trait;

use crate::settings::model::Settings;

#[async_trait]
pub trait SettingsPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Settings>;
    async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
}

/// One schema step, `from_version()` → `to_version()`.
pub trait SettingsMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, settings: Settings) -> anyhow::Result<Settings>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        SettingsStore {}
        #[async_trait]
        impl SettingsPort for SettingsStore {
            async fn load(&self) -> anyhow::Result<Settings>;
            async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
        }
    }

    #[tokio::test]
    async fn port_is_usable_as_trait_object() {
        let mut mock = MockSettingsStore::new();
        mock.expect_load().returning(|| Ok(Settings::default()));
        mock.expect_save().times(1).returning(|_| Ok(()));

        let port: Box<dyn SettingsPort> = Box::new(mock);
        let settings = port.load().await.unwrap();
        port.save(&settings).await.unwrap();
    }
}
