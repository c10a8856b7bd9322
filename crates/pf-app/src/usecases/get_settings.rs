//! Use case for getting application settings
//! 获取应用设置的用例

use std::sync::Arc;

use anyhow::Result;
use pf_core::ports::settings::SettingsPort;
use pf_core::settings::model::Settings;
use tracing::{info, info_span, Instrument};

/// Use case for retrieving application settings.
///
/// ## Behavior / 行为
/// - Loads settings from the settings port
/// - Returns the complete settings structure
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            info!("Retrieving application settings");

            let result = self.settings.load().await?;

            info!(theme = %result.general.theme, "Settings retrieved successfully");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
