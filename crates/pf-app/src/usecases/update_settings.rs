//! Use case for updating application settings
//! 更新应用设置的用例

use std::sync::Arc;

use anyhow::Result;
use pf_core::ports::SettingsPort;
use pf_core::settings::model::{
    CatalogSettings, GeneralSettings, Settings, CURRENT_SCHEMA_VERSION,
};
use tracing::{info, info_span, Instrument};

/// Use case for updating application settings.
///
/// ## Behavior / 行为
/// - Loads current settings for comparison
/// - Rejects documents written for another schema version
/// - Logs changed fields with old/new values
/// - Persists settings through the settings port
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, settings: Settings) -> Result<()> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let old_settings = self.settings.load().await?;

            let changes = SettingsDiff::diff(&old_settings, &settings);
            if !changes.is_empty() {
                info!(
                    changed_fields = %changes.to_log_string(),
                    "Updating application settings"
                );
            } else {
                info!("Updating application settings (no changes detected)");
            }

            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                return Err(anyhow::anyhow!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                ));
            }

            self.settings.save(&settings).await?;

            info!(
                changed_fields = %changes.to_log_string(),
                "Settings updated successfully"
            );
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Represents the difference between two Settings
pub(crate) struct SettingsDiff {
    general: Option<GeneralSettingsDiff>,
    catalog: Option<CatalogSettingsDiff>,
}

impl SettingsDiff {
    pub(crate) fn diff(old: &Settings, new: &Settings) -> Self {
        Self {
            general: GeneralSettingsDiff::diff(&old.general, &new.general),
            catalog: CatalogSettingsDiff::diff(&old.catalog, &new.catalog),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.general.is_none() && self.catalog.is_none()
    }

    pub(crate) fn to_log_string(&self) -> String {
        let mut parts = Vec::new();

        if let Some(ref diff) = self.general {
            parts.push(diff.to_log_string("general"));
        }
        if let Some(ref diff) = self.catalog {
            parts.push(diff.to_log_string("catalog"));
        }

        if parts.is_empty() {
            "(no changes)".to_string()
        } else {
            parts.join(", ")
        }
    }
}

struct GeneralSettingsDiff {
    theme: Option<(String, String)>,
    language: Option<(Option<String>, Option<String>)>,
}

impl GeneralSettingsDiff {
    fn diff(old: &GeneralSettings, new: &GeneralSettings) -> Option<Self> {
        let theme =
            (old.theme != new.theme).then(|| (old.theme.to_string(), new.theme.to_string()));
        let language = (old.language != new.language).then(|| {
            (
                old.language.map(|l| l.code().to_string()),
                new.language.map(|l| l.code().to_string()),
            )
        });

        if theme.is_none() && language.is_none() {
            None
        } else {
            Some(Self { theme, language })
        }
    }

    fn to_log_string(&self, prefix: &str) -> String {
        let mut parts = Vec::new();

        if let Some((old, new)) = &self.theme {
            parts.push(format!("{}.theme: {} → {}", prefix, old, new));
        }
        if let Some((old, new)) = &self.language {
            parts.push(format!("{}.language: {:?} → {:?}", prefix, old, new));
        }

        parts.join(", ")
    }
}

struct CatalogSettingsDiff {
    initial_visible: Option<(usize, usize)>,
    page_size: Option<(usize, usize)>,
    breakpoint_px: Option<(u32, u32)>,
    scroll_throttle_ms: Option<(u64, u64)>,
}

impl CatalogSettingsDiff {
    fn diff(old: &CatalogSettings, new: &CatalogSettings) -> Option<Self> {
        let initial_visible = (old.initial_visible != new.initial_visible)
            .then_some((old.initial_visible, new.initial_visible));
        let page_size = (old.page_size != new.page_size).then_some((old.page_size, new.page_size));
        let breakpoint_px = (old.breakpoint_px != new.breakpoint_px)
            .then_some((old.breakpoint_px, new.breakpoint_px));
        let scroll_throttle_ms = (old.scroll_throttle_ms != new.scroll_throttle_ms)
            .then_some((old.scroll_throttle_ms, new.scroll_throttle_ms));

        if initial_visible.is_none()
            && page_size.is_none()
            && breakpoint_px.is_none()
            && scroll_throttle_ms.is_none()
        {
            None
        } else {
            Some(Self {
                initial_visible,
                page_size,
                breakpoint_px,
                scroll_throttle_ms,
            })
        }
    }

    fn to_log_string(&self, prefix: &str) -> String {
        let mut parts = Vec::new();

        if let Some((old, new)) = &self.initial_visible {
            parts.push(format!("{}.initial_visible: {} → {}", prefix, old, new));
        }
        if let Some((old, new)) = &self.page_size {
            parts.push(format!("{}.page_size: {} → {}", prefix, old, new));
        }
        if let Some((old, new)) = &self.breakpoint_px {
            parts.push(format!("{}.breakpoint_px: {} → {}", prefix, old, new));
        }
        if let Some((old, new)) = &self.scroll_throttle_ms {
            parts.push(format!("{}.scroll_throttle_ms: {} → {}", prefix, old, new));
        }

        parts.join(", ")
    }
}
