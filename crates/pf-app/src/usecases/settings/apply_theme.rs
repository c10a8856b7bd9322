use std::sync::Arc;

use anyhow::Result;
use pf_core::{ports::SettingsPort, settings::model::Theme};
use tracing::{info, info_span, Instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    Set(Theme),
    /// The header toggle button: flip whatever is currently shown.
    Toggle,
}

pub struct ApplyThemeSetting<S>
where
    S: SettingsPort + ?Sized,
{
    settings: Arc<S>,
}

impl<S> ApplyThemeSetting<S>
where
    S: SettingsPort + ?Sized,
{
    pub fn new(settings: Arc<S>) -> Self {
        Self { settings }
    }

    /// Returns the theme in effect afterwards. Nothing is written when it
    /// is unchanged.
    pub async fn execute(&self, change: ThemeChange) -> Result<Theme> {
        let span = info_span!("usecase.apply_theme.execute", change = ?change);

        async {
            let mut settings = self.settings.load().await?;
            let theme = match change {
                ThemeChange::Set(theme) => theme,
                ThemeChange::Toggle => settings.general.theme.toggled(Theme::SYSTEM_FALLBACK),
            };

            if settings.general.theme == theme {
                return Ok(theme);
            }

            let previous = settings.general.theme;
            settings.general.theme = theme;
            self.settings.save(&settings).await?;

            info!(from = %previous, to = %theme, "Theme applied");
            Ok(theme)
        }
        .instrument(span)
        .await
    }
}
