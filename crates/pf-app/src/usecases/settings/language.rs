use std::sync::Arc;

use anyhow::Result;
use pf_core::{i18n::Language, ports::SettingsPort};
use tracing::{debug, info, info_span, Instrument};

/// Persists the user's language choice.
pub struct SetLanguage<S>
where
    S: SettingsPort + ?Sized,
{
    settings: Arc<S>,
}

impl<S> SetLanguage<S>
where
    S: SettingsPort + ?Sized,
{
    pub fn new(settings: Arc<S>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, language: Language) -> Result<()> {
        let span = info_span!("usecase.set_language.execute", language = %language);

        async {
            let mut settings = self.settings.load().await?;
            if settings.general.language == Some(language) {
                return Ok(());
            }

            settings.general.language = Some(language);
            self.settings.save(&settings).await?;

            info!("Language saved");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Picks the language for one request.
///
/// ## Behavior / 行为
/// - An explicit request wins
/// - Then the saved user choice
/// - Then the configured default (ignored when it is not a known code)
/// - Then English
pub struct ResolveLanguage<S>
where
    S: SettingsPort + ?Sized,
{
    settings: Arc<S>,
    configured: String,
}

impl<S> ResolveLanguage<S>
where
    S: SettingsPort + ?Sized,
{
    pub fn new(settings: Arc<S>, configured: impl Into<String>) -> Self {
        Self {
            settings,
            configured: configured.into(),
        }
    }

    pub async fn execute(&self, requested: Option<Language>) -> Result<Language> {
        if let Some(language) = requested {
            return Ok(language);
        }

        let settings = self.settings.load().await?;
        if let Some(language) = settings.general.language {
            return Ok(language);
        }

        match self.configured.parse::<Language>() {
            Ok(language) => Ok(language),
            Err(err) => {
                if !self.configured.is_empty() {
                    debug!(error = %err, "Ignoring configured language");
                }
                Ok(Language::default())
            }
        }
    }
}
