use std::sync::Arc;

use anyhow::Result;
use pf_core::catalog::{CatalogKind, Certificate, Project};
use pf_core::i18n::Language;
use pf_core::ports::{ClockPort, ContentSourcePort, SettingsPort, ViewportPort};
use tracing::{info, info_span, Instrument};

use super::load_catalog::LoadCatalog;
use super::session::CatalogSession;
use crate::deps::AppDeps;

/// Opens a listing page: loads settings and content, builds the session.
///
/// ## Behavior / 行为
/// - Engine tunables come from the saved `catalog` settings
/// - Entries are localized for `lang`
/// - The session starts with default filters and the initial window
pub struct OpenCatalog {
    content: Arc<dyn ContentSourcePort>,
    settings: Arc<dyn SettingsPort>,
    viewport: Arc<dyn ViewportPort>,
    clock: Arc<dyn ClockPort>,
}

impl OpenCatalog {
    pub fn new(deps: &AppDeps) -> Self {
        Self {
            content: deps.content.clone(),
            settings: deps.settings.clone(),
            viewport: deps.viewport.clone(),
            clock: deps.clock.clone(),
        }
    }

    pub async fn projects(&self, lang: Language) -> Result<CatalogSession<Project>> {
        let span = info_span!("usecase.open_catalog.execute", kind = "projects", lang = %lang);

        async {
            let settings = self.settings.load().await?;
            let entries = LoadCatalog::new(self.content.clone()).projects(lang).await?;
            let session = CatalogSession::new(
                CatalogKind::Projects,
                entries,
                &settings.catalog,
                self.viewport.clone(),
                self.clock.clone(),
            );

            info!(
                entries = session.engine().source().len(),
                mode = ?session.mode(),
                "Catalog opened"
            );
            Ok(session)
        }
        .instrument(span)
        .await
    }

    pub async fn certificates(&self, lang: Language) -> Result<CatalogSession<Certificate>> {
        let span =
            info_span!("usecase.open_catalog.execute", kind = "certificates", lang = %lang);

        async {
            let settings = self.settings.load().await?;
            let entries = LoadCatalog::new(self.content.clone())
                .certificates(lang)
                .await?;
            let session = CatalogSession::new(
                CatalogKind::Certificates,
                entries,
                &settings.catalog,
                self.viewport.clone(),
                self.clock.clone(),
            );

            info!(
                entries = session.engine().source().len(),
                mode = ?session.mode(),
                "Catalog opened"
            );
            Ok(session)
        }
        .instrument(span)
        .await
    }
}
