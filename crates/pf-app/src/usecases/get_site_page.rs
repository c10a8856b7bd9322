use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use pf_core::i18n::Language;
use pf_core::pages::{SitePage, SitePageContent};
use pf_core::ports::ContentSourcePort;
use tracing::{info_span, Instrument};

/// Loads one standalone site page for a language.
///
/// ## Behavior / 行为
/// - Language folder first, then the shared document (decided by the port)
/// - A page with no document at all is an error, unlike listing copy which
///   has built-in text
pub struct GetSitePage {
    content: Arc<dyn ContentSourcePort>,
}

impl GetSitePage {
    pub fn new(content: Arc<dyn ContentSourcePort>) -> Self {
        Self { content }
    }

    pub async fn execute(&self, page: SitePage, lang: Language) -> Result<SitePageContent> {
        let span = info_span!("usecase.get_site_page.execute", page = %page, lang = %lang);

        async {
            self.content
                .load_site_page(page, lang)
                .await
                .with_context(|| format!("failed to load {page} page"))?
                .ok_or_else(|| anyhow!("no {page} page content for language {lang}"))
        }
        .instrument(span)
        .await
    }
}
