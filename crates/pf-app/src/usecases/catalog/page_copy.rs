use std::sync::Arc;

use anyhow::Result;
use pf_core::i18n::Language;
use pf_core::pages::{CertificatesPageCopy, ProjectsPageCopy};
use pf_core::ports::ContentSourcePort;
use tracing::{info_span, warn, Instrument};

/// Labels of a listing page. A broken copy file never takes the listing
/// down: it is logged and the built-in text is used.
pub struct GetPageCopy {
    content: Arc<dyn ContentSourcePort>,
}

impl GetPageCopy {
    pub fn new(content: Arc<dyn ContentSourcePort>) -> Self {
        Self { content }
    }

    pub async fn projects(&self, lang: Language) -> Result<ProjectsPageCopy> {
        let span = info_span!("usecase.get_page_copy.execute", page = "projects", lang = %lang);

        async {
            match self.content.load_projects_page(lang).await {
                Ok(copy) => Ok(copy),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "Falling back to built-in page copy");
                    Ok(ProjectsPageCopy::default())
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn certificates(&self, lang: Language) -> Result<CertificatesPageCopy> {
        let span =
            info_span!("usecase.get_page_copy.execute", page = "certificates", lang = %lang);

        async {
            match self.content.load_certificates_page(lang).await {
                Ok(copy) => Ok(copy),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "Falling back to built-in page copy");
                    Ok(CertificatesPageCopy::default())
                }
            }
        }
        .instrument(span)
        .await
    }
}
