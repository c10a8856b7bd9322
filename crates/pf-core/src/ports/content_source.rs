use async_trait::async_trait;

use crate::catalog::{Certificate, Project};
use crate::i18n::Language;
use crate::pages::{CertificatesPageCopy, ProjectsPageCopy, SitePage, SitePageContent};

/// Read-only access to the authored content collections.
///
/// Entries come back validated and in a stable order; the port never
/// filters, so localisation and catalog logic stay with the caller.
#[async_trait]
pub trait ContentSourcePort: Send + Sync {
    async fn load_projects(&self) -> anyhow::Result<Vec<Project>>;
    async fn load_certificates(&self) -> anyhow::Result<Vec<Certificate>>;

    /// Built-in copy when the collection has nothing for `lang`.
    async fn load_projects_page(&self, lang: Language) -> anyhow::Result<ProjectsPageCopy>;
    async fn load_certificates_page(&self, lang: Language)
        -> anyhow::Result<CertificatesPageCopy>;

    /// `None` when the page has no document for `lang` or in the shared folder.
    async fn load_site_page(
        &self,
        page: SitePage,
        lang: Language,
    ) -> anyhow::Result<Option<SitePageContent>>;
}
