use std::sync::Arc;

use anyhow::{Context, Result};
use pf_core::catalog::{CatalogItem, Certificate, Project};
use pf_core::i18n::Language;
use pf_core::ports::ContentSourcePort;
use tracing::{info, info_span, Instrument};

/// Keeps entries meant for `lang`.
///
/// An entry nested under another language's directory (`"id/proyek"` when
/// `lang` is English) is dropped. Flat ids and folders that are not a
/// language code are shared by every language.
pub fn localize<E: CatalogItem>(entries: Vec<E>, lang: Language) -> Vec<E> {
    entries
        .into_iter()
        .filter(|entry| match entry.id().locale_prefix() {
            Some(prefix) => match prefix.parse::<Language>() {
                Ok(entry_lang) => entry_lang == lang,
                Err(_) => true,
            },
            None => true,
        })
        .collect()
}

/// Loads one catalog's entries for a language.
///
/// ## Behavior / 行为
/// - Reads the whole collection through the content port
/// - Applies [`localize`]; source order is kept
pub struct LoadCatalog {
    content: Arc<dyn ContentSourcePort>,
}

impl LoadCatalog {
    pub fn new(content: Arc<dyn ContentSourcePort>) -> Self {
        Self { content }
    }

    pub async fn projects(&self, lang: Language) -> Result<Vec<Project>> {
        let span = info_span!("usecase.load_catalog.execute", kind = "projects", lang = %lang);

        async {
            let all = self
                .content
                .load_projects()
                .await
                .context("failed to load projects collection")?;
            let total = all.len();
            let entries = localize(all, lang);

            info!(total, kept = entries.len(), "Projects loaded");
            Ok(entries)
        }
        .instrument(span)
        .await
    }

    pub async fn certificates(&self, lang: Language) -> Result<Vec<Certificate>> {
        let span =
            info_span!("usecase.load_catalog.execute", kind = "certificates", lang = %lang);

        async {
            let all = self
                .content
                .load_certificates()
                .await
                .context("failed to load certificates collection")?;
            let total = all.len();
            let entries = localize(all, lang);

            info!(total, kept = entries.len(), "Certificates loaded");
            Ok(entries)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{certificate, project, MockContent};

    fn ids<E: CatalogItem>(entries: &[E]) -> Vec<String> {
        entries.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn localize_keeps_matching_and_shared_entries() {
        let entries = vec![
            project("en/weather", "Weather", &["Production"], &["React"]),
            project("id/cuaca", "Cuaca", &["Production"], &["React"]),
            project("chat", "Chat", &["Beta"], &["Vue"]),
            project("archive/old", "Old", &["Archived"], &["PHP"]),
        ];

        let kept = localize(entries, Language::En);

        assert_eq!(ids(&kept), vec!["en/weather", "chat", "archive/old"]);
    }

    #[tokio::test]
    async fn projects_are_localized_in_source_order() {
        let mut content = MockContent::new();
        content.expect_load_projects().times(1).returning(|| {
            Ok(vec![
                project("id/a", "A", &["Alpha"], &["Go"]),
                project("id/b", "B", &["Beta"], &["Go"]),
                project("en/c", "C", &["Beta"], &["Go"]),
            ])
        });

        let entries = LoadCatalog::new(Arc::new(content))
            .projects(Language::Id)
            .await
            .unwrap();

        assert_eq!(ids(&entries), vec!["id/a", "id/b"]);
    }

    #[tokio::test]
    async fn load_failure_carries_context() {
        let mut content = MockContent::new();
        content
            .expect_load_certificates()
            .returning(|| Err(anyhow::anyhow!("disk on fire")));

        let err = LoadCatalog::new(Arc::new(content))
            .certificates(Language::En)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to load certificates collection");
        assert!(format!("{err:#}").contains("disk on fire"));
    }

    #[tokio::test]
    async fn certificates_pass_through_without_locale_folders() {
        let mut content = MockContent::new();
        content.expect_load_certificates().returning(|| {
            Ok(vec![
                certificate("aws", "Cloud", "AWS", &["Cloud"]),
                certificate("meta", "Frontend", "Meta", &["React"]),
            ])
        });

        let entries = LoadCatalog::new(Arc::new(content))
            .certificates(Language::Id)
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
    }
}
