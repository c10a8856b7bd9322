use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use pf_core::catalog::{Certificate, Project};
use pf_core::i18n::Language;
use pf_core::ids::EntryId;
use pf_core::pages::{
    CertificatesPageCopy, IndexPage, LegalPage, ProjectsPageCopy, SitePage, SitePageContent,
    UsesPage,
};
use pf_core::ports::ContentSourcePort;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, info};

use super::collection::{scan_collection, CollectionFile};
use super::error::ContentError;
use super::frontmatter::split_frontmatter;
use super::schema::{RawCertificate, RawProject};

const PROJECTS: &str = "projects";
const CERTIFICATES: &str = "certificates";
const PROJECTS_PAGE: &str = "projects-page";
const CERTIFICATES_PAGE: &str = "certificates-page";
const PAGE_FILES: [&str; 2] = ["index.mdx", "index.md"];

/// Content collections read from a directory tree.
///
/// Nothing is cached: every call rescans and reparses, so edits show up on
/// the next load. A single invalid file fails its whole collection.
pub struct FileContentSource {
    root: PathBuf,
}

impl FileContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn load_collection<R, T>(
        &self,
        name: &'static str,
        validate: fn(R, EntryId) -> Result<T, String>,
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned,
    {
        let dir = self.root.join(name);
        let files = tokio::task::spawn_blocking(move || scan_collection(&dir))
            .await
            .context("collection scan task failed")??;

        let mut entries = Vec::with_capacity(files.len());
        for file in &files {
            entries.push(read_entry(file, validate).await?);
        }

        info!(collection = name, count = entries.len(), "Collection loaded");
        Ok(entries)
    }

    /// `<collection>/<lang>/index.mdx`, then `<collection>/index.mdx`
    /// (`.md` accepted too). `None` when neither exists.
    async fn find_page(
        &self,
        collection: &str,
        lang: Language,
    ) -> Result<Option<(PathBuf, String)>, ContentError> {
        let dir = self.root.join(collection);
        let candidates = [dir.join(lang.code()), dir]
            .into_iter()
            .flat_map(|base| PAGE_FILES.map(|file| base.join(file)));

        for candidate in candidates {
            match fs::read_to_string(&candidate).await {
                Ok(source) => return Ok(Some((candidate, source))),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ContentError::io(candidate, e)),
            }
        }
        Ok(None)
    }

    /// Listing copy, or the built-in copy when the collection has none.
    async fn load_page<T>(&self, collection: &str, lang: Language) -> Result<T, ContentError>
    where
        T: DeserializeOwned + Default,
    {
        match self.find_page(collection, lang).await? {
            Some((path, source)) => parse_page(&path, &source),
            None => {
                debug!(collection, lang = %lang, "No page copy on disk, using built-in text");
                Ok(T::default())
            }
        }
    }

    /// A site page document; every required field must be present.
    async fn load_document<T>(
        &self,
        page: SitePage,
        lang: Language,
    ) -> Result<Option<T>, ContentError>
    where
        T: DeserializeOwned,
    {
        let Some((path, source)) = self.find_page(page.collection(), lang).await? else {
            debug!(page = %page, lang = %lang, "No site page on disk");
            return Ok(None);
        };
        let frontmatter =
            split_frontmatter(&source).ok_or_else(|| ContentError::MissingFrontmatter {
                path: path.clone(),
            })?;
        let document = serde_yaml::from_str(frontmatter.yaml)
            .map_err(|source| ContentError::Yaml { path, source })?;
        Ok(Some(document))
    }
}

async fn read_entry<R, T>(
    file: &CollectionFile,
    validate: fn(R, EntryId) -> Result<T, String>,
) -> Result<T, ContentError>
where
    R: DeserializeOwned,
{
    let source = fs::read_to_string(&file.path)
        .await
        .map_err(|e| ContentError::io(&file.path, e))?;
    let frontmatter =
        split_frontmatter(&source).ok_or_else(|| ContentError::MissingFrontmatter {
            path: file.path.clone(),
        })?;
    let raw: R = serde_yaml::from_str(frontmatter.yaml).map_err(|source| ContentError::Yaml {
        path: file.path.clone(),
        source,
    })?;

    validate(raw, file.id.clone()).map_err(|message| ContentError::schema(&file.path, message))
}

fn parse_page<T>(path: &Path, source: &str) -> Result<T, ContentError>
where
    T: DeserializeOwned + Default,
{
    let frontmatter = split_frontmatter(source).ok_or_else(|| ContentError::MissingFrontmatter {
        path: path.to_path_buf(),
    })?;
    if frontmatter.yaml.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(frontmatter.yaml).map_err(|source| ContentError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl ContentSourcePort for FileContentSource {
    async fn load_projects(&self) -> Result<Vec<Project>> {
        self.load_collection(PROJECTS, RawProject::validate).await
    }

    async fn load_certificates(&self) -> Result<Vec<Certificate>> {
        self.load_collection(CERTIFICATES, RawCertificate::validate)
            .await
    }

    async fn load_projects_page(&self, lang: Language) -> Result<ProjectsPageCopy> {
        Ok(self.load_page(PROJECTS_PAGE, lang).await?)
    }

    async fn load_certificates_page(&self, lang: Language) -> Result<CertificatesPageCopy> {
        Ok(self.load_page(CERTIFICATES_PAGE, lang).await?)
    }

    async fn load_site_page(
        &self,
        page: SitePage,
        lang: Language,
    ) -> Result<Option<SitePageContent>> {
        let content = match page {
            SitePage::Home => self
                .load_document::<IndexPage>(page, lang)
                .await?
                .map(SitePageContent::Home),
            SitePage::Uses => self
                .load_document::<UsesPage>(page, lang)
                .await?
                .map(SitePageContent::Uses),
            SitePage::Terms => self
                .load_document::<LegalPage>(page, lang)
                .await?
                .map(SitePageContent::Terms),
            SitePage::Privacy => self
                .load_document::<LegalPage>(page, lang)
                .await?
                .map(SitePageContent::Privacy),
        };
        if let Some(content) = &content {
            info!(page = %page, lang = %lang, title = content.title(), "Site page loaded");
        }
        Ok(content)
    }
}
