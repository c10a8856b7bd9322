//! Hand-written port doubles shared by the use case tests.

use std::sync::atomic::{AtomicI64, AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use mockall::mock;
use pf_core::catalog::{Certificate, Project};
use pf_core::i18n::Language;
use pf_core::pages::{CertificatesPageCopy, ProjectsPageCopy, SitePage, SitePageContent};
use pf_core::ports::{ClockPort, ContentSourcePort, SettingsPort, ViewportPort};
use pf_core::settings::model::Settings;

pub(crate) struct InMemorySettings {
    pub(crate) stored: Mutex<Settings>,
    fail: bool,
    load_count: AtomicUsize,
    save_count: AtomicUsize,
}

impl InMemorySettings {
    pub(crate) fn new(initial: Settings) -> Self {
        Self {
            stored: Mutex::new(initial),
            fail: false,
            load_count: AtomicUsize::new(0),
            save_count: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Settings::default())
        }
    }

    pub(crate) fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    pub(crate) fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    pub(crate) fn snapshot(&self) -> Settings {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettingsPort for InMemorySettings {
    async fn load(&self) -> anyhow::Result<Settings> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("settings unavailable");
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        self.save_count.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = settings.clone();
        Ok(())
    }
}

mock! {
    pub Content {}

    #[async_trait]
    impl ContentSourcePort for Content {
        async fn load_projects(&self) -> anyhow::Result<Vec<Project>>;
        async fn load_certificates(&self) -> anyhow::Result<Vec<Certificate>>;
        async fn load_projects_page(&self, lang: Language) -> anyhow::Result<ProjectsPageCopy>;
        async fn load_certificates_page(&self, lang: Language)
            -> anyhow::Result<CertificatesPageCopy>;
        async fn load_site_page(&self, page: SitePage, lang: Language)
            -> anyhow::Result<Option<SitePageContent>>;
    }
}

/// Viewport whose width can be changed mid-test.
pub(crate) struct FixedViewport {
    width: AtomicU32,
    height: f64,
}

impl FixedViewport {
    pub(crate) fn new(width: u32, height: f64) -> Self {
        Self {
            width: AtomicU32::new(width),
            height,
        }
    }

    pub(crate) fn resize(&self, width: u32) {
        self.width.store(width, Ordering::SeqCst);
    }
}

impl ViewportPort for FixedViewport {
    fn width_px(&self) -> u32 {
        self.width.load(Ordering::SeqCst)
    }

    fn height_px(&self) -> f64 {
        self.height
    }
}

pub(crate) struct ManualClock(pub(crate) AtomicI64);

impl ManualClock {
    pub(crate) fn at(ms: i64) -> Self {
        Self(AtomicI64::new(ms))
    }

    pub(crate) fn advance(&self, ms: i64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub(crate) fn project(id: &str, title: &str, statuses: &[&str], tags: &[&str]) -> Project {
    Project {
        id: id.into(),
        slug: id.rsplit('/').next().unwrap_or(id).to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        long_description: String::new(),
        status: statuses.iter().map(|s| s.parse().unwrap()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: String::new(),
        images: Vec::new(),
        video: None,
        color_class: pf_core::catalog::DEFAULT_COLOR_CLASS.to_string(),
        github: None,
        demo: None,
        pub_date: None,
    }
}

pub(crate) fn certificate(id: &str, title: &str, issuer: &str, skills: &[&str]) -> Certificate {
    Certificate {
        id: id.into(),
        slug: id.rsplit('/').next().unwrap_or(id).to_string(),
        title: title.to_string(),
        issuer: issuer.to_string(),
        description: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        media: None,
        credential: None,
        issue_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        expiration_date: None,
    }
}
