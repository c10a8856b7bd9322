use std::path::Path;

use pf_core::catalog::{CatalogItem, ProjectStatus};
use pf_core::i18n::Language;
use pf_core::pages::{CertificatesPageCopy, ProjectsPageCopy, SitePage, SitePageContent};
use pf_core::ports::ContentSourcePort;
use pf_infra::{ContentError, FileContentSource};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn project_file(title: &str, slug: &str, status: &str, tags: &str) -> String {
    format!(
        "---\ntitle: {title}\nslug: {slug}\ndescription: {title} in short\nlongDescription: {title} in long\nstatus: {status}\ntags: {tags}\nimage: /img/{slug}.png\n---\n\nBody text.\n"
    )
}

fn certificate_file(title: &str, issuer: &str, skills: &str) -> String {
    format!(
        "---\ntitle: {title}\nslug: {title}\nissuer: {issuer}\nskills: {skills}\nissueDate: 2024-01-15\n---\n"
    )
}

#[tokio::test]
async fn loads_projects_sorted_by_id_with_path_ids() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "projects/en/weather.mdx",
        &project_file("Weather Forecast", "weather", "[Production]", "[React, API]"),
    );
    write(
        dir.path(),
        "projects/en/chat.md",
        &project_file("Realtime Chat", "chat", "[Beta, Featured]", "[React]"),
    );
    write(
        dir.path(),
        "projects/id/cuaca.mdx",
        &project_file("Prakiraan Cuaca", "cuaca", "[Production]", "[React]"),
    );

    let projects = FileContentSource::new(dir.path())
        .load_projects()
        .await
        .unwrap();

    let ids: Vec<String> = projects.iter().map(|p| p.id().to_string()).collect();
    assert_eq!(ids, vec!["en/chat", "en/weather", "id/cuaca"]);
    assert_eq!(projects[0].status, vec![ProjectStatus::Beta, ProjectStatus::Featured]);
    assert_eq!(projects[0].categories(), vec!["Beta", "Featured"]);
}

#[tokio::test]
async fn loads_certificates() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "certificates/aws.md",
        &certificate_file("aws-ccp", "AWS", "[Cloud]"),
    );
    write(
        dir.path(),
        "certificates/google.md",
        &certificate_file("gda", "Google", "[SQL, Tableau]"),
    );

    let certificates = FileContentSource::new(dir.path())
        .load_certificates()
        .await
        .unwrap();

    assert_eq!(certificates.len(), 2);
    assert_eq!(certificates[1].issuer, "Google");
    assert_eq!(certificates[1].issued_label(), "Jan 2024");
}

#[tokio::test]
async fn missing_collection_is_empty() {
    let dir = TempDir::new().unwrap();

    let projects = FileContentSource::new(dir.path())
        .load_projects()
        .await
        .unwrap();

    assert!(projects.is_empty());
}

#[tokio::test]
async fn one_invalid_file_fails_the_collection_with_its_path() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "projects/good.md",
        &project_file("Good", "good", "[Production]", "[Rust]"),
    );
    write(
        dir.path(),
        "projects/bad.md",
        &project_file("Bad", "bad", "[Shipped]", "[Rust]"),
    );

    let err = FileContentSource::new(dir.path())
        .load_projects()
        .await
        .unwrap_err();

    let content_err = err.downcast_ref::<ContentError>().unwrap();
    assert!(matches!(content_err, ContentError::Schema { .. }));
    assert!(content_err.path().ends_with("bad.md"));
}

#[tokio::test]
async fn file_without_frontmatter_is_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "certificates/plain.md", "# Just markdown\n");

    let err = FileContentSource::new(dir.path())
        .load_certificates()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ContentError>(),
        Some(ContentError::MissingFrontmatter { .. })
    ));
}

#[tokio::test]
async fn malformed_yaml_is_reported() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "certificates/broken.md",
        "---\ntitle: [unclosed\n---\n",
    );

    let err = FileContentSource::new(dir.path())
        .load_certificates()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ContentError>(),
        Some(ContentError::Yaml { .. })
    ));
}

#[tokio::test]
async fn page_copy_prefers_language_folder_then_falls_back() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "projects-page/id/index.mdx",
        "---\ntitle: Proyek\norder: 1\npageTitle: Semua Proyek\nloadMoreText: Muat Lagi\n---\n",
    );
    write(
        dir.path(),
        "projects-page/index.mdx",
        "---\npageTitle: Every Project\n---\n",
    );
    let source = FileContentSource::new(dir.path());

    let id = source.load_projects_page(Language::Id).await.unwrap();
    assert_eq!(id.page_title, "Semua Proyek");
    assert_eq!(id.load_more_text, "Muat Lagi");
    assert_eq!(id.status_label, "Status");

    let en = source.load_projects_page(Language::En).await.unwrap();
    assert_eq!(en.page_title, "Every Project");
}

#[tokio::test]
async fn absent_page_copy_uses_built_in_text() {
    let dir = TempDir::new().unwrap();
    let source = FileContentSource::new(dir.path());

    assert_eq!(
        source.load_projects_page(Language::En).await.unwrap(),
        ProjectsPageCopy::default()
    );
    assert_eq!(
        source.load_certificates_page(Language::Id).await.unwrap(),
        CertificatesPageCopy::default()
    );
}

const HOME_PAGE: &str = r#"---
title: Home
order: 0
headline: Building useful software
heroSubtitle: "I specialize in:"
viewMyWorkText: View My Work
getInTouchText: Get In Touch
roles:
  - label: Backend Engineer
    description: APIs and data pipelines
  - label: ML Engineer
    description: Models in production
identityGridTitle: Identity & Expertise
techStackTitle: The Tech Stack
techStackDescription: Technologies I use to build scalable products.
locationTitle: Location
locationDescription: Indonesia, Bengkulu.
connectTitle: Connect
connectDescription: Let's build something together.
educationTitle: Education
educationDescription: My academic journey.
interestsTitle: Interests
interestsDescription: What drives my curiosity.
education:
  - id: 1
    school: Universitas Bengkulu
    degree: Informatics
    year: "2019 - 2023"
    logo: /logos/unib.png
    details: Thesis on recommender systems.
techStack:
  - id: 1
    name: Rust
    designation: Systems
    image: /stack/rust.svg
location:
  label: Based in
  country: Indonesia
  city: Bengkulu
  mapEmbedUrl: https://maps.example.com/embed
experienceTitle: Experience
experienceDescription: Where I have worked.
timeline:
  - title: "2024"
    content:
      - title: Backend Engineer
        company: Acme
        date: Jan 2024 - Present
        desc: Payments platform.
  - title: "2023"
    description: Graduated.
servicesTitle: Services
servicesDescription: What I can help with.
services:
  - title: API Development
    description: Fast, typed backends.
    icon: IconServer
---

Landing page body.
"#;

fn uses_group(kind: &str, title: &str) -> String {
    match kind {
        "hardware" => format!(
            "    title: {title}\n    icon: IconDevice\n    items:\n      - name: {title} One\n        specs: 16GB\n        description: Daily driver\n"
        ),
        _ => format!(
            "    title: {title}\n    icon: IconCode\n    items:\n      - title: {title} Tool\n        description: Used daily\n        link: https://example.com\n        icon: IconCode\n"
        ),
    }
}

fn uses_page() -> String {
    let mut doc = String::from("---\ntitle: Uses\norder: 3\ndescription: Gear and software.\nhardware:\n");
    for group in ["laptop", "computer", "office"] {
        doc.push_str(&format!("  {group}:\n{}", uses_group("hardware", group)));
    }
    doc.push_str("software:\n");
    for group in ["development", "ai", "design", "productivity", "communication"] {
        doc.push_str(&format!("  {group}:\n{}", uses_group("software", group)));
    }
    doc.push_str("---\n");
    doc
}

fn legal_page(title: &str, badge: &str) -> String {
    format!(
        "---\ntitle: {title}\norder: 9\ndescription: {title} of this site.\nsections:\n  - title: Overview\n    badge: \"{badge}\"\n    content: \"<p>Plain words.</p>\"\n---\n"
    )
}

#[tokio::test]
async fn home_page_loads_from_language_folder() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index-page/en/index.mdx", HOME_PAGE);

    let page = FileContentSource::new(dir.path())
        .load_site_page(SitePage::Home, Language::En)
        .await
        .unwrap();

    let Some(SitePageContent::Home(home)) = page else {
        panic!("expected the home page");
    };
    assert_eq!(home.role_labels(), vec!["Backend Engineer", "ML Engineer"]);
    assert_eq!(home.education[0].year, "2019 - 2023");
    assert_eq!(
        home.location.as_ref().map(|l| l.city.as_str()),
        Some("Bengkulu")
    );
    assert!(home.connect.is_empty());
    assert_eq!(home.positions().count(), 1);
    assert_eq!(home.timeline[1].description.as_deref(), Some("Graduated."));
}

#[tokio::test]
async fn site_pages_fall_back_to_shared_document() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "uses-page/index.mdx", &uses_page());
    write(dir.path(), "terms-page/index.mdx", &legal_page("Terms of Service", "01"));
    write(
        dir.path(),
        "privacy-page/id/index.mdx",
        &legal_page("Kebijakan Privasi", "A"),
    );
    let source = FileContentSource::new(dir.path());

    let Some(SitePageContent::Uses(uses)) = source
        .load_site_page(SitePage::Uses, Language::Id)
        .await
        .unwrap()
    else {
        panic!("expected the uses page");
    };
    assert_eq!(uses.item_count(), 8);
    assert_eq!(uses.software.ai.items[0].title, "ai Tool");

    let Some(SitePageContent::Terms(terms)) = source
        .load_site_page(SitePage::Terms, Language::En)
        .await
        .unwrap()
    else {
        panic!("expected the terms page");
    };
    assert_eq!(terms.section("01").map(|s| s.content.as_str()), Some("<p>Plain words.</p>"));

    let privacy = source
        .load_site_page(SitePage::Privacy, Language::Id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(privacy.page(), SitePage::Privacy);
    assert_eq!(privacy.title(), "Kebijakan Privasi");
}

#[tokio::test]
async fn absent_site_page_is_none() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "privacy-page/id/index.mdx",
        &legal_page("Kebijakan Privasi", "A"),
    );
    let source = FileContentSource::new(dir.path());

    assert!(source
        .load_site_page(SitePage::Privacy, Language::En)
        .await
        .unwrap()
        .is_none());
    assert!(source
        .load_site_page(SitePage::Uses, Language::En)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn site_page_missing_required_field_is_rejected_with_path() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "terms-page/index.mdx",
        "---\ntitle: Terms\norder: 1\ndescription: No sections here.\n---\n",
    );

    let err = FileContentSource::new(dir.path())
        .load_site_page(SitePage::Terms, Language::En)
        .await
        .unwrap_err();

    let content_err = err.downcast_ref::<ContentError>().unwrap();
    assert!(matches!(content_err, ContentError::Yaml { .. }));
    assert!(content_err.path().ends_with("terms-page/index.mdx"));
}
