//! Frontmatter shapes and their validation into domain entries.

use chrono::{DateTime, NaiveDate};
use pf_core::catalog::{Certificate, Project, ProjectStatus, DEFAULT_COLOR_CLASS};
use pf_core::ids::EntryId;
use serde::Deserialize;

/// Required fields are optional here so a missing one is reported by name
/// instead of as a YAML error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProject {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    long_description: Option<String>,
    #[serde(default)]
    status: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    image: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    video: Option<String>,
    color_class: Option<String>,
    github: Option<String>,
    demo: Option<String>,
    pub_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCertificate {
    title: Option<String>,
    slug: Option<String>,
    issuer: Option<String>,
    description: Option<String>,
    #[serde(default)]
    skills: Vec<String>,
    media: Option<String>,
    credential: Option<String>,
    issue_date: Option<String>,
    expiration_date: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    value.ok_or_else(|| format!("missing required field `{field}`"))
}

/// `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is kept).
pub(crate) fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("`{field}` is not a date: {raw:?}"))
}

impl RawProject {
    pub(crate) fn validate(self, id: EntryId) -> Result<Project, String> {
        if self.status.is_empty() {
            return Err("`status` must list at least one value".into());
        }
        if self.tags.is_empty() {
            return Err("`tags` must list at least one value".into());
        }
        let status = self
            .status
            .iter()
            .map(|s| s.parse::<ProjectStatus>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        let pub_date = self
            .pub_date
            .as_deref()
            .map(|d| parse_date(d, "pubDate"))
            .transpose()?;

        Ok(Project {
            id,
            title: required(self.title, "title")?,
            slug: required(self.slug, "slug")?,
            description: required(self.description, "description")?,
            long_description: required(self.long_description, "longDescription")?,
            status,
            tags: self.tags,
            image: required(self.image, "image")?,
            images: self.images,
            video: self.video,
            color_class: self
                .color_class
                .unwrap_or_else(|| DEFAULT_COLOR_CLASS.to_string()),
            github: self.github,
            demo: self.demo,
            pub_date,
        })
    }
}

impl RawCertificate {
    pub(crate) fn validate(self, id: EntryId) -> Result<Certificate, String> {
        let issue_date = parse_date(&required(self.issue_date, "issueDate")?, "issueDate")?;
        let expiration_date = self
            .expiration_date
            .as_deref()
            .map(|d| parse_date(d, "expirationDate"))
            .transpose()?;

        Ok(Certificate {
            id,
            title: required(self.title, "title")?,
            slug: required(self.slug, "slug")?,
            issuer: required(self.issuer, "issuer")?,
            description: self.description,
            skills: self.skills,
            media: self.media,
            credential: self.credential,
            issue_date,
            expiration_date,
        })
    }
}
