use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::CatalogItem;
use crate::ids::EntryId;

pub const DEFAULT_COLOR_CLASS: &str = "bg-gradient-to-br from-blue-900/90 to-purple-900/90";

/// Lifecycle label of a project. A project carries one or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectStatus {
    Production,
    Beta,
    Alpha,
    Archived,
    Featured,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Production,
        ProjectStatus::Beta,
        ProjectStatus::Alpha,
        ProjectStatus::Archived,
        ProjectStatus::Featured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Production => "Production",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Alpha => "Alpha",
            ProjectStatus::Archived => "Archived",
            ProjectStatus::Featured => "Featured",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project status: {0:?}")]
pub struct UnknownProjectStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownProjectStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownProjectStatus(s.to_string()))
    }
}

/// A portfolio project as loaded from the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    /// Non-empty.
    pub status: Vec<ProjectStatus>,
    /// Non-empty, author order.
    pub tags: Vec<String>,
    /// Thumbnail.
    pub image: String,
    /// Gallery images.
    #[serde(default)]
    pub images: Vec<String>,
    pub video: Option<String>,
    pub color_class: String,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub pub_date: Option<NaiveDate>,
}

impl Project {
    /// Thumbnail first, then the gallery, without repeats.
    pub fn all_images(&self) -> Vec<&str> {
        let mut out = vec![self.image.as_str()];
        for image in &self.images {
            if !out.contains(&image.as_str()) {
                out.push(image);
            }
        }
        out
    }

    pub fn is_featured(&self) -> bool {
        self.status.contains(&ProjectStatus::Featured)
    }
}

impl CatalogItem for Project {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn categories(&self) -> Vec<&str> {
        self.status.iter().map(ProjectStatus::as_str).collect()
    }

    fn facets(&self) -> &[String] {
        &self.tags
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}
