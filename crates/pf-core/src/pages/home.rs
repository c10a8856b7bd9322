use serde::{Deserialize, Serialize};

/// The landing page: hero, identity grid, experience timeline and services.
///
/// Every heading and list is required; `location`, `connect` and
/// `interests` may be left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPage {
    pub title: String,
    pub order: i64,

    // Hero
    pub headline: String,
    pub hero_subtitle: String,
    pub view_my_work_text: String,
    pub get_in_touch_text: String,
    pub roles: Vec<Role>,

    // Identity grid
    pub identity_grid_title: String,
    pub tech_stack_title: String,
    pub tech_stack_description: String,
    pub location_title: String,
    pub location_description: String,
    pub connect_title: String,
    pub connect_description: String,
    pub education_title: String,
    pub education_description: String,
    pub interests_title: String,
    pub interests_description: String,
    pub education: Vec<Education>,
    pub tech_stack: Vec<TechStackItem>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub connect: Vec<ConnectLink>,
    #[serde(default)]
    pub interests: Vec<Interest>,

    // Experience timeline
    pub experience_title: String,
    pub experience_description: String,
    pub timeline: Vec<TimelineEntry>,

    // Services
    pub services_title: String,
    pub services_description: String,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub school: String,
    pub degree: String,
    pub year: String,
    pub logo: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStackItem {
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub label: String,
    pub country: String,
    pub city: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectLink {
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: i64,
    pub label: String,
    pub color: String,
    pub icon: String,
}

/// One period on the timeline, e.g. a year, with the positions held in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub date: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl IndexPage {
    /// Labels cycled through by the hero's typewriter line.
    pub fn role_labels(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.label.as_str()).collect()
    }

    /// Every position on the timeline, in authored order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.timeline.iter().flat_map(|entry| entry.content.iter())
    }
}
