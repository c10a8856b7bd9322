//! Listing page labels. Every field falls back to the built-in English
//! text when absent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectsPageCopy {
    pub page_title: String,
    pub page_description: String,
    pub search_placeholder: String,
    pub reset_filters_text: String,
    pub status_label: String,
    pub technologies_label: String,
    pub select_technologies_text: String,
    pub selected_count: String,
    pub no_projects_found_text: String,
    pub load_more_text: String,
}

impl Default for ProjectsPageCopy {
    fn default() -> Self {
        Self {
            page_title: "All Projects".into(),
            page_description:
                "Explore my collection of projects, experiments, and open-source contributions."
                    .into(),
            search_placeholder: "Search projects...".into(),
            reset_filters_text: "Reset Filters".into(),
            status_label: "Status".into(),
            technologies_label: "Technologies".into(),
            select_technologies_text: "Select technologies".into(),
            selected_count: "selected".into(),
            no_projects_found_text: "No projects found".into(),
            load_more_text: "Load More Projects".into(),
        }
    }
}

impl ProjectsPageCopy {
    /// Text of the technologies dropdown button.
    pub fn facet_button_label(&self, selected: usize) -> String {
        if selected == 0 {
            self.select_technologies_text.clone()
        } else {
            format!("{selected} {}", self.selected_count)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificatesPageCopy {
    pub page_title: String,
    pub page_description: String,
    pub search_placeholder: String,
    pub reset_filters_text: String,
    pub issuer_label: String,
    pub skills_filter_label: String,
    pub all_skills_text: String,
    pub selected_count: String,
    pub no_certificates_found_text: String,
    pub load_more_text: String,
    pub credential_link_text: String,
    pub media_link_text: String,
}

impl Default for CertificatesPageCopy {
    fn default() -> Self {
        Self {
            page_title: "Expertise Certified".into(),
            page_description:
                "Verifiable credentials in Machine Learning and Software Engineering.".into(),
            search_placeholder: "Search by title, issuer, or skill...".into(),
            reset_filters_text: "Reset Filters".into(),
            issuer_label: "Issuer".into(),
            skills_filter_label: "Skills Filter".into(),
            all_skills_text: "All Skills".into(),
            selected_count: "selected".into(),
            no_certificates_found_text: "No matching certificates found.".into(),
            load_more_text: "Load More".into(),
            credential_link_text: "Credential".into(),
            media_link_text: "Media".into(),
        }
    }
}

impl CertificatesPageCopy {
    pub fn facet_button_label(&self, selected: usize) -> String {
        if selected == 0 {
            self.all_skills_text.clone()
        } else {
            format!("{selected} {}", self.selected_count)
        }
    }
}

/// "1 Filter" / "3 Filters" badge next to the reset button.
pub fn active_filters_label(count: usize) -> String {
    if count == 1 {
        "1 Filter".to_string()
    } else {
        format!("{count} Filters")
    }
}
