use serde::{Deserialize, Serialize};

/// Terms of service and privacy policy share one layout: a list of
/// badged sections whose bodies are stored as HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalPage {
    pub title: String,
    pub order: i64,
    pub description: String,
    pub sections: Vec<LegalSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalSection {
    pub title: String,
    /// Short label shown above the section, e.g. `01`.
    pub badge: String,
    /// HTML body.
    pub content: String,
}

impl LegalPage {
    pub fn section(&self, badge: &str) -> Option<&LegalSection> {
        self.sections.iter().find(|s| s.badge == badge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_looked_up_by_badge() {
        let page: LegalPage = serde_json::from_str(
            r#"{
                "title": "Privacy Policy",
                "order": 2,
                "description": "How data is handled.",
                "sections": [
                    {"title": "Collection", "badge": "01", "content": "<p>None.</p>"},
                    {"title": "Cookies", "badge": "02", "content": "<p>Theme only.</p>"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.section("02").map(|s| s.title.as_str()), Some("Cookies"));
        assert!(page.section("03").is_none());
    }

    #[test]
    fn sections_are_required() {
        let result: Result<LegalPage, _> =
            serde_json::from_str(r#"{"title":"Terms","order":1,"description":"x"}"#);

        assert!(result.is_err());
    }
}
