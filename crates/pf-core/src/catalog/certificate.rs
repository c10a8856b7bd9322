use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::CatalogItem;
use crate::ids::EntryId;

/// A credential as loaded from the `certificates` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    pub issuer: String,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Photo or scan of the certificate.
    pub media: Option<String>,
    /// Verification URL.
    pub credential: Option<String>,
    pub issue_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
}

impl Certificate {
    /// `true` once `on` is past the expiration date. Certificates without one never expire.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|expires| expires < on)
    }

    pub fn issued_label(&self) -> String {
        format_month_year(self.issue_date)
    }

    pub fn expires_label(&self) -> Option<String> {
        self.expiration_date.map(format_month_year)
    }

    /// Card links to the credential when present, otherwise nowhere.
    pub fn link(&self) -> &str {
        self.credential.as_deref().unwrap_or("#")
    }
}

/// Short month + year, e.g. `Jan 2024`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

impl CatalogItem for Certificate {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn categories(&self) -> Vec<&str> {
        vec![self.issuer.as_str()]
    }

    fn facets(&self) -> &[String] {
        &self.skills
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(expiration: Option<NaiveDate>) -> Certificate {
        Certificate {
            id: EntryId::from("aws-saa"),
            slug: "aws-saa".into(),
            title: "Solutions Architect".into(),
            issuer: "AWS".into(),
            description: None,
            skills: vec!["Cloud".into()],
            media: None,
            credential: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            expiration_date: expiration,
        }
    }

    #[test]
    fn labels_use_short_month_format() {
        let c = cert(NaiveDate::from_ymd_opt(2027, 3, 1));
        assert_eq!(c.issued_label(), "Jan 2024");
        assert_eq!(c.expires_label().as_deref(), Some("Mar 2027"));
    }

    #[test]
    fn expiry_is_strictly_after_expiration_date() {
        let expires = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let c = cert(Some(expires));
        assert!(!c.is_expired(expires));
        assert!(c.is_expired(expires.succ_opt().unwrap()));
        assert!(!cert(None).is_expired(NaiveDate::MAX));
    }

    #[test]
    fn issuer_is_the_only_category() {
        let c = cert(None);
        assert_eq!(c.categories(), vec!["AWS"]);
        assert_eq!(c.link(), "#");
    }
}
