use serde::{Deserialize, Serialize};

/// The "uses" page: hardware and software the author works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsesPage {
    pub title: String,
    pub order: i64,
    pub description: String,
    pub hardware: Hardware,
    pub software: Software,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardware {
    pub laptop: HardwareGroup,
    pub computer: HardwareGroup,
    pub office: HardwareGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    pub development: SoftwareGroup,
    pub ai: SoftwareGroup,
    pub design: SoftwareGroup,
    pub productivity: SoftwareGroup,
    pub communication: SoftwareGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareGroup {
    pub title: String,
    pub icon: String,
    pub items: Vec<HardwareItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub name: String,
    pub specs: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareGroup {
    pub title: String,
    pub icon: String,
    pub items: Vec<SoftwareItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub icon: String,
}

impl Hardware {
    /// Groups in page order.
    pub fn groups(&self) -> [&HardwareGroup; 3] {
        [&self.laptop, &self.computer, &self.office]
    }
}

impl Software {
    /// Groups in page order.
    pub fn groups(&self) -> [&SoftwareGroup; 5] {
        [
            &self.development,
            &self.ai,
            &self.design,
            &self.productivity,
            &self.communication,
        ]
    }
}

impl UsesPage {
    /// Number of listed tools across every hardware and software group.
    pub fn item_count(&self) -> usize {
        let hardware: usize = self.hardware.groups().iter().map(|g| g.items.len()).sum();
        let software: usize = self.software.groups().iter().map(|g| g.items.len()).sum();
        hardware + software
    }
}
