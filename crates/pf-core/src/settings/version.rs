#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsVersion {
    V1,
    V2,
}

impl SettingsVersion {
    pub const CURRENT: SettingsVersion = SettingsVersion::V2;

    pub fn as_u32(self) -> u32 {
        match self {
            SettingsVersion::V1 => 1,
            SettingsVersion::V2 => 2,
        }
    }
}
