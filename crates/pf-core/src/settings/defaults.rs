use super::model::*;
use crate::catalog::{DEFAULT_BREAKPOINT_PX, INITIAL_VISIBLE, PAGE_SIZE};

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            language: None,
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            initial_visible: INITIAL_VISIBLE,
            page_size: PAGE_SIZE,
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            scroll_throttle_ms: 0,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            catalog: CatalogSettings::default(),
        }
    }
}
