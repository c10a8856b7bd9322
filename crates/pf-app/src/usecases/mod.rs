//! Business logic use cases
//!
//! Catalog use cases hand out a [`catalog::CatalogSession`]: a long-lived
//! object the shell feeds UI events into. Settings use cases are one-shot.

pub mod catalog;
pub mod get_settings;
pub mod get_site_page;
pub mod settings;
pub mod update_settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{
    localize, CatalogSession, CatalogView, GetPageCopy, LoadCatalog, OpenCatalog,
};
pub use get_settings::GetSettings;
pub use get_site_page::GetSitePage;
pub use settings::{ApplyThemeSetting, ResolveLanguage, SetLanguage, ThemeChange};
pub use update_settings::UpdateSettings;
