//! # pf-core
//!
//! Core domain models and catalog logic for the portfolio site.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the catalog filter/pagination/focus engine shared by the Projects and
//! Certificates listings, user preferences, UI string tables and the port
//! traits implemented by the outer layers.

pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod ids;
pub mod nav;
pub mod pages;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use catalog::{
    CatalogEngine, CatalogItem, CatalogKind, Certificate, EngineOptions, FacetSet, FilterState,
    Paginator, Project, ProjectStatus, SearchField, SearchProfile, ViewportMode,
};
pub use config::AppConfig;
pub use i18n::{Language, UiKey};
pub use ids::EntryId;
pub use nav::{nav_items, NavIcon, NavItem};
pub use settings::{Settings, Theme};
