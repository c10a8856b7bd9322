//! Catalog domain: the filter / pagination / focus engine behind the
//! Projects and Certificates listings.
//!
//! Dependency order (leaves first):
//!
//! ```text
//! item source -> facets -> filter -> pagination -> focus
//!                      \___________ engine ___________/
//! ```

mod certificate;
mod engine;
mod facets;
mod filter;
mod focus;
mod item;
mod pagination;
mod project;

pub use certificate::{format_month_year, Certificate};
pub use engine::{CardState, CatalogEngine, EngineOptions};
pub use facets::{extract_facets, FacetSet};
pub use filter::{apply_filters, filter_indices, CategorySelection, FilterState, SearchProfile};
pub use focus::{
    nearest_to_center, CardRect, FocusState, ScrollOutcome, ScrollThrottle, ViewportMode,
    DEFAULT_BREAKPOINT_PX,
};
pub use item::{CatalogItem, CatalogKind, SearchField, ALL_CATEGORY};
pub use pagination::{Paginator, INITIAL_VISIBLE, PAGE_SIZE};
pub use project::{Project, ProjectStatus, UnknownProjectStatus, DEFAULT_COLOR_CLASS};

#[cfg(test)]
mod tests;
