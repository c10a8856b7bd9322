mod load_catalog;
mod open_catalog;
mod page_copy;
mod session;
mod view;

pub use load_catalog::{localize, LoadCatalog};
pub use open_catalog::OpenCatalog;
pub use page_copy::GetPageCopy;
pub use session::CatalogSession;
pub use view::CatalogView;
