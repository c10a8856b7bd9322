//! Markdown/MDX content collections.
//!
//! ```text
//! <root>/
//!   projects/**/*.{md,mdx}          one project per file
//!   certificates/**/*.{md,mdx}      one certificate per file
//!   projects-page/[<lang>/]index.mdx
//!   certificates-page/[<lang>/]index.mdx
//!   index-page/[<lang>/]index.{mdx,md}   landing page
//!   uses-page/[<lang>/]index.mdx
//!   terms-page/[<lang>/]index.mdx
//!   privacy-page/[<lang>/]index.mdx
//! ```
//!
//! Each file starts with a YAML frontmatter block; the body is ignored.

mod collection;
mod error;
mod file_source;
mod frontmatter;
mod schema;

pub use collection::{scan_collection, CollectionFile};
pub use error::ContentError;
pub use file_source::FileContentSource;
pub use frontmatter::{split_frontmatter, Frontmatter};
