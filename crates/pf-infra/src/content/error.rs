use std::path::PathBuf;

use thiserror::Error;

/// Why a content file could not become a catalog entry.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: no frontmatter block", .path.display())]
    MissingFrontmatter { path: PathBuf },

    #[error("{}: invalid frontmatter", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{}: {message}", .path.display())]
    Schema { path: PathBuf, message: String },
}

impl ContentError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            ContentError::Io { path, .. }
            | ContentError::MissingFrontmatter { path }
            | ContentError::Yaml { path, .. }
            | ContentError::Schema { path, .. } => path,
        }
    }
}
