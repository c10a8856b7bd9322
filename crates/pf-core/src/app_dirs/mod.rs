use std::path::PathBuf;

/// Resolved per-user application directories. Facts only, nothing is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_cache_root: PathBuf,
}
