use std::path::PathBuf;

use pf_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};
use tracing::debug;

const APP_DIR_NAME: &str = "portfolio";
const PROFILE_ENV: &str = "PF_PROFILE";

/// `portfolio`, or `portfolio-<profile>` so a dev profile keeps its own
/// settings and logs next to the default ones.
fn app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Per-user directories from the `dirs` crate.
#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_dir: Option<PathBuf>,
    profile: Option<String>,
}

impl DirsAppDirsAdapter {
    /// System directories, profile read from `PF_PROFILE`.
    pub fn new() -> Self {
        Self {
            base_dir: None,
            profile: std::env::var(PROFILE_ENV).ok(),
        }
    }

    /// Uses `base` for both data and cache roots instead of the system dirs.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir: Some(base),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let (data_base, cache_base) = match &self.base_dir {
            Some(base) => (base.clone(), base.clone()),
            None => (
                dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?,
                dirs::cache_dir().ok_or(AppDirsError::CacheDirUnavailable)?,
            ),
        };
        let name = app_dir_name(self.profile.as_deref());
        debug!(app_dir = %name, "Resolved application directory name");

        Ok(AppDirs {
            app_data_root: data_base.join(&name),
            app_cache_root: cache_base.join(name),
        })
    }
}
