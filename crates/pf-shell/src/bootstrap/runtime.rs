//! # AppRuntime / 应用运行时
//!
//! Holds the wired dependencies and hands out use cases to the commands.
//!
//! ## Usage / 使用
//!
//! ```rust,no_run
//! # use pf_shell::bootstrap::AppRuntime;
//! # async fn example(runtime: &AppRuntime) -> Result<(), String> {
//! let settings = runtime
//!     .usecases()
//!     .get_settings()
//!     .execute()
//!     .await
//!     .map_err(|e| e.to_string())?;
//! # let _ = settings;
//! # Ok(())
//! # }
//! ```
//!
//! ## Adding a use case / 添加用例
//!
//! 1. Ensure the use case has a `new()` constructor taking its ports
//! 2. Add an accessor to [`UseCases`] that clones them out of `AppDeps`

use std::sync::Arc;

use pf_app::usecases::{
    ApplyThemeSetting, GetPageCopy, GetSettings, GetSitePage, LoadCatalog, OpenCatalog,
    ResolveLanguage, SetLanguage, UpdateSettings,
};
use pf_app::AppDeps;
use pf_core::config::AppConfig;
use pf_core::ports::SettingsPort;
use pf_platform::ObservedViewport;

use super::wiring::wire_dependencies;

/// Application runtime: wired dependencies plus the facts the commands
/// still need from bootstrap.
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    config: AppConfig,
    /// Same object as `deps.viewport`, kept concrete so resize events can
    /// be fed in.
    viewport: Arc<ObservedViewport>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: AppConfig, viewport: Arc<ObservedViewport>) -> Self {
        Self {
            deps,
            config,
            viewport,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ObservedViewport {
        &self.viewport
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor for [`AppRuntime`].
/// [`AppRuntime`] 的用例访问器。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn open_catalog(&self) -> OpenCatalog {
        OpenCatalog::new(&self.runtime.deps)
    }

    pub fn load_catalog(&self) -> LoadCatalog {
        LoadCatalog::new(self.runtime.deps.content.clone())
    }

    pub fn get_page_copy(&self) -> GetPageCopy {
        GetPageCopy::new(self.runtime.deps.content.clone())
    }

    pub fn get_site_page(&self) -> GetSitePage {
        GetSitePage::new(self.runtime.deps.content.clone())
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn apply_theme(&self) -> ApplyThemeSetting<dyn SettingsPort> {
        ApplyThemeSetting::new(self.runtime.deps.settings.clone())
    }

    pub fn set_language(&self) -> SetLanguage<dyn SettingsPort> {
        SetLanguage::new(self.runtime.deps.settings.clone())
    }

    /// Language for this request: explicit choice, saved choice, then
    /// the `[general] language` config value.
    pub fn resolve_language(&self) -> ResolveLanguage<dyn SettingsPort> {
        ResolveLanguage::new(
            self.runtime.deps.settings.clone(),
            self.runtime.config.language.clone(),
        )
    }
}

/// Load-config-to-runtime in one step.
///
/// ```text
/// load_config() → create_runtime() → commands::*
///     ↓                  ↓
///   AppConfig        AppRuntime
/// ```
pub fn create_runtime(config: AppConfig) -> anyhow::Result<AppRuntime> {
    let viewport = Arc::new(ObservedViewport::default());
    let deps = wire_dependencies(&config, viewport.clone())?;
    Ok(AppRuntime::new(deps, config, viewport))
}
