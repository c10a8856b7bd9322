//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (content files, settings file, clock)
//! - ✅ Create platform implementations (app dirs, viewport)
//! - ✅ Inject all dependencies into `AppDeps` / 将所有依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//!
//! > **This is the only place allowed to depend on pf-infra + pf-platform + pf-app simultaneously.**
//! > **这是唯一允许同时依赖 pf-infra、pf-platform 和 pf-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;

use pf_app::{AppDeps, AppPaths};
use pf_core::config::AppConfig;
use pf_core::ports::*;
use pf_infra::{FileContentSource, FileSettingsRepository, SystemClock};
use pf_platform::{DirsAppDirsAdapter, ObservedViewport};
use tracing::debug;

/// Content root used when the config leaves `[content] root` empty,
/// relative to the working directory.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directories unavailable: {0}")]
    AppDirs(#[from] AppDirsError),

    #[error("Settings repository initialization failed: {0}")]
    SettingsInit(String),
}

/// Settings file: the configured path, else `<app data>/settings.json`.
fn resolve_settings_path(config: &AppConfig, app_dirs: &dyn AppDirsPort) -> WiringResult<PathBuf> {
    if !config.settings_path.as_os_str().is_empty() {
        return Ok(config.settings_path.clone());
    }
    let dirs = app_dirs.get_app_dirs()?;
    Ok(AppPaths::from_app_dirs(&dirs).settings_path)
}

fn resolve_content_root(config: &AppConfig) -> PathBuf {
    if config.content_root.as_os_str().is_empty() {
        PathBuf::from(DEFAULT_CONTENT_ROOT)
    } else {
        config.content_root.clone()
    }
}

/// Wire all dependencies together.
/// 将所有依赖连接在一起。
///
/// The viewport is passed in so the caller keeps a handle for resize
/// events; the use cases only ever see it as a `ViewportPort`.
pub fn wire_dependencies(
    config: &AppConfig,
    viewport: Arc<ObservedViewport>,
) -> WiringResult<AppDeps> {
    wire_with_app_dirs(config, viewport, &DirsAppDirsAdapter::new())
}

fn wire_with_app_dirs(
    config: &AppConfig,
    viewport: Arc<ObservedViewport>,
    app_dirs: &dyn AppDirsPort,
) -> WiringResult<AppDeps> {
    let settings_path = resolve_settings_path(config, app_dirs)?;
    if settings_path.is_dir() {
        return Err(WiringError::SettingsInit(format!(
            "settings path is a directory: {}",
            settings_path.display()
        )));
    }
    let content_root = resolve_content_root(config);

    debug!(
        content_root = %content_root.display(),
        settings_path = %settings_path.display(),
        "Wiring dependencies"
    );

    let deps = AppDeps {
        // Content dependencies / 内容依赖
        content: Arc::new(FileContentSource::new(content_root)),

        // Settings dependencies / 设置依赖
        settings: Arc::new(FileSettingsRepository::new(settings_path)),

        // Platform dependencies / 平台依赖
        viewport,
        clock: Arc::new(SystemClock),
    };

    Ok(deps)
}
