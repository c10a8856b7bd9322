//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for use case construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern. No build steps, no
//! defaults, just parameter grouping.

use std::sync::Arc;
use pf_core::ports::*;

/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
#[derive(Clone)]
pub struct AppDeps {
    // Content dependencies / 内容依赖
    pub content: Arc<dyn ContentSourcePort>,

    // Settings dependencies / 设置依赖
    pub settings: Arc<dyn SettingsPort>,

    // Platform dependencies / 平台依赖
    pub viewport: Arc<dyn ViewportPort>,
    pub clock: Arc<dyn ClockPort>,
}
