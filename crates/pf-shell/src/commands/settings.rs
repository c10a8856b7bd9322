//! Settings-related commands
//! 设置相关的命令

use serde_json::{json, Value};
use tracing::{info_span, Instrument};

use pf_app::usecases::ThemeChange;
use pf_core::i18n::Language;
use pf_core::settings::model::{Settings, Theme};

use super::map_err;
use crate::bootstrap::AppRuntime;

/// Get application settings
/// 获取应用设置
///
/// ## Returns / 返回值
/// - JSON representation of current Settings
pub async fn get_settings(runtime: &AppRuntime) -> Result<Value, String> {
    let span = info_span!("command.settings.get");
    async {
        let uc = runtime.usecases().get_settings();
        let settings = uc.execute().await.map_err(map_err)?;

        serde_json::to_value(&settings)
            .map_err(|e| format!("Failed to serialize settings: {}", e))
    }
    .instrument(span)
    .await
}

/// Update application settings
/// 更新应用设置
///
/// ## Parameters / 参数
/// - `settings`: JSON value containing the complete settings document
pub async fn update_settings(runtime: &AppRuntime, settings: Value) -> Result<(), String> {
    let span = info_span!("command.settings.update");
    async {
        let settings: Settings = serde_json::from_value(settings)
            .map_err(|e| format!("Failed to parse settings: {}", e))?;

        let uc = runtime.usecases().update_settings();
        uc.execute(settings).await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Set or toggle the theme.
///
/// ## Parameters / 参数
/// - `change`: `light`, `dark`, `system` or `toggle`
///
/// ## Returns / 返回值
/// - `{ "theme": <saved>, "effective": <light|dark> }`
pub async fn set_theme(runtime: &AppRuntime, change: &str) -> Result<Value, String> {
    let span = info_span!("command.settings.theme", change);
    async {
        let change = parse_theme_change(change)?;
        let theme = runtime
            .usecases()
            .apply_theme()
            .execute(change)
            .await
            .map_err(map_err)?;

        Ok(json!({
            "theme": theme,
            "effective": theme.effective(Theme::SYSTEM_FALLBACK),
        }))
    }
    .instrument(span)
    .await
}

/// Persist the UI language.
pub async fn set_language(runtime: &AppRuntime, code: &str) -> Result<Value, String> {
    let span = info_span!("command.settings.language", code);
    async {
        let language = code.parse::<Language>().map_err(|e| e.to_string())?;
        runtime
            .usecases()
            .set_language()
            .execute(language)
            .await
            .map_err(map_err)?;

        Ok(json!({
            "language": language,
            "display_name": language.display_name(),
        }))
    }
    .instrument(span)
    .await
}

fn parse_theme_change(value: &str) -> Result<ThemeChange, String> {
    if value.eq_ignore_ascii_case("toggle") {
        return Ok(ThemeChange::Toggle);
    }
    value.parse::<Theme>().map(ThemeChange::Set)
}
