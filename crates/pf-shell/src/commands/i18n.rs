//! UI strings and navigation
//! 界面文案与导航

use serde_json::{json, Value};
use tracing::{info_span, Instrument};

use pf_core::i18n::{translate as lookup, Language, UiKey};
use pf_core::nav::nav_items;

use super::catalog::resolve_language;
use super::dto::{NavItemDto, TranslationDto};
use crate::bootstrap::AppRuntime;

/// Look up one UI string, e.g. `nav.projects`.
pub async fn translate(
    runtime: &AppRuntime,
    key: &str,
    lang: Option<&str>,
) -> Result<Value, String> {
    let span = info_span!("command.i18n.translate", key);
    async {
        let ui_key = UiKey::from_key(key).ok_or_else(|| format!("unknown UI key: {key}"))?;
        let language = resolve_language(runtime, lang).await?;

        let dto = TranslationDto {
            key: ui_key.as_str().to_string(),
            language,
            text: lookup(language, ui_key).to_string(),
        };
        serde_json::to_value(&dto).map_err(|e| format!("Failed to serialize translation: {}", e))
    }
    .instrument(span)
    .await
}

/// Navigation menu in display order with localized labels.
pub async fn get_nav(runtime: &AppRuntime, lang: Option<&str>) -> Result<Value, String> {
    let span = info_span!("command.i18n.nav");
    async {
        let language = resolve_language(runtime, lang).await?;
        let items: Vec<NavItemDto> = nav_items()
            .iter()
            .map(|item| NavItemDto::from_item(item, language))
            .collect();

        Ok(json!({
            "language": language,
            "items": items,
        }))
    }
    .instrument(span)
    .await
}

/// Languages the site ships strings for.
pub fn list_languages() -> Value {
    Value::Array(
        Language::ALL
            .iter()
            .map(|lang| {
                json!({
                    "code": lang.code(),
                    "display_name": lang.display_name(),
                })
            })
            .collect(),
    )
}
