//! Site page commands
//! 站点页面命令

use serde_json::{json, Value};
use tracing::{info_span, Instrument};

use pf_core::pages::SitePage;

use super::catalog::resolve_language;
use super::map_err;
use crate::bootstrap::AppRuntime;

/// One standalone page (`home`, `uses`, `terms` or `privacy`).
///
/// ## Returns / 返回值
/// - `{ "language": <code>, "page": <name>, ...document fields }`
pub async fn get_page(
    runtime: &AppRuntime,
    name: &str,
    lang: Option<&str>,
) -> Result<Value, String> {
    let span = info_span!("command.pages.get", page = name);
    async {
        let page = name.parse::<SitePage>().map_err(|e| e.to_string())?;
        let language = resolve_language(runtime, lang).await?;

        let content = runtime
            .usecases()
            .get_site_page()
            .execute(page, language)
            .await
            .map_err(map_err)?;

        let mut value = serde_json::to_value(&content)
            .map_err(|e| format!("Failed to serialize page: {}", e))?;
        if let Some(object) = value.as_object_mut() {
            object.insert("language".to_string(), json!(language));
        }
        Ok(value)
    }
    .instrument(span)
    .await
}

/// Names accepted by [`get_page`], with their content folders.
pub fn list_pages() -> Value {
    Value::Array(
        SitePage::ALL
            .iter()
            .map(|page| json!({ "name": page.as_str(), "collection": page.collection() }))
            .collect(),
    )
}
