//! Listing page commands
//! 列表页命令

use serde_json::Value;
use tracing::{debug, info_span, Instrument};

use pf_app::usecases::CatalogSession;
use pf_core::catalog::{extract_facets, CardRect, CatalogItem, CatalogKind};
use pf_core::i18n::Language;
use pf_core::pages::active_filters_label;
use pf_core::ports::{ClockPort, ViewportPort};

use super::dto::{CatalogQuery, CatalogResponse, CertificateCardDto, ScrollReport};
use super::map_err;
use crate::bootstrap::AppRuntime;

/// Projects listing for `query`.
///
/// ## Returns / 返回值
/// - JSON of [`CatalogResponse`]: visible entries, counts, facets, card states and page labels
pub async fn get_projects(runtime: &AppRuntime, query: CatalogQuery) -> Result<Value, String> {
    let span = info_span!("command.catalog.projects");
    async {
        let lang = resolve_language(runtime, query.lang.as_deref()).await?;
        apply_viewport(runtime, &query);

        let uc = runtime.usecases();
        let mut session = uc.open_catalog().projects(lang).await.map_err(map_err)?;
        let copy = uc.get_page_copy().projects(lang).await.map_err(map_err)?;

        let scroll = replay(&mut session, &query);
        let facet_button_label =
            copy.facet_button_label(session.engine().filter_state().selected_facets.len());
        let view = session.view();
        let response = CatalogResponse {
            language: lang,
            active_filters_label: label_for(view.active_filters_count),
            facet_button_label,
            view,
            copy,
            scroll,
        };

        serde_json::to_value(&response)
            .map_err(|e| format!("Failed to serialize catalog view: {}", e))
    }
    .instrument(span)
    .await
}

/// Certificates listing for `query`. Items are [`CertificateCardDto`]s,
/// with expiry judged against the runtime clock's UTC date.
pub async fn get_certificates(runtime: &AppRuntime, query: CatalogQuery) -> Result<Value, String> {
    let span = info_span!("command.catalog.certificates");
    async {
        let lang = resolve_language(runtime, query.lang.as_deref()).await?;
        apply_viewport(runtime, &query);

        let uc = runtime.usecases();
        let mut session = uc
            .open_catalog()
            .certificates(lang)
            .await
            .map_err(map_err)?;
        let copy = uc.get_page_copy().certificates(lang).await.map_err(map_err)?;

        let scroll = replay(&mut session, &query);
        let facet_button_label =
            copy.facet_button_label(session.engine().filter_state().selected_facets.len());
        let today = runtime.deps.clock.today_utc();
        let view = session
            .view()
            .map_items(|certificate| CertificateCardDto::from_certificate(certificate, today));
        let response = CatalogResponse {
            language: lang,
            active_filters_label: label_for(view.active_filters_count),
            facet_button_label,
            view,
            copy,
            scroll,
        };

        serde_json::to_value(&response)
            .map_err(|e| format!("Failed to serialize catalog view: {}", e))
    }
    .instrument(span)
    .await
}

/// Category and facet option lists of one listing, without a session.
pub async fn get_facets(
    runtime: &AppRuntime,
    kind: CatalogKind,
    lang: Option<&str>,
) -> Result<Value, String> {
    let span = info_span!("command.catalog.facets", kind = %kind);
    async {
        let lang = resolve_language(runtime, lang).await?;
        let loader = runtime.usecases().load_catalog();
        let facets = match kind {
            CatalogKind::Projects => extract_facets(&loader.projects(lang).await.map_err(map_err)?),
            CatalogKind::Certificates => {
                extract_facets(&loader.certificates(lang).await.map_err(map_err)?)
            }
        };

        serde_json::to_value(&facets).map_err(|e| format!("Failed to serialize facets: {}", e))
    }
    .instrument(span)
    .await
}

pub(crate) async fn resolve_language(
    runtime: &AppRuntime,
    requested: Option<&str>,
) -> Result<Language, String> {
    let requested = requested
        .map(|code| code.parse::<Language>())
        .transpose()
        .map_err(|e| e.to_string())?;
    runtime
        .usecases()
        .resolve_language()
        .execute(requested)
        .await
        .map_err(map_err)
}

fn apply_viewport(runtime: &AppRuntime, query: &CatalogQuery) {
    if query.viewport_width.is_none() && query.viewport_height.is_none() {
        return;
    }
    let viewport = runtime.viewport();
    viewport.resize(
        query.viewport_width.unwrap_or_else(|| viewport.width_px()),
        query.viewport_height.unwrap_or_else(|| viewport.height_px()),
    );
}

fn label_for(active_filters: usize) -> Option<String> {
    (active_filters > 0).then(|| active_filters_label(active_filters))
}

/// Feeds the query's events into the session in visitor order.
fn replay<E: CatalogItem>(
    session: &mut CatalogSession<E>,
    query: &CatalogQuery,
) -> Option<ScrollReport> {
    let engine = session.engine_mut();
    if let Some(search) = &query.search {
        engine.set_search_text(search);
    }
    if let Some(category) = &query.category {
        engine.select_category(category);
    }
    for facet in &query.facets {
        engine.toggle_facet(facet);
    }
    for _ in 0..query.load_more {
        if !engine.load_more() {
            break;
        }
    }
    if let Some(index) = query.hover {
        if !engine.hover_enter(index) {
            debug!(index, "hover outside the visible window ignored");
        }
    }

    if query.scroll_centers.is_empty() {
        return None;
    }
    let cards: Vec<Option<CardRect>> = query
        .scroll_centers
        .iter()
        .map(|&center| Some(CardRect::new(center, 0.0)))
        .collect();
    Some(session.scroll(&cards).into())
}
