use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    config::get_config,
    dto::sync_dto::{SyncRegionsResponse, SyncVacanciesPayload, SyncVacanciesResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/sync/regions",
    responses(
        (status = 200, description = "Region sync finished", body = Json<SyncRegionsResponse>),
        (status = 502, description = "Upstream API failure")
    )
)]
#[axum::debug_handler]
pub async fn sync_regions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let top_level = state.sync_service.sync_regions().await?;
    Ok(Json(SyncRegionsResponse {
        top_level: top_level.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/sync/vacancies",
    request_body = SyncVacanciesPayload,
    responses(
        (status = 200, description = "Vacancy sync finished", body = Json<SyncVacanciesResponse>)
    )
)]
#[axum::debug_handler]
pub async fn sync_vacancies(
    State(state): State<AppState>,
    payload: Option<Json<SyncVacanciesPayload>>,
) -> Result<impl IntoResponse> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let config = get_config();

    let text = payload
        .text
        .unwrap_or_else(|| config.sync_query_text.clone());
    let area = payload.area.or_else(|| config.sync_area.clone());
    let page = payload.page.unwrap_or(0);
    let per_page = payload.per_page.unwrap_or(config.sync_page_size).clamp(1, 100);

    let processed = state
        .sync_service
        .sync_vacancies(&text, area.as_deref(), page, per_page)
        .await?;
    Ok(Json(SyncVacanciesResponse { processed }))
}
