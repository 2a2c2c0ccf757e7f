use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::region_dto::{RegionListResponse, RegionResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List of regions", body = Json<RegionListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_regions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let regions = state.region_service.list().await?;
    let items: Vec<RegionResponse> = regions.into_iter().map(Into::into).collect();
    Ok(Json(RegionListResponse { items }))
}
