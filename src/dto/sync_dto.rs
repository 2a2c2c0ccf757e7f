use serde::{Deserialize, Serialize};

use crate::dto::region_dto::RegionResponse;

/// Overrides for a manually triggered vacancy sync; anything unset falls
/// back to the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyncVacanciesPayload {
    pub text: Option<String>,
    pub area: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncVacanciesResponse {
    pub processed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRegionsResponse {
    pub top_level: Vec<RegionResponse>,
}
