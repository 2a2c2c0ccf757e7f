use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::region::Region;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResponse {
    pub id: Uuid,
    pub api_id: Option<String>,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionListResponse {
    pub items: Vec<RegionResponse>,
}

impl From<Region> for RegionResponse {
    fn from(value: Region) -> Self {
        Self {
            id: value.id,
            api_id: value.api_id,
            name: value.name,
            parent_id: value.parent_id,
        }
    }
}
