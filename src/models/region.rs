use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Geographic region mirrored from the upstream area tree. `api_id` is the
/// upstream key; `parent_id` points at the local row of the parent node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub api_id: Option<String>,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
