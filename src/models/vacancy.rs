use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Who owns a vacancy row. `Synced` rows follow the upstream API and may be
/// rewritten by the synchronizer; `ManuallyOverridden` rows were edited
/// through the CRUD endpoints and the synchronizer must not touch them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum SyncState {
    Synced,
    ManuallyOverridden,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: Uuid,
    pub api_id: Option<String>,
    pub title: String,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub region_id: Option<Uuid>,
    pub salary_from: Option<Decimal>,
    pub salary_to: Option<Decimal>,
    pub currency: Option<String>,
    pub address: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub key_skills: Option<String>,
    pub employment_type: Option<String>,
    pub url: Option<String>,
    pub sync_state: SyncState,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
