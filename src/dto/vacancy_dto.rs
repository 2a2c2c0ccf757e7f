use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vacancy::{SyncState, Vacancy};
use crate::services::vacancy_service::VacancyList;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(length(min = 1))]
    pub api_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub region_id: Uuid,
    pub salary_from: Option<Decimal>,
    pub salary_to: Option<Decimal>,
    pub currency: Option<String>,
    pub address: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub key_skills: Option<String>,
    pub employment_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVacancyPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
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
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyResponse {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub items: Vec<VacancyResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub region_id: Option<Uuid>,
    pub search: Option<String>,
}

impl From<Vacancy> for VacancyResponse {
    fn from(value: Vacancy) -> Self {
        Self {
            id: value.id,
            api_id: value.api_id,
            title: value.title,
            company_name: value.company_name,
            description: value.description,
            region_id: value.region_id,
            salary_from: value.salary_from,
            salary_to: value.salary_to,
            currency: value.currency,
            address: value.address,
            experience: value.experience,
            schedule: value.schedule,
            key_skills: value.key_skills,
            employment_type: value.employment_type,
            url: value.url,
            sync_state: value.sync_state,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<VacancyList> for VacancyListResponse {
    fn from(value: VacancyList) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}
