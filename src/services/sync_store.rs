use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::Result;
use crate::models::region::Region;
use crate::models::vacancy::Vacancy;
use crate::services::hh_service::{VacancyDetail, VacancySummary};

/// Flattened summary+detail snapshot of one upstream listing, shaped like a
/// local row. Built once per listing, then used for both insert and diff.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingVacancy {
    pub api_id: String,
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
}

impl IncomingVacancy {
    pub fn from_parts(
        api_id: String,
        title: String,
        summary: &VacancySummary,
        detail: &VacancyDetail,
        region_id: Option<Uuid>,
    ) -> Self {
        let key_skills = {
            let names: Vec<&str> = detail
                .key_skills
                .iter()
                .filter_map(|skill| skill.name.as_deref())
                .collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(", "))
            }
        };

        Self {
            api_id,
            title,
            company_name: summary.employer.as_ref().and_then(|e| e.name.clone()),
            description: detail.description.clone(),
            region_id,
            salary_from: summary.salary.as_ref().and_then(|s| s.from),
            salary_to: summary.salary.as_ref().and_then(|s| s.to),
            currency: summary.salary.as_ref().and_then(|s| s.currency.clone()),
            address: summary.address.as_ref().and_then(|a| a.raw.clone()),
            experience: summary.experience.as_ref().and_then(|e| e.name.clone()),
            schedule: summary.schedule.as_ref().and_then(|s| s.name.clone()),
            key_skills,
            employment_type: summary.employment.as_ref().and_then(|e| e.name.clone()),
            url: detail.alternate_url.clone(),
        }
    }
}

/// One column to rewrite on an existing vacancy row. The synchronizer emits
/// a list of these; an empty list means the row is already up to date.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Title(String),
    CompanyName(Option<String>),
    Description(Option<String>),
    RegionId(Option<Uuid>),
    SalaryFrom(Option<Decimal>),
    SalaryTo(Option<Decimal>),
    Currency(Option<String>),
    Address(Option<String>),
    Experience(Option<String>),
    Schedule(Option<String>),
    KeySkills(Option<String>),
    EmploymentType(Option<String>),
    Url(Option<String>),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyncStore: Send + Sync {
    async fn find_region_by_api_id(&self, api_id: &str) -> Result<Option<Region>>;

    async fn insert_region(
        &self,
        api_id: &str,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Region>;

    async fn update_region(&self, id: Uuid, name: &str, parent_id: Option<Uuid>)
        -> Result<Region>;

    async fn find_vacancy_by_api_id(&self, api_id: &str) -> Result<Option<Vacancy>>;

    async fn insert_vacancy(&self, incoming: &IncomingVacancy) -> Result<Vacancy>;

    async fn update_vacancy(&self, id: Uuid, changes: &[FieldChange]) -> Result<()>;
}

#[derive(Clone)]
pub struct PgSyncStore {
    pool: PgPool,
}

impl PgSyncStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SyncStore for PgSyncStore {
    async fn find_region_by_api_id(&self, api_id: &str) -> Result<Option<Region>> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            SELECT id, api_id, name, parent_id, created_at, updated_at
            FROM regions
            WHERE api_id = $1
            "#,
        )
        .bind(api_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(region)
    }

    async fn insert_region(
        &self,
        api_id: &str,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO regions (api_id, name, parent_id)
            VALUES ($1, $2, $3)
            RETURNING id, api_id, name, parent_id, created_at, updated_at
            "#,
        )
        .bind(api_id)
        .bind(name)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(region)
    }

    async fn update_region(
        &self,
        id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            UPDATE regions
            SET name = $2, parent_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, api_id, name, parent_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(region)
    }

    async fn find_vacancy_by_api_id(&self, api_id: &str) -> Result<Option<Vacancy>> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, api_id, title, company_name, description, region_id,
                   salary_from, salary_to, currency, address, experience, schedule,
                   key_skills, employment_type, url, sync_state, deleted_at,
                   created_at, updated_at
            FROM vacancies
            WHERE api_id = $1
            "#,
        )
        .bind(api_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vacancy)
    }

    async fn insert_vacancy(&self, incoming: &IncomingVacancy) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            INSERT INTO vacancies (
                api_id, title, company_name, description, region_id,
                salary_from, salary_to, currency, address, experience,
                schedule, key_skills, employment_type, url
            ) VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9, $10,
                $11, $12, $13, $14
            )
            RETURNING id, api_id, title, company_name, description, region_id,
                      salary_from, salary_to, currency, address, experience, schedule,
                      key_skills, employment_type, url, sync_state, deleted_at,
                      created_at, updated_at
            "#,
        )
        .bind(&incoming.api_id)
        .bind(&incoming.title)
        .bind(&incoming.company_name)
        .bind(&incoming.description)
        .bind(incoming.region_id)
        .bind(incoming.salary_from)
        .bind(incoming.salary_to)
        .bind(&incoming.currency)
        .bind(&incoming.address)
        .bind(&incoming.experience)
        .bind(&incoming.schedule)
        .bind(&incoming.key_skills)
        .bind(&incoming.employment_type)
        .bind(&incoming.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }

    async fn update_vacancy(&self, id: Uuid, changes: &[FieldChange]) -> Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE vacancies SET updated_at = NOW()");
        for change in changes {
            match change {
                FieldChange::Title(value) => {
                    builder.push(", title = ").push_bind(value.clone());
                }
                FieldChange::CompanyName(value) => {
                    builder.push(", company_name = ").push_bind(value.clone());
                }
                FieldChange::Description(value) => {
                    builder.push(", description = ").push_bind(value.clone());
                }
                FieldChange::RegionId(value) => {
                    builder.push(", region_id = ").push_bind(*value);
                }
                FieldChange::SalaryFrom(value) => {
                    builder.push(", salary_from = ").push_bind(*value);
                }
                FieldChange::SalaryTo(value) => {
                    builder.push(", salary_to = ").push_bind(*value);
                }
                FieldChange::Currency(value) => {
                    builder.push(", currency = ").push_bind(value.clone());
                }
                FieldChange::Address(value) => {
                    builder.push(", address = ").push_bind(value.clone());
                }
                FieldChange::Experience(value) => {
                    builder.push(", experience = ").push_bind(value.clone());
                }
                FieldChange::Schedule(value) => {
                    builder.push(", schedule = ").push_bind(value.clone());
                }
                FieldChange::KeySkills(value) => {
                    builder.push(", key_skills = ").push_bind(value.clone());
                }
                FieldChange::EmploymentType(value) => {
                    builder.push(", employment_type = ").push_bind(value.clone());
                }
                FieldChange::Url(value) => {
                    builder.push(", url = ").push_bind(value.clone());
                }
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        builder.build().execute(&self.pool).await?;
        Ok(())
    }
}
