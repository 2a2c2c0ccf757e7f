use crate::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload, VacancyListQuery};
use crate::error::{Error, Result};
use crate::models::vacancy::Vacancy;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

pub struct VacancyList {
    pub items: Vec<Vacancy>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateVacancyPayload) -> Result<Vacancy> {
        self.ensure_region_exists(payload.region_id).await?;

        let duplicate = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM vacancies WHERE api_id = $1)",
        )
        .bind(&payload.api_id)
        .fetch_one(&self.pool)
        .await?;
        if duplicate {
            return Err(Error::Conflict(format!(
                "Vacancy with external id {} already exists",
                payload.api_id
            )));
        }

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
        .bind(&payload.api_id)
        .bind(&payload.title)
        .bind(&payload.company_name)
        .bind(&payload.description)
        .bind(payload.region_id)
        .bind(payload.salary_from)
        .bind(payload.salary_to)
        .bind(&payload.currency)
        .bind(&payload.address)
        .bind(&payload.experience)
        .bind(&payload.schedule)
        .bind(&payload.key_skills)
        .bind(&payload.employment_type)
        .bind(&payload.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }

    /// Partial patch. Marks the row as manually overridden so the next sync
    /// run leaves it alone.
    pub async fn update(&self, id: Uuid, payload: UpdateVacancyPayload) -> Result<Vacancy> {
        if let Some(region_id) = payload.region_id {
            self.ensure_region_exists(region_id).await?;
        }

        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            UPDATE vacancies
            SET
                title = COALESCE($2, title),
                company_name = COALESCE($3, company_name),
                description = COALESCE($4, description),
                region_id = COALESCE($5, region_id),
                salary_from = COALESCE($6, salary_from),
                salary_to = COALESCE($7, salary_to),
                currency = COALESCE($8, currency),
                address = COALESCE($9, address),
                experience = COALESCE($10, experience),
                schedule = COALESCE($11, schedule),
                key_skills = COALESCE($12, key_skills),
                employment_type = COALESCE($13, employment_type),
                url = COALESCE($14, url),
                sync_state = 'manually_overridden',
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, api_id, title, company_name, description, region_id,
                      salary_from, salary_to, currency, address, experience, schedule,
                      key_skills, employment_type, url, sync_state, deleted_at,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.company_name)
        .bind(&payload.description)
        .bind(payload.region_id)
        .bind(payload.salary_from)
        .bind(payload.salary_to)
        .bind(&payload.currency)
        .bind(&payload.address)
        .bind(&payload.experience)
        .bind(&payload.schedule)
        .bind(&payload.key_skills)
        .bind(&payload.employment_type)
        .bind(&payload.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, api_id, title, company_name, description, region_id,
                   salary_from, salary_to, currency, address, experience, schedule,
                   key_skills, employment_type, url, sync_state, deleted_at,
                   created_at, updated_at
            FROM vacancies
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }

    pub async fn get_by_api_id(&self, api_id: &str) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, api_id, title, company_name, description, region_id,
                   salary_from, salary_to, currency, address, experience, schedule,
                   key_skills, employment_type, url, sync_state, deleted_at,
                   created_at, updated_at
            FROM vacancies
            WHERE api_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(api_id)
        .fetch_optional(&self.pool)
        .await?;

        vacancy.ok_or_else(|| {
            Error::NotFound(format!("Vacancy with external id {} not found", api_id))
        })
    }

    /// Soft delete: the row stays, listings stop returning it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE vacancies SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Vacancy {} not found", id)));
        }
        Ok(())
    }

    pub async fn list(&self, query: VacancyListQuery) -> Result<VacancyList> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;

        let mut items_builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT id, api_id, title, company_name, description, region_id,
                   salary_from, salary_to, currency, address, experience, schedule,
                   key_skills, employment_type, url, sync_state, deleted_at,
                   created_at, updated_at
            FROM vacancies
            WHERE deleted_at IS NULL
            "#,
        );
        let mut total_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM vacancies WHERE deleted_at IS NULL");

        for builder in [&mut items_builder, &mut total_builder] {
            if let Some(region_id) = query.region_id {
                builder.push(" AND region_id = ").push_bind(region_id);
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{}%", search);
                builder
                    .push(" AND (title ILIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR company_name ILIKE ")
                    .push_bind(pattern)
                    .push(")");
            }
        }

        items_builder
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(per_page)
            .push(" OFFSET ")
            .push_bind(offset);

        let items = items_builder
            .build_query_as::<Vacancy>()
            .fetch_all(&self.pool)
            .await?;
        let total = total_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let total_pages = ((total as f64) / (per_page as f64)).ceil() as i64;

        Ok(VacancyList {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    async fn ensure_region_exists(&self, region_id: Uuid) -> Result<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM regions WHERE id = $1)")
                .bind(region_id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(Error::BadRequest(format!(
                "Region {} does not exist",
                region_id
            )));
        }
        Ok(())
    }
}
