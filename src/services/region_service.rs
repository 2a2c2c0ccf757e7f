use crate::error::Result;
use crate::models::region::Region;
use sqlx::PgPool;

#[derive(Clone)]
pub struct RegionService {
    pool: PgPool,
}

impl RegionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Region>> {
        let regions = sqlx::query_as::<_, Region>(
            r#"
            SELECT id, api_id, name, parent_id, created_at, updated_at
            FROM regions
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(regions)
    }
}
