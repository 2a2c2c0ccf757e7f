pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::PgPool;
use url::Url;

use crate::services::{
    hh_service::HhService, region_service::RegionService, sync_service::SyncService,
    sync_store::PgSyncStore, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub vacancy_service: VacancyService,
    pub region_service: RegionService,
    pub sync_service: SyncService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("jobboard-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap();
        let base_url =
            Url::parse(&config.job_board_base_url).expect("JOB_BOARD_BASE_URL must be a valid URL");

        let hh_service = HhService::with_base_url(http_client, base_url);
        let vacancy_service = VacancyService::new(pool.clone());
        let region_service = RegionService::new(pool.clone());
        let sync_service = SyncService::new(
            Arc::new(hh_service),
            Arc::new(PgSyncStore::new(pool.clone())),
            Duration::from_millis(config.sync_throttle_ms),
        );

        Self {
            pool,
            vacancy_service,
            region_service,
            sync_service,
        }
    }
}
