use axum::{
    routing::{get, post},
    Router,
};
use jobboard_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    if let Some(interval) = config.sync_interval_secs {
        let state = app_state.clone();
        tokio::spawn(async move {
            let config = get_config();
            loop {
                // Regions first: vacancies reference them.
                match state.sync_service.sync_regions().await {
                    Ok(top_level) => info!(top_level = top_level.len(), "Background region sync done"),
                    Err(e) => error!(error = ?e, "Background region sync failed"),
                }
                match state
                    .sync_service
                    .sync_vacancies(
                        &config.sync_query_text,
                        config.sync_area.as_deref(),
                        0,
                        config.sync_page_size,
                    )
                    .await
                {
                    Ok(processed) => info!(processed, "Background vacancy sync done"),
                    Err(e) => error!(error = ?e, "Background vacancy sync failed"),
                }
                tokio::time::sleep(Duration::from_secs(interval)).await;
            }
        });
    }

    let api = Router::new()
        .route(
            "/api/vacancies",
            get(routes::vacancy::list_vacancies).post(routes::vacancy::create_vacancy),
        )
        .route(
            "/api/vacancies/:id",
            get(routes::vacancy::get_vacancy)
                .patch(routes::vacancy::update_vacancy)
                .delete(routes::vacancy::delete_vacancy),
        )
        .route(
            "/api/vacancies/external/:api_id",
            get(routes::vacancy::get_vacancy_by_api_id),
        )
        .route("/api/regions", get(routes::region::list_regions))
        .route("/api/sync/regions", post(routes::sync::sync_regions))
        .route("/api/sync/vacancies", post(routes::sync::sync_vacancies))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.api_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .merge(api)
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
