use crate::cli::ServeArgs;
use crate::infra::{load_record_store, AppState};
use crate::routes::with_planning_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use civroda::config::AppConfig;
use civroda::error::AppError;
use civroda::planning::PlanningService;
use civroda::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(load_record_store(config.records.csv_path.as_deref())?);
    let records = store.len();
    let planning_service = Arc::new(PlanningService::new(store));

    let app = with_planning_routes(planning_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, records, "civroda service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
