use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySubmissionLog};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chainlink::config::AppConfig;
use chainlink::directory::Directory;
use chainlink::error::AppError;
use chainlink::forms::FormService;
use chainlink::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let submissions = Arc::new(InMemorySubmissionLog::default());
    let form_service = Arc::new(
        FormService::new(submissions, config.submissions).with_sessions(config.sessions),
    );
    let _reaper = form_service.spawn_reaper();
    let directory = Arc::new(Directory::seeded());

    let app = with_site_routes(form_service, directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "chainlink site service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
