use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use kmc_core::KmcCore;
use kmc_core::config::core_config::AppConfig;
use kmc_core::data_layer::pending_verification::InMemoryPendingVerificationRepository;
use tokio::time::MissedTickBehavior;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{misc, verification};
use crate::middleware::get_http_request_context;

const DEFAULT_PURGE_INTERVAL_SECONDS: u64 = 60;

pub(crate) struct InternalAppState {
    pub core: KmcCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener to non-blocking");

    let core = KmcCore::new(
        config.core,
        Arc::new(InMemoryPendingVerificationRepository::default()),
    )
    .expect("Failed to validate core config");

    let purge_interval = config
        .app
        .purge_interval
        .filter(|seconds| *seconds > 0)
        .unwrap_or(DEFAULT_PURGE_INTERVAL_SECONDS);
    spawn_purge_task(core.to_owned(), Duration::from_secs(purge_interval));

    let state: AppState = Arc::new(InternalAppState {
        core,
        config: Arc::new(config.app),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router(state).into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState) -> Router {
    let verification_endpoints = Router::new()
        .route(
            "/api/kmc/v1/request",
            post(verification::controller::request_verification),
        )
        .route(
            "/api/kmc/v1/callback",
            post(verification::controller::validate_callback),
        )
        .route(
            "/api/kmc/v1/result",
            post(verification::controller::decrypt_result),
        );

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    Router::new()
        .merge(verification_endpoints)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "kmc-server",
                        RequestId = context.request_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn spawn_purge_task(core: KmcCore, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if let Err(error) = core.verification_service.purge_expired().await {
                tracing::warn!(%error, "Failed to purge expired verifications");
            }
        }
    });
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
