use crate::routes;
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

fn cors(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?,
        )
    };
    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600)))
}

/// Every route of the service, without the process wide metrics and sentry layers.
pub(crate) fn create_router(seaorm_pool: DatabaseConnection, origins: &[String]) -> anyhow::Result<Router> {
    let app = Router::new()
        .merge(routes::swagger::create_router())
        .merge(routes::global::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/questions", routes::api::v0::question::create_router())
                .nest("/assessments", routes::api::v0::assessment::create_router())
                .layer(cors(origins)?),
        )
        .layer(Extension(seaorm_pool))
        .with_state(());
    Ok(app)
}

pub(crate) fn create_app(seaorm_pool: DatabaseConnection, origins: &[String]) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("innodex")
        .with_default_metrics()
        .build_pair();

    if origins.is_empty() {
        tracing::info!("allowing requests from any origin");
    } else {
        tracing::info!(?origins, "allowing origins");
    }

    let app = create_router(seaorm_pool, origins)?
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(prometheus_layer),
        );
    Ok(app)
}

#[cfg(test)]
mod tests;
