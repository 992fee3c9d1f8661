use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use stockr::catalog::StockRecord;
use stockr::scoring::compute_score;

const TOP_SCORES_LIMIT: usize = 5;

/// Payload row for `GET /stocks`: the record with its score injected.
#[derive(Debug, Serialize)]
pub(crate) struct ScoredStock {
    #[serde(flatten)]
    pub(crate) record: StockRecord,
    #[serde(rename = "stockScore")]
    pub(crate) stock_score: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct StocksResponse {
    pub(crate) data: Vec<ScoredStock>,
    #[serde(rename = "updatedAt")]
    pub(crate) updated_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeaderboardRow {
    pub(crate) ticker: String,
    pub(crate) name: String,
    pub(crate) score: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct SectorBest {
    pub(crate) ticker: String,
    pub(crate) score: u8,
}

/// Catalog-only leaderboard. Deliberately simpler than the session store's
/// aggregation: no swipe telemetry feeds this payload.
#[derive(Debug, Serialize)]
pub(crate) struct LeaderboardResponse {
    #[serde(rename = "topScores")]
    pub(crate) top_scores: Vec<LeaderboardRow>,
    pub(crate) sectors: BTreeMap<String, SectorBest>,
    #[serde(rename = "generatedAt")]
    pub(crate) generated_at: String,
}

pub(crate) fn app_router() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/stocks", get(stocks_endpoint))
        .route("/leaderboard", get(leaderboard_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn stocks_endpoint(Extension(state): Extension<AppState>) -> Json<StocksResponse> {
    let data = state
        .catalog
        .records()
        .iter()
        .map(|record| ScoredStock {
            stock_score: compute_score(record),
            record: record.clone(),
        })
        .collect();

    Json(StocksResponse {
        data,
        updated_at: Utc::now().to_rfc3339(),
    })
}

pub(crate) async fn leaderboard_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<LeaderboardResponse> {
    let mut top_scores: Vec<LeaderboardRow> = state
        .catalog
        .records()
        .iter()
        .map(|record| LeaderboardRow {
            ticker: record.ticker.clone(),
            name: record.name.clone(),
            score: compute_score(record),
        })
        .collect();
    top_scores.sort_by(|a, b| b.score.cmp(&a.score));
    top_scores.truncate(TOP_SCORES_LIMIT);

    let mut sectors: BTreeMap<String, SectorBest> = BTreeMap::new();
    for record in state.catalog.records() {
        let score = compute_score(record);
        match sectors.get(&record.sector) {
            Some(current) if score <= current.score => {}
            _ => {
                sectors.insert(
                    record.sector.clone(),
                    SectorBest {
                        ticker: record.ticker.clone(),
                        score,
                    },
                );
            }
        }
    }

    Json(LeaderboardResponse {
        top_scores,
        sectors,
        generated_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::DateTime;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use stockr::catalog::sample_catalog;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            catalog: Arc::new(sample_catalog()),
        }
    }

    #[tokio::test]
    async fn stocks_endpoint_injects_scores() {
        let state = test_state(true);
        let catalog_len = state.catalog.len();

        let Json(body) = stocks_endpoint(Extension(state.clone())).await;

        assert_eq!(body.data.len(), catalog_len);
        for scored in &body.data {
            assert_eq!(scored.stock_score, compute_score(&scored.record));
        }
        assert!(DateTime::parse_from_rfc3339(&body.updated_at).is_ok());
    }

    #[tokio::test]
    async fn leaderboard_endpoint_ranks_the_catalog() {
        let state = test_state(true);
        let catalog = state.catalog.clone();

        let Json(body) = leaderboard_endpoint(Extension(state)).await;

        assert_eq!(body.top_scores.len(), TOP_SCORES_LIMIT);
        assert!(body
            .top_scores
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));

        for (sector, best) in &body.sectors {
            let winner = catalog
                .get(&best.ticker)
                .expect("sector winner exists in catalog");
            assert_eq!(&winner.sector, sector);
            let max = catalog
                .records()
                .iter()
                .filter(|record| &record.sector == sector)
                .map(compute_score)
                .max()
                .expect("sector is non-empty");
            assert_eq!(best.score, max);
        }
    }

    #[tokio::test]
    async fn router_serves_the_documented_payload_shapes() {
        let app = app_router().layer(Extension(test_state(true)));

        let response = app
            .clone()
            .oneshot(Request::get("/stocks").body(Body::empty()).expect("request"))
            .await
            .expect("stocks response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let value: Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(value["updatedAt"].is_string());
        let first = &value["data"][0];
        assert!(first["stockScore"].is_u64());
        assert!(first["dailyChange"].is_number());
        assert!(first["marketCap"].is_string());
        assert!(first["fundamentals"]["revenueYoY"].is_number());

        let response = app
            .clone()
            .oneshot(
                Request::get("/leaderboard")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("leaderboard response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let value: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(value["topScores"].as_array().map(Vec::len), Some(5));
        assert!(value["sectors"].is_object());
        assert!(value["generatedAt"].is_string());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("health response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_reports_service_unavailable_until_flagged() {
        let response = readiness_endpoint(Extension(test_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(test_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
