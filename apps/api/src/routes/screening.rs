//! Axum route handlers for the Screening API.

use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use screening_core::{
    compare_resume_versions, snapshot_from_value, ComparisonResult, EmploymentSnapshot, RiskLevel,
};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub previous: Option<EmploymentSnapshot>,
    #[serde(default)]
    pub current: Option<EmploymentSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRawRequest {
    #[serde(default)]
    pub previous: Value,
    #[serde(default)]
    pub current: Value,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screening/compare
///
/// Compares two canonical employment snapshots. Missing or null sides are
/// treated as empty histories.
pub async fn handle_compare(Json(request): Json<CompareRequest>) -> Json<ComparisonResult> {
    let previous = request.previous.unwrap_or_default();
    let current = request.current.unwrap_or_default();

    let result = compare_resume_versions(&previous, &current);
    log_outcome(&result);
    Json(result)
}

/// POST /api/v1/screening/compare-raw
///
/// Accepts loosely shaped parsed-resume payloads (record arrays, history
/// objects, alias field names) and normalizes them before comparing. Scalar
/// sides are rejected: they mean the resume was never parsed upstream.
pub async fn handle_compare_raw(
    Json(request): Json<CompareRawRequest>,
) -> Result<Json<ComparisonResult>, AppError> {
    let previous = normalize_side(&request.previous, "previous")?;
    let current = normalize_side(&request.current, "current")?;

    let result = compare_resume_versions(&previous, &current);
    log_outcome(&result);
    Ok(Json(result))
}

fn normalize_side(payload: &Value, side: &str) -> Result<EmploymentSnapshot, AppError> {
    match payload {
        Value::Null => Ok(EmploymentSnapshot::default()),
        Value::Object(_) | Value::Array(_) => Ok(snapshot_from_value(payload)),
        _ => Err(AppError::Validation(format!(
            "'{side}' must be an object, an array, or null; check that the resume was parsed"
        ))),
    }
}

fn log_outcome(result: &ComparisonResult) {
    let summary = result.summary();
    if result.overall_risk >= RiskLevel::Medium {
        warn!("{summary}");
    } else {
        info!("{summary}");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::build_router;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = build_router().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let resp = build_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "screening-api");
    }

    #[tokio::test]
    async fn test_compare_returns_wire_contract() {
        let (status, body) = post_json(
            "/api/v1/screening/compare",
            json!({
                "previous": {
                    "clientNames": ["Acme"],
                    "jobTitles": ["Dev"],
                    "relevantDates": ["2020-2021"]
                },
                "current": {
                    "clientNames": ["Acme", "Globex"],
                    "jobTitles": ["Dev", "Sr Dev"],
                    "relevantDates": ["2020-2021", "2021-2023"]
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasChanges"], true);
        assert_eq!(body["newEmployers"], json!(["Globex"]));
        assert_eq!(body["removedEmployers"], json!([]));
        assert_eq!(body["changedTitles"], json!([]));
        assert_eq!(body["changedDates"], json!([]));
        assert_eq!(body["overallRisk"], "low");
    }

    #[tokio::test]
    async fn test_compare_null_sides_default_to_empty() {
        let (status, body) = post_json(
            "/api/v1/screening/compare",
            json!({ "previous": null, "current": null }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasChanges"], false);
        assert_eq!(body["overallRisk"], "none");
    }

    #[tokio::test]
    async fn test_compare_missing_sides_default_to_empty() {
        let (status, body) = post_json("/api/v1/screening/compare", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasChanges"], false);
        assert_eq!(body["overallRisk"], "none");
    }

    #[tokio::test]
    async fn test_compare_flags_employer_removals_high() {
        let (status, body) = post_json(
            "/api/v1/screening/compare",
            json!({
                "previous": { "clientNames": ["A", "B", "C", "D"] },
                "current": { "clientNames": ["A", "B"] }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removedEmployers"], json!(["C", "D"]));
        assert_eq!(body["overallRisk"], "high");
    }

    #[tokio::test]
    async fn test_compare_raw_normalizes_record_arrays() {
        let (status, body) = post_json(
            "/api/v1/screening/compare-raw",
            json!({
                "previous": [
                    { "employer": "Acme", "title": "Dev", "dates": "2019-2020" }
                ],
                "current": {
                    "employmentHistory": [
                        { "company": "Acme", "position": "Sr Dev", "startDate": "2019", "endDate": "2020" }
                    ]
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasChanges"], true);
        assert_eq!(body["changedTitles"][0]["employer"], "Acme");
        assert_eq!(body["changedTitles"][0]["old"], "Dev");
        assert_eq!(body["changedTitles"][0]["new"], "Sr Dev");
        // "2019-2020" vs the composed "2019 - 2020" counts as a date edit
        assert_eq!(body["changedDates"][0]["new"], "2019 - 2020");
    }

    #[tokio::test]
    async fn test_compare_raw_null_sides_default_to_empty() {
        let (status, body) = post_json(
            "/api/v1/screening/compare-raw",
            json!({ "previous": null }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasChanges"], false);
        assert_eq!(body["overallRisk"], "none");
    }

    #[tokio::test]
    async fn test_compare_raw_rejects_scalar_side() {
        let (status, body) = post_json(
            "/api/v1/screening/compare-raw",
            json!({
                "previous": "ten years of experience at Acme...",
                "current": {}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("previous"));
    }
}
