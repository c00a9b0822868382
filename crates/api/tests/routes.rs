//! HTTP behaviour of the lookup routes against the mock data set.

mod common;

use axum::http::StatusCode;
use common::{body_json, data_source, get, offline_app, post_json, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Meta lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn states_lists_mock_states() {
    let (app, _) = offline_app();
    let response = get(app, "/states").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(data_source(&response), "mock");

    let json = body_json(response).await;
    assert_eq!(json, json!([
        {"id": "KA", "name": "KARNATAKA"},
        {"id": "MH", "name": "MAHARASHTRA"},
    ]));
}

#[tokio::test]
async fn commissions_scoped_to_state() {
    let (app, _) = offline_app();
    let json = body_json(get(app, "/commissions/KA").await).await;

    let ids: Vec<_> = json.as_array().unwrap().iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["KA_BLR_001", "KA_BLR_002"]);
}

#[tokio::test]
async fn commissions_for_unknown_state_is_empty_list() {
    let (app, _) = offline_app();
    let response = get(app, "/commissions/ZZ").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Case search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_by_case_number() {
    let (app, _) = offline_app();
    let response = post_json(
        app,
        "/cases/by-case-number",
        json!({"state": "KARNATAKA", "commission": "Bangalore 1st & Rural Additional", "value": "987"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["case_number"], "987/2024");
    assert_eq!(results[0]["filing_date"], "2024-11-18");
    assert_eq!(results[0]["case_stage"], "Orders");
}

#[tokio::test]
async fn search_by_complainant_advocate_accepts_search_value() {
    let (app, _) = offline_app();
    let json = body_json(
        post_json(
            app,
            "/cases/by-complainant-advocate",
            json!({"state": "karnataka", "commission": "bangalore urban", "search_value": "reddy"}),
        )
        .await,
    )
    .await;

    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["complainant"], "John Doe");
    assert_eq!(results[0]["filing_date"], "2025-02-01");
}

#[tokio::test]
async fn search_by_respondent_scenario() {
    let (app, _) = offline_app();
    let json = body_json(
        post_json(
            app,
            "/cases/by-respondent",
            json!({"state": "KARNATAKA", "commission": "Bangalore Urban", "value": "acme"}),
        )
        .await,
    )
    .await;

    assert_eq!(json[0]["respondent"], "Acme Pvt Ltd");
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn judge_and_industry_searches_return_empty_ok() {
    for kind in ["by-judge", "by-industry-type"] {
        let (app, _) = offline_app();
        let response = post_json(
            app,
            &format!("/cases/{}", kind),
            json!({"state": "KARNATAKA", "commission": "Bangalore Urban", "value": "a"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK, "{kind}");
        assert_eq!(body_json(response).await, json!([]));
    }
}

#[tokio::test]
async fn unknown_state_is_bad_request() {
    let (app, state) = offline_app();
    let response = post_json(
        app,
        "/cases/by-case-number",
        json!({"state": "Unknown", "commission": "Bangalore Urban", "value": "987"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("Unknown state"));

    let metrics = state.metrics.snapshot();
    assert_eq!(metrics.rejected_requests, 1);
    assert_eq!(metrics.mock_fallbacks, 0);
}

#[tokio::test]
async fn commission_from_other_state_is_bad_request() {
    let (app, _) = offline_app();
    let response = post_json(
        app,
        "/cases/by-case-number",
        json!({"state": "MAHARASHTRA", "commission": "Bangalore Urban", "value": "987"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_kind_is_bad_request() {
    let (app, _) = offline_app();
    let response = post_json(
        app,
        "/cases/by-weather",
        json!({"state": "KARNATAKA", "commission": "Bangalore Urban", "value": "987"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Invalid search kind"));
}

#[tokio::test]
async fn missing_value_is_bad_request() {
    let (app, _) = offline_app();
    let response = post_json(
        app,
        "/cases/by-respondent",
        json!({"state": "KARNATAKA", "commission": "Bangalore Urban"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (app, _) = offline_app();
    let response = post_raw(app, "/cases/by-respondent", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], 400);
}

#[tokio::test]
async fn query_string_search_matches_post() {
    let (app, _) = offline_app();
    let response = get(
        app,
        "/cases?kind=by-case-number&state=KARNATAKA&commission=Bangalore%20Urban&value=123",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["case_number"], "123/2025");
}

#[tokio::test]
async fn query_string_no_match_is_empty_ok() {
    let (app, _) = offline_app();
    let response = get(
        app,
        "/cases?kind=by-complainant&state=KARNATAKA&commission=Bangalore%20Urban&value=nobody",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Health and metrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_disabled_upstream_offline() {
    let (app, _) = offline_app();
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["upstream"], "disabled");
}

#[tokio::test]
async fn metrics_count_searches() {
    let (app, _) = offline_app();
    let body = json!({"state": "KARNATAKA", "commission": "Bangalore Urban", "value": "987"});

    post_json(app.clone(), "/cases/by-case-number", body.clone()).await;
    post_json(app.clone(), "/cases/by-nothing", body).await;

    let json = body_json(get(app, "/metrics").await).await;
    assert_eq!(json["total_requests"], 2);
    assert_eq!(json["successful_requests"], 1);
    assert_eq!(json["rejected_requests"], 1);
    assert_eq!(json["mock_fallbacks"], 1);
    assert_eq!(json["upstream_hits"], 0);
}
