//! Report generator client tests against a mock Gemini endpoint

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use server::services::GeminiReportGenerator;
use server::traits::ReportGenerator;
use server::ServerError;
use shared::{ApiFailure, Employee};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

// Every test in this binary sets the same value, so parallel execution is safe
fn set_test_api_key() {
    std::env::set_var("API_KEY", "test-key");
}

fn employees() -> Vec<Employee> {
    vec![
        Employee {
            name: "Ana".to_string(),
            salary: 1200.0,
        },
        Employee {
            name: "Luis".to_string(),
            salary: 1500.5,
        },
    ]
}

#[tokio::test]
async fn test_successful_generation_relays_candidate_text() {
    set_test_api_key();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("Generate a payroll summary for Acme for July 2026"))
        .and(body_string_contains("- Ana: Salary 1200"))
        .and(body_string_contains("- Luis: Salary 1500.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            {"text": "Payroll for Acme, July 2026: total 2700.5."}
                        ]
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::with_base_url(mock_server.uri());
    let summary = generator
        .generate_summary("Acme", &employees(), "July 2026")
        .await
        .unwrap();

    assert_eq!(summary, "Payroll for Acme, July 2026: total 2700.5.");
}

#[tokio::test]
async fn test_provider_error_collapses_to_generation_failure() {
    set_test_api_key();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::with_base_url(mock_server.uri());
    let result = generator.generate_summary("Acme", &employees(), "July 2026").await;

    assert!(matches!(result, Err(ServerError::GenerationFailed(_))));
}

#[tokio::test]
async fn test_rate_limit_is_classified_before_collapsing() {
    set_test_api_key();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::with_base_url(mock_server.uri());
    let result = generator.generate_summary("Acme", &employees(), "July 2026").await;

    match result {
        Err(ServerError::GenerationFailed(failure)) => {
            assert_eq!(failure, ApiFailure::RateLimitExceeded);
        }
        other => panic!("expected GenerationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_body_without_candidates_is_a_generation_failure() {
    set_test_api_key();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::with_base_url(mock_server.uri());
    let result = generator.generate_summary("Acme", &employees(), "July 2026").await;

    match result {
        Err(ServerError::GenerationFailed(failure)) => {
            assert!(matches!(failure, ApiFailure::InvalidResponse(_)));
        }
        other => panic!("expected GenerationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_generation_failure() {
    set_test_api_key();

    // Nothing listens on this port
    let generator = GeminiReportGenerator::with_base_url("http://127.0.0.1:1");
    let result = generator.generate_summary("Acme", &employees(), "July 2026").await;

    match result {
        Err(ServerError::GenerationFailed(failure)) => {
            assert!(matches!(failure, ApiFailure::NetworkError(_)));
        }
        other => panic!("expected GenerationFailed, got {other:?}"),
    }
}
