//! Payroll report generation via the Gemini API

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{ServerError, ServerResult};
use crate::traits::ReportGenerator;
use shared::{ApiFailure, Employee};

const API_KEY_VAR: &str = "API_KEY";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";

/// Build the natural-language prompt sent to the provider
pub fn build_payroll_prompt(business_name: &str, employees: &[Employee], month_year: &str) -> String {
    let employee_data = employees
        .iter()
        .map(|e| format!("- {}: Salary {}", e.name, e.salary))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Generate a payroll summary for {business_name} for {month_year} with this data:\n{employee_data}")
}

/// Real report generator backed by the Gemini `generateContent` endpoint
///
/// The API key is read from the environment at request time, not cached at
/// startup. No retry, no backoff, no timeout beyond the transport default.
pub struct GeminiReportGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiReportGenerator {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn request_summary(&self, api_key: &str, prompt: &str) -> Result<String, ApiFailure> {
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return match response.status().as_u16() {
                401 | 403 => Err(ApiFailure::AuthenticationFailed),
                429 => Err(ApiFailure::RateLimitExceeded),
                503 => Err(ApiFailure::ServiceUnavailable),
                _ => Err(ApiFailure::ServerError(response.status().to_string())),
            };
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let text = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| ApiFailure::InvalidResponse("No content in response".to_string()))?;

        Ok(text.to_string())
    }
}

impl Default for GeminiReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportGenerator for GeminiReportGenerator {
    async fn generate_summary(
        &self,
        business_name: &str,
        employees: &[Employee],
        month_year: &str,
    ) -> ServerResult<String> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| ServerError::MissingApiKey { key: API_KEY_VAR })?;

        let prompt = build_payroll_prompt(business_name, employees, month_year);
        let request_id = Uuid::new_v4();

        tracing::debug!(
            %request_id,
            business = business_name,
            period = month_year,
            employee_count = employees.len(),
            "requesting payroll summary"
        );

        match self.request_summary(&api_key, &prompt).await {
            Ok(summary) => {
                tracing::info!(%request_id, "payroll summary generated");
                Ok(summary)
            }
            Err(failure) => {
                tracing::warn!(%request_id, %failure, "payroll summary generation failed");
                Err(ServerError::GenerationFailed(failure))
            }
        }
    }
}
