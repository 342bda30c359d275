//! Request and response types for the REST surface

use serde::{Deserialize, Serialize};

use shared::{AccountView, Employee};

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: fabricated session token plus sanitized account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AccountView,
}

/// Body of `POST /api/admin/users`
///
/// Any role field smuggled into the request is ignored; created accounts
/// are always accountants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/businesses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub industry: String,
}

/// Body of `POST /api/reports/generate`
///
/// Field names match the camelCase wire format the frontend sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "businessName")]
    pub business_name: String,
    pub employees: Vec<Employee>,
    #[serde(rename = "monthYear")]
    pub month_year: String,
}

/// Successful report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_request_wire_names() {
        let json = r#"{
            "businessName": "Acme",
            "employees": [{"name": "Ana", "salary": 1200.0}],
            "monthYear": "July 2026"
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.business_name, "Acme");
        assert_eq!(request.month_year, "July 2026");
        assert_eq!(request.employees.len(), 1);
        assert_eq!(request.employees[0].salary, 1200.0);
    }

    #[test]
    fn test_create_account_request_ignores_role_field() {
        let json = r#"{"name": "X", "email": "x@y.com", "password": "p", "role": "ADMIN"}"#;

        let request: CreateAccountRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "X");
        assert_eq!(request.email, "x@y.com");
    }
}
