// src/pipeline/response.rs

//! HTTP-shaped pipeline response.

use serde::{Deserialize, Serialize};

/// Body prefix for a successful analysis.
pub const SUCCESS_PREFIX: &str = "A imagem tem\n ";

/// Body returned for every failure.
pub const ERROR_BODY: &str = "Erro interno";

/// Response returned to the API gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    /// 200 response carrying the formatted summary.
    pub fn success(summary: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("{SUCCESS_PREFIX}{summary}"),
        }
    }

    /// Opaque 500 response.
    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: ERROR_BODY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(HttpResponse::internal_error()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "statusCode": 500, "body": "Erro interno" })
        );
    }

    #[test]
    fn test_success_prefix() {
        let response = HttpResponse::success("91.00% de ser to tipo Cachorro");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "A imagem tem\n 91.00% de ser to tipo Cachorro");
    }
}
