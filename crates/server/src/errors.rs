use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{error, warn};

/// Error body returned by every API route: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.title, "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let detail = Some(e.to_string());
        match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", detail)
            }
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", detail),
            ServiceError::Duplicate(_) => {
                warn!(error = ?detail, "duplicate id rejected");
                Self::new(StatusCode::CONFLICT, "Conflict", detail)
            }
            ServiceError::Internal(_) | ServiceError::Db(_) => {
                error!(error = ?detail, "backend failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("contact", "c1"), StatusCode::NOT_FOUND),
            (ServiceError::duplicate("org", "o1"), StatusCode::CONFLICT),
            (ServiceError::Internal("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Db("gone".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn detail_carries_the_message() {
        let e = JsonApiError::from(ServiceError::not_found("addressbook", "ab1"));
        assert_eq!(e.title, "Not Found");
        assert!(e.detail.as_deref().is_some_and(|d| d.contains("ab1")));
    }
}
