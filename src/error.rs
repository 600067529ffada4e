use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Errors raised around the timetable generator: loading, validating and
/// exporting requests. The generator itself cannot fail.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Well-formed request with values the planner refuses
    #[error("{0}")]
    Validation(String),

    /// Request body could not be read as a timetable request
    #[error("{0}")]
    Payload(String),
}

impl ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::Validation(_) | PlannerError::Payload(_) | PlannerError::Json(_) => {
                StatusCode::BAD_REQUEST
            }
            PlannerError::Io(_) | PlannerError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({"error": self.to_string()}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let err = PlannerError::Validation("studyHoursPerDay must not be negative".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "studyHoursPerDay must not be negative");

        let err = PlannerError::Payload("missing field `subjects`".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_errors_map_to_server_error() {
        let err = PlannerError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("disk full"));
    }
}
