use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;

/// Handler-boundary error: a status code plus the JSON body sent to
/// the client. Store, multipart and io failures all convert into it so
/// handlers can use `?` end to end.
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"error": message})),
        }
    }

    /// Field-validation failures are reported all at once.
    pub fn validation(errors: Vec<&str>) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            body: Json(json!({"errors": errors})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &error.to_string())
    }
}

impl From<MultipartError> for Error {
    fn from(error: MultipartError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &error.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_message_under_error_key() {
        let err = Error::new(StatusCode::BAD_REQUEST, "boom");
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.0, json!({"error": "boom"}));
    }

    #[test]
    fn validation_collects_messages_under_errors_key() {
        let err = Error::validation(vec!["title is missing", "content is missing"]);
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body.0,
            json!({"errors": ["title is missing", "content is missing"]})
        );
    }
}
