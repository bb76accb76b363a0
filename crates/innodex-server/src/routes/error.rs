use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::OnceLock;
use utoipa::ToSchema;

static EXPOSE_INTERNAL_ERRORS: OnceLock<bool> = OnceLock::new();

/// Decides once per process whether the description of internal errors reaches the client.
pub(crate) fn expose_internal_errors(env: &str) {
    let expose = env != "production";
    if EXPOSE_INTERNAL_ERRORS.set(expose).is_err() {
        tracing::warn!("error exposure was already configured");
    }
}

pub(crate) fn internal_errors_exposed() -> bool {
    EXPOSE_INTERNAL_ERRORS.get().copied().unwrap_or(false)
}

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> http::StatusCode;
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorData<T> {
    pub(crate) error: T,
    pub(crate) error_description: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Map<String, Value>>,
}

impl<T> ErrorData<T> {
    pub fn new<A: Into<Cow<'static, str>>>(error: T, error_description: A) -> Self {
        Self {
            error,
            error_description: error_description.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, key: &str, value: Value) -> Self {
        self.data.get_or_insert_with(Map::new).insert(key.to_owned(), value);
        self
    }
}

pub(crate) trait ErrorDataProvider<T: GetStatusCode> {
    fn error_data(self) -> Option<ErrorData<T>>;
}

pub(crate) fn error_to_axum_response<E, T>(error: T) -> Response
where
    E: GetStatusCode + serde::Serialize,
    T: GetStatusCode + ErrorDataProvider<E>,
{
    let status_code = GetStatusCode::status_code(&error);
    let error_data = error.error_data();
    match error_data {
        Some(data) => {
            let status_code = GetStatusCode::status_code(&data.error);
            let json = Json(data);
            (status_code, json).into_response()
        }
        None => status_code.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_data_serialization() {
        let data = ErrorData::new("invalid_request", "name must not be empty");
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"error": "invalid_request", "error_description": "name must not be empty"})
        );

        let data = data.with_data("questionIds", json!([4, 7]));
        assert_eq!(serde_json::to_value(&data).unwrap()["data"], json!({"questionIds": [4, 7]}));
    }
}
