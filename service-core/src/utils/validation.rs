use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, FieldViolation};

/// JSON body extractor that checks shape first, then field rules.
///
/// Shape failures (missing field, wrong type) and rule failures both surface
/// as [`AppError::ValidationError`] naming the offending field.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let text = err.body_text();
            tracing::debug!(error = %text, "Rejected request body");
            AppError::ValidationError(vec![violation_from_message(&text)])
        }
        JsonRejection::JsonSyntaxError(err) => {
            AppError::BadRequest(anyhow::anyhow!("Json parse error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(err) => {
            AppError::UnsupportedMediaType(err.body_text())
        }
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge(other.body_text())
        }
        other => AppError::BadRequest(anyhow::anyhow!(other.body_text())),
    }
}

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Recover the field name from a serde data error.
///
/// Missing fields are reported as "missing field `name`" at the root; type
/// errors are prefixed with the path of the offending value ("name: invalid
/// type ..."). Anything else is attributed to the body as a whole.
pub(crate) fn violation_from_message(text: &str) -> FieldViolation {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    let detail = strip_position(detail);

    if let Some(rest) = detail.strip_prefix("missing field `") {
        if let Some(end) = rest.find('`') {
            return FieldViolation::new(&rest[..end], "field required");
        }
    }

    if let Some((path, reason)) = detail.split_once(": ") {
        if !path.is_empty() && !path.contains(' ') {
            return FieldViolation::new(path, reason);
        }
    }

    FieldViolation::new("body", detail)
}

fn strip_position(detail: &str) -> &str {
    match detail.rfind(" at line ") {
        Some(idx) => &detail[..idx],
        None => detail,
    }
}
