//! JSON body extractor that runs `validator` rules.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use gameshelf_core::error::AppError;

use crate::error::ApiError;

/// Like `Json<T>`, but malformed bodies and failed field rules become
/// `400 VALIDATION_ERROR` responses with per-field details.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate().map_err(validation_failed)?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::validation("Invalid request body")
        .with_details(serde_json::json!({ "body": [rejection.body_text()] }))
}

/// Converts validator output into a field → messages map.
pub(crate) fn validation_failed(errors: ValidationErrors) -> AppError {
    let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => e.code.to_string(),
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    AppError::validation("Validation failed").with_details(serde_json::json!(fields))
}
