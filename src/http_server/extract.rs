//! Request body extraction
//!
//! Note bodies arrive either as JSON or as an HTML form post.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::Form;
use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// Body extractor accepting `application/x-www-form-urlencoded` or JSON.
///
/// Media types are matched case-insensitively. A body of any other type,
/// or one sent without a content type, is ignored and the value is built
/// from an empty object, as is an empty JSON body. Types with defaulted
/// fields accept both.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Form,
    Json,
    Ignored,
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(&req);

        if kind == BodyKind::Form {
            // `Form` matches its content type case-sensitively
            req.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let blank = bytes.iter().all(u8::is_ascii_whitespace);
        let body: &[u8] = if kind == BodyKind::Ignored || blank {
            b"{}"
        } else {
            &bytes
        };
        serde_json::from_slice(body)
            .map(Self)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

fn body_kind(req: &Request) -> BodyKind {
    let essence = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase());

    match essence.as_deref() {
        Some(FORM_CONTENT_TYPE) => BodyKind::Form,
        Some(media) if media == "application/json" || media.ends_with("+json") => BodyKind::Json,
        _ => BodyKind::Ignored,
    }
}
