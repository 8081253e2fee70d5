/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Status-code driven mapping of response bodies into typed envelopes.
//!
//! Every endpoint lists, per HTTP status, the top-level keys it returns.
//! [`map_response`] keeps only those keys (the error keys for any status the
//! endpoint does not list) and decodes them into the endpoint's envelope.

use crate::constants::ERROR_FIELDS;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Keys returned by an endpoint for one HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusShape {
    /// HTTP status code
    pub status: u16,
    /// Top-level keys to extract
    pub fields: &'static [&'static str],
}

impl StatusShape {
    /// Creates a new shape
    #[must_use]
    pub const fn new(status: u16, fields: &'static [&'static str]) -> Self {
        Self { status, fields }
    }
}

/// `errorCode` / `errorMessage` pair carried by failed responses
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorBody {
    /// Machine readable error code
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human readable error message
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ApiErrorBody {
    /// Whether neither field is set
    pub fn is_empty(&self) -> bool {
        self.error_code.is_none() && self.error_message.is_none()
    }
}

/// Typed body of one endpoint
pub trait Envelope: DeserializeOwned + Default {
    /// Endpoint name used in log messages, e.g. `order.create`
    const ENDPOINT: &'static str;
    /// Keys returned per status
    const SHAPES: &'static [StatusShape];

    /// Error fields of the body
    fn error(&self) -> &ApiErrorBody;

    /// Keys to extract for a status
    fn fields_for(status: u16) -> &'static [&'static str] {
        Self::SHAPES
            .iter()
            .find(|shape| shape.status == status)
            .map_or(ERROR_FIELDS, |shape| shape.fields)
    }
}

/// Implements [`Envelope`] for a struct with a flattened `error: ApiErrorBody`
macro_rules! impl_envelope {
    ($ty:ty, $endpoint:literal, [$($status:literal => [$($field:literal),* $(,)?]),* $(,)?]) => {
        impl $crate::model::envelope::Envelope for $ty {
            const ENDPOINT: &'static str = $endpoint;
            const SHAPES: &'static [$crate::model::envelope::StatusShape] = &[
                $($crate::model::envelope::StatusShape::new($status, &[$($field),*]),)*
            ];

            fn error(&self) -> &$crate::model::envelope::ApiErrorBody {
                &self.error
            }
        }
    };
}

pub(crate) use impl_envelope;

/// A mapped response: status, content type, typed body and the raw text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<E> {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Typed body; `Default` when the body was not JSON
    pub body: E,
    /// Body as received
    pub raw_body: String,
}

impl<E: Envelope> ApiResponse<E> {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error fields of the body
    pub fn error(&self) -> &ApiErrorBody {
        self.body.error()
    }

    /// The body on 2xx.
    ///
    /// Otherwise [`AppError::Unauthorized`] for 401, [`AppError::Unexpected`]
    /// when the body carries no error fields and [`AppError::Api`] for the rest.
    pub fn into_result(self) -> Result<E, AppError> {
        if self.is_success() {
            return Ok(self.body);
        }
        if self.status == 401 {
            return Err(AppError::Unauthorized);
        }
        let error = self.body.error().clone();
        if error.is_empty()
            && let Ok(status) = StatusCode::from_u16(self.status)
        {
            return Err(AppError::Unexpected(status));
        }
        Err(AppError::Api {
            status: self.status,
            error_code: error.error_code,
            error_message: error.error_message,
        })
    }
}

/// Whether a content type denotes a JSON body
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|ct| {
        let ct = ct.to_ascii_lowercase();
        ct.contains("application/json") || ct.contains("+json")
    })
}

/// Maps a raw response into the envelope of its endpoint.
///
/// Never fails: a non-JSON body yields the default envelope, and a kept key
/// whose value does not fit the envelope is dropped with a warning.
pub fn map_response<E: Envelope>(
    status: u16,
    content_type: Option<&str>,
    raw_body: &str,
) -> ApiResponse<E> {
    let body = if is_json_content_type(content_type) {
        decode_envelope::<E>(status, raw_body)
    } else {
        debug!(
            "{} returned {} with content type {:?}, keeping raw body",
            E::ENDPOINT,
            status,
            content_type
        );
        E::default()
    };

    ApiResponse {
        status,
        content_type: content_type.map(String::from),
        body,
        raw_body: raw_body.to_string(),
    }
}

fn decode_envelope<E: Envelope>(status: u16, raw_body: &str) -> E {
    if raw_body.trim().is_empty() {
        return E::default();
    }
    let object = match serde_json::from_str::<Value>(raw_body) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            warn!("{} returned {} with a non-object body", E::ENDPOINT, status);
            return E::default();
        }
        Err(e) => {
            warn!("{} returned {} with invalid JSON: {}", E::ENDPOINT, status, e);
            return E::default();
        }
    };

    let kept: Map<String, Value> = E::fields_for(status)
        .iter()
        .filter_map(|field| object.get(*field).map(|v| ((*field).to_string(), v.clone())))
        .collect();

    match E::deserialize(Value::Object(kept.clone())) {
        Ok(envelope) => envelope,
        Err(_) => decode_leniently(status, kept),
    }
}

fn decode_leniently<E: Envelope>(status: u16, kept: Map<String, Value>) -> E {
    let mut accepted = Map::new();
    for (key, value) in kept {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value);
        match E::deserialize(Value::Object(candidate.clone())) {
            Ok(_) => accepted = candidate,
            Err(e) => warn!("{} {}: dropping field {}: {}", E::ENDPOINT, status, key, e),
        }
    }
    E::deserialize(Value::Object(accepted)).unwrap_or_default()
}
