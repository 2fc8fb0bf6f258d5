//! Shared validation helpers for inbound HTTP adapters.
//!
//! Required fields are checked for presence only: `0`, `""` and `false` are
//! valid values. A field counts as missing when the key is absent or `null`,
//! except for fields decoded through `present`, where only an absent key is
//! missing and `null` is a value.

use actix_web::web;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::domain::{Error, Sid};

/// Message returned when a request body cannot be decoded into the endpoint's
/// input struct.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON payload";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Presence of one required field in a decoded payload.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Presence {
    field: FieldName,
    present: bool,
}

impl Presence {
    pub(crate) const fn of<T>(field: FieldName, value: &Option<T>) -> Self {
        Self {
            field,
            present: value.is_some(),
        }
    }
}

/// `deserialize_with` helper for fields whose `null` is a real value.
///
/// Paired with `#[serde(default)]` on an `Option<Option<T>>` field: an absent
/// key stays `None`, `null` becomes `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Build the validation error for a payload lacking required fields.
///
/// The client sees the endpoint's fixed `message`; the names that were
/// actually missing are only logged.
pub(crate) fn missing_fields_error(message: &'static str, checked: &[Presence]) -> Error {
    let missing: Vec<&str> = checked
        .iter()
        .filter(|presence| !presence.present)
        .map(|presence| presence.field.as_str())
        .collect();
    debug!(?missing, "request is missing required fields");
    Error::invalid_request(message)
}

/// Resolve a `:sid` path segment, mapping non-numeric text to `not_found`.
pub(crate) fn parse_sid(raw: &str, not_found: impl FnOnce() -> Error) -> Result<Sid, Error> {
    Sid::parse_lenient(raw).ok_or_else(|| {
        debug!(raw, "path sid is not numeric");
        not_found()
    })
}

/// JSON extractor configuration rendering decode failures in the standard
/// error envelope.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting undecodable JSON payload");
        Error::invalid_request(INVALID_JSON_MESSAGE).into()
    })
}
