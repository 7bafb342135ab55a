//! Internal response decoding for the Scryfall protocol.
//!
//! Scryfall does not wrap results in an envelope. Every body is a single JSON
//! object whose `object` field says what it is, and failures come back as an
//! `"error"` object alongside a non-2xx status.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// The error object returned by Scryfall.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub details: String,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api {
            status: err.status,
            code: err.code,
            details: err.details,
        }
    }
}

/// Decode a response body, turning error objects into [`Error::Api`].
pub(crate) fn decode<T>(status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    if body.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("object").and_then(|o| o.as_str()) == Some("error") {
        let mut err: ApiError = serde_json::from_value(value)?;
        if err.status == 0 {
            err.status = status;
        }
        return Err(err.into());
    }

    Ok(serde_json::from_value(value)?)
}
