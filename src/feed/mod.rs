//! # NASA NeoWs feed access
//!
//! - [`feed_records`](crate::feed::feed_records) — serde models of the list and detail responses.
//! - [`ranker`](crate::feed::ranker) — close-approach filtering, sorting and truncation.
//! - [`detail`](crate::feed::detail) — per-object orbital record retrieval.
use serde::de::DeserializeOwned;

use crate::neo_errors::NeoError;

/// Serde models of the NeoWs responses.
pub mod feed_records;

/// Close-approach candidate selection.
pub mod ranker;

/// Orbital record retrieval and conversion.
pub mod detail;

/// Decode a JSON response body, keeping the originating url in the error.
pub(crate) fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, NeoError> {
    serde_json::from_str(body).map_err(|source| NeoError::MalformedResponse {
        url: url.to_string(),
        source,
    })
}
