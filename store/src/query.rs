//! Query-string encoding for list requests.
//!
//! The backend expects qs-style bracket encoding, so parameter sets
//! containing arrays or nested maps must survive the trip — a flat
//! `k=v&k=v` serializer would silently flatten them.

use serde::Serialize;

use crate::error::ApiError;

/// Encode an arbitrary parameter set into a qs-style query string.
///
/// An empty parameter set encodes to an empty string; the caller decides
/// whether a `?` is warranted.
pub fn to_query_string<P: Serialize>(params: &P) -> Result<String, ApiError> {
    serde_qs::to_string(params).map_err(|e| ApiError::Query(e.to_string()))
}
