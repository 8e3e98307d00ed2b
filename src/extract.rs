//! Request extractors that reject malformed requests with the app's [Error] type.
//!
//! Using these instead of [axum::Json] and [axum::extract::Query] means a bad
//! request body or query string gets the same JSON error body as every other
//! error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

/// Like [axum::Json], but rejects with [Error::InvalidRequest].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Like [axum::extract::Query], but rejects with [Error::InvalidRequest].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
