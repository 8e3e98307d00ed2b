//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body or query string could not be parsed into the
    /// expected shape, e.g. a missing field or a string where a number was
    /// expected.
    ///
    /// `status` is the client error status chosen by the extractor that
    /// rejected the request and `detail` names the offending field.
    #[error("invalid request: {detail}")]
    InvalidRequest {
        /// The client error status code to respond with.
        status: StatusCode,
        /// A human readable description of what was wrong with the request.
        detail: String,
    },

    /// The origin given for the cross-origin policy is not a valid header value.
    #[error("invalid allowed origin \"{0}\"")]
    InvalidOrigin(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// This includes the database being unavailable, e.g. the database file
    /// cannot be opened.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidRequest { status, detail } => {
                tracing::debug!("rejected request: {detail}");
                (status, detail)
            }
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested resource could not be found.".to_owned(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    async fn body_json(error: Error) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn invalid_request_keeps_status_and_detail() {
        let (status, body) = body_json(Error::InvalidRequest {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "amount: invalid type".to_owned(),
        })
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "amount: invalid type");
    }

    #[tokio::test]
    async fn sql_error_hides_details() {
        let (status, body) =
            body_json(Error::SqlError(rusqlite::Error::ExecuteReturnedResults)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }
}
