//! Application router configuration.

use axum::{
    Router,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
};

use crate::{
    AppState, Error,
    cors::cors_layer,
    endpoints,
    transaction::{create_transaction_endpoint, list_transactions_endpoint},
};

/// Return a router with all the app's routes.
///
/// The router applies the cross-origin policy for `state.allowed_origin`.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.allowed_origin.clone());

    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_NO_SLASH, any(redirect_to_transactions))
        .fallback(get_404_not_found)
        .layer(cors)
        .with_state(state)
}

/// Redirect requests for '/transactions' to '/transactions/', keeping the
/// query string.
///
/// Uses a temporary (307) redirect so clients repeat the request with the same
/// method and body.
async fn redirect_to_transactions(uri: Uri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}?{query}", endpoints::TRANSACTIONS),
        None => endpoints::TRANSACTIONS.to_owned(),
    };

    Redirect::temporary(&location)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{get_header, get_test_server, lunch_json},
    };

    #[tokio::test]
    async fn missing_trailing_slash_redirects() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_NO_SLASH).await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            get_header(&response, LOCATION.as_str()).as_deref(),
            Some(endpoints::TRANSACTIONS)
        );
    }

    #[tokio::test]
    async fn redirect_keeps_query_string() {
        let (server, _) = get_test_server();

        let response = server.get("/transactions?skip=2&limit=5").await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            get_header(&response, LOCATION.as_str()).as_deref(),
            Some("/transactions/?skip=2&limit=5")
        );
    }

    #[tokio::test]
    async fn post_without_trailing_slash_redirects_and_does_not_create() {
        let (server, _) = get_test_server();

        server
            .post(endpoints::TRANSACTIONS_NO_SLASH)
            .json(&lunch_json())
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);

        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (server, _) = get_test_server();

        let response = server.get("/transactions/1").await;

        response.assert_status_not_found();
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let (server, _) = get_test_server();

        server
            .delete(endpoints::TRANSACTIONS)
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
