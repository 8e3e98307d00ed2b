//! Helpers shared by the HTTP tests.
#![allow(missing_docs)]

use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};

use crate::{AppState, Database, build_router};

/// The origin that test servers allow cross-origin requests from.
pub(crate) const TEST_ORIGIN: &str = "http://localhost:3000";

pub(crate) fn get_test_state() -> AppState {
    let database = Database::in_memory().expect("Could not open database in memory.");

    AppState::new(database, TEST_ORIGIN).expect("Could not create app state.")
}

pub(crate) fn get_test_server() -> (TestServer, AppState) {
    let state = get_test_state();
    let server =
        TestServer::new(build_router(state.clone())).expect("Could not create test server.");

    (server, state)
}

/// The request body from the lunch example used throughout the tests.
pub(crate) fn lunch_json() -> Value {
    json!({
        "amount": 42.5,
        "category": "food",
        "description": "lunch",
        "is_income": false,
        "date": "2024-01-01"
    })
}

#[track_caller]
pub(crate) fn get_header(response: &TestResponse, header_name: &str) -> Option<String> {
    response.headers().get(header_name).map(|value| {
        value
            .to_str()
            .expect("Could not convert header to str")
            .to_owned()
    })
}
