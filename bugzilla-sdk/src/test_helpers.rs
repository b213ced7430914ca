// ABOUTME: Test helper utilities for mocking Bugzilla REST responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

use mockito::{Server, ServerGuard};
use serde_json::json;

use crate::BugId;

pub async fn mock_bugzilla_server() -> ServerGuard {
    Server::new_async().await
}

pub fn mock_search_response() -> serde_json::Value {
    json!({
        "bugs": [
            {
                "id": 1,
                "summary": "foo crashes"
            },
            {
                "id": 2,
                "summary": "unrelated"
            }
        ],
        "faults": []
    })
}

pub fn mock_empty_search_response() -> serde_json::Value {
    json!({
        "bugs": [],
        "faults": []
    })
}

pub fn mock_update_response(id: BugId) -> serde_json::Value {
    json!({
        "bugs": [
            {
                "id": id,
                "alias": [],
                "last_change_time": "2024-01-16T14:45:00Z",
                "changes": {
                    "summary": {
                        "removed": "foo crashes",
                        "added": "bar crashes"
                    }
                }
            }
        ]
    })
}

pub fn mock_error_response() -> serde_json::Value {
    json!({
        "error": true,
        "code": 306,
        "documentation": "https://bmo.readthedocs.io/en/latest/api/",
        "message": "The API key you specified is invalid."
    })
}
