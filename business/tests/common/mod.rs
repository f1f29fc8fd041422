#![allow(dead_code)]

use employees_business::UserRecord;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Number of users that are both female and from the USA in [`fixture_users`].
pub const FEMALE_USA_COUNT: usize = 23;

/// 100 users shaped like the live endpoint.
///
/// - even ids are female, odd ids male
/// - even ids up to 46 carry a top-level `"USA"` country (23 users)
/// - other even ids and odd multiples of 3 are `"Canada"`
/// - the rest have no top-level country at all
pub fn fixture_json() -> Value {
    let users: Vec<Value> = (1..=100u64).map(user_json).collect();
    json!({ "users": users, "total": 208, "skip": 0, "limit": 100 })
}

pub fn fixture_users() -> Vec<UserRecord> {
    let body = fixture_json();
    serde_json::from_value(body["users"].clone()).unwrap()
}

fn user_json(id: u64) -> Value {
    let female = id % 2 == 0;
    let country = if female && id <= 46 {
        Some("USA")
    } else if female || id % 3 == 0 {
        Some("Canada")
    } else {
        None
    };

    let mut user = json!({
        "id": id,
        "firstName": format!("First{id:03}"),
        "lastName": format!("Last{id:03}"),
        "maidenName": "",
        "age": 20 + id % 45,
        "gender": if female { "female" } else { "male" },
        "email": format!("user{id}@example.com"),
        "image": format!("https://example.com/icon/{id}/128"),
        "company": { "title": format!("Title {id}"), "department": "Engineering" },
        "address": { "state": "Ohio", "country": "United States" }
    });
    if let Some(country) = country {
        user["country"] = json!(country);
    }
    user
}

pub async fn mock_users_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture_json()))
        .mount(&server)
        .await;
    server
}
