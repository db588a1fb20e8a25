//! Shared fixture server for the offline contract tests.

#![allow(dead_code)] // Some utilities are used by different test files

use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests that carry no query string.
struct NoQuery;

impl Match for NoQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().map_or(true, str::is_empty)
    }
}

/// Fixture records mirroring the remote collection's shape.
pub fn fixture_posts() -> Vec<Value> {
    vec![
        post(1, 1, "sunt aut facere repellat", "quia et suscipit suscipit recusandae"),
        post(2, 1, "qui est esse", "est rerum tempore vitae sequi sint"),
        post(3, 2, "ea molestias quasi exercitationem", "et iusto sed quo iure"),
        post(4, 2, "eum et est occaecati", "ullam et saepe reiciendis voluptatem"),
        post(5, 3, "nesciunt quas odio", "repudiandae veniam quaerat sunt sed"),
    ]
}

fn post(id: i64, user_id: i64, title: &str, body: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "title": title,
        "body": body
    })
}

/// Collection base URL on the fixture server.
pub fn collection_url(server: &MockServer) -> String {
    format!("{}/posts", server.uri())
}

/// Start a fixture server implementing the collection's documented
/// semantics: filters answer with arrays (empty on no match), direct
/// lookups answer 404 with a JSON body when the id is unknown.
pub async fn start_posts_server() -> MockServer {
    let server = MockServer::start().await;
    let posts = fixture_posts();

    // Direct lookups for known ids, then a JSON 404 for any other id.
    for record in &posts {
        Mock::given(method("GET"))
            .and(path(format!("/posts/{}", record["id"])))
            .respond_with(ResponseTemplate::new(200).set_body_json(record))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path_regex(r"^/posts/-?\d+$"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    // Unfiltered collection.
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(NoQuery)
        .respond_with(ResponseTemplate::new(200).set_body_json(&posts))
        .mount(&server)
        .await;

    // One mock per filterable value, then an empty array for any other
    // filter. Mocks are matched in mount order, so the bare-path fallback
    // below only answers queries no specific mock claimed.
    for field in ["userId", "id", "title"] {
        let mut seen: Vec<String> = Vec::new();
        for record in &posts {
            let value = query_value(&record[field]);
            if seen.contains(&value) {
                continue;
            }
            seen.push(value.clone());

            let matching: Vec<Value> = posts
                .iter()
                .filter(|candidate| query_value(&candidate[field]) == value)
                .cloned()
                .collect();
            Mock::given(method("GET"))
                .and(path("/posts"))
                .and(query_param(field, value.as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(&matching))
                .mount(&server)
                .await;
        }
    }
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    server
}

/// Render a fixture field the way it appears in a query string.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
