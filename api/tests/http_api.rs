use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Form, Json, Router,
    extract::State,
    http::{Method, StatusCode},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use spatrem_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tokio::net::TcpListener;

/// Canned SPARQL endpoint: answers with the bindings of the first fixture
/// whose fragment occurs in the query, and records every query.
#[derive(Clone, Default)]
struct StubEndpoint {
    fixtures: Arc<Vec<(&'static str, Value)>>,
    received: Arc<Mutex<Vec<String>>>,
}

impl StubEndpoint {
    fn new(fixtures: Vec<(&'static str, Value)>) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
            received: Arc::default(),
        }
    }

    fn queries(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

async fn sparql(
    State(stub): State<StubEndpoint>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let query = form.get("query").cloned().unwrap_or_default();
    let bindings = stub
        .fixtures
        .iter()
        .find(|(fragment, _)| query.contains(fragment))
        .map(|(_, bindings)| bindings.clone())
        .unwrap_or_else(|| json!([]));
    stub.received.lock().unwrap().push(query);

    Json(json!({ "head": { "vars": [] }, "results": { "bindings": bindings } }))
}

fn row(pairs: &[(&str, &str)]) -> Value {
    let binding: serde_json::Map<String, Value> = pairs
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                json!({ "type": "literal", "value": value }),
            )
        })
        .collect();
    Value::Object(binding)
}

async fn spawn_endpoint(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{}/sparql", addr)
}

async fn server_for(endpoint: &str) -> TestServer {
    let args = Args::parse_from([
        "spatrem-api",
        "--sparql-endpoint",
        endpoint,
        "--sparql-max-retries",
        "0",
    ]);
    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

async fn server_with(stub: &StubEndpoint) -> TestServer {
    let endpoint = spawn_endpoint(
        Router::new()
            .route("/sparql", post(sparql))
            .with_state(stub.clone()),
    )
    .await;
    server_for(&endpoint).await
}

fn translation(id: &str) -> Value {
    let iri = format!("http://spacesoftranslation.org/ns/spatrem/{id}");
    row(&[
        ("translation", iri.as_str()),
        ("title", "Der Prozess"),
        ("original", "http://spacesoftranslation.org/ns/spatrem/o1"),
        ("author", "http://spacesoftranslation.org/ns/people/a1"),
        ("author_name", "Kafka, Franz"),
        ("translator", "http://spacesoftranslation.org/ns/people/t1"),
        ("translator_name", "Doe, Jane"),
        ("olang", "http://spacesoftranslation.org/ns/languages/de"),
        ("olangLabel", "German"),
        ("tlang", "http://spacesoftranslation.org/ns/languages/fr"),
        ("tlangLabel", "French"),
        ("genre", "prose"),
        ("issue", "http://spacesoftranslation.org/ns/issues/i1"),
        ("issue_id", "i1"),
        ("issue_label", "Issue 1"),
        ("number", "1"),
        ("pubDate", "1952"),
        ("magazine", "http://spacesoftranslation.org/ns/magazines/m1"),
        ("magazine_id", "m1"),
        ("magazine_label", "Merkur"),
    ])
}

#[tokio::test]
async fn test_languages_envelope() {
    let stub = StubEndpoint::new(vec![(
        "E56_Language",
        json!([
            row(&[("lang", "http://x/de"), ("label", "German"), ("key", "de")]),
            row(&[("lang", "http://x/fr"), ("label", "French"), ("key", "fr")]),
        ]),
    )]);
    let server = server_with(&stub).await;

    let response = server.get("/api/languages").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["label"], "German");
    assert_eq!(body["data"][1]["key"], "fr");
}

#[tokio::test]
async fn test_translations_page_markers() {
    let rows: Vec<Value> = (0..10).map(|i| translation(&format!("t{i}"))).collect();
    let stub = StubEndpoint::new(vec![("?translator_name", Value::Array(rows))]);
    let server = server_with(&stub).await;

    let response = server
        .get("/api/translations")
        .add_query_param("page", "2")
        .add_query_param("after_date", "1950")
        .add_query_param("sl", "any")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 10);
    assert_eq!(body["current_page"], 2);
    assert_eq!(body["next_page"], 3);
    assert_eq!(body["prev_page"], 1);
    assert_eq!(body["data"][0]["translator_name"], "Doe, Jane");
    assert_eq!(body["data"][0]["volume"], Value::Null);

    let queries = stub.queries();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].contains("FILTER(xsd:integer(?pubDate) > 1950)"));
    assert!(!queries[0].contains("?olang = "));
    assert!(queries[0].ends_with("OFFSET 10\nLIMIT 10"));
}

#[tokio::test]
async fn test_translations_form_search() {
    let stub = StubEndpoint::new(vec![(
        "?translator_name",
        json!([translation("t1"), translation("t2")]),
    )]);
    let server = server_with(&stub).await;

    let response = server
        .post("/api/translations")
        .form(&[("genre", "poetry"), ("sortby", "title"), ("page_size", "5")])
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["next_page"], Value::Null);
    assert_eq!(body["page_size"], 5);

    let queries = stub.queries();
    assert!(queries[0].contains("\"poetry\""));
    assert!(queries[0].contains("ORDER BY ?title ?magazine_id ?pubDate"));
    assert!(queries[0].ends_with("LIMIT 5"));
}

#[tokio::test]
async fn test_non_form_search_body_is_bad_request() {
    let stub = StubEndpoint::default();
    let server = server_with(&stub).await;

    let response = server
        .post("/api/translators")
        .json(&json!({ "genre": "poetry" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
    assert!(stub.queries().is_empty());
}

#[tokio::test]
async fn test_translations_count_header() {
    let stub = StubEndpoint::new(vec![(
        "?translator_name",
        json!([translation("t1"), translation("t2"), translation("t3")]),
    )]);
    let server = server_with(&stub).await;

    let response = server.method(Method::HEAD, "/api/translations").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("x-result-count").to_str().unwrap(),
        "3"
    );
    assert!(!stub.queries()[0].contains("LIMIT"));
}

#[tokio::test]
async fn test_translators_are_grouped() {
    let stub = StubEndpoint::new(vec![(
        "FILTER(?label != \"Anon.\")",
        json!([
            row(&[("translator", "t1"), ("label", "Doe, Jane"), ("genre", "poetry")]),
            row(&[("translator", "t1"), ("label", "Doe, Jane"), ("genre", "prose")]),
            row(&[("translator", "t2"), ("label", "Roe, Richard"), ("genre", "drama")]),
        ]),
    )]);
    let server = server_with(&stub).await;

    let response = server
        .get("/api/translators")
        .add_query_param("gender", "female")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], "t1");
    assert_eq!(body["data"][0]["genres"], json!(["poetry", "prose"]));
    assert_eq!(body["data"][1]["label"], "Roe, Richard");

    let queries = stub.queries();
    assert!(queries[0].contains("FILTER(?gender = \"female\")"));
    assert!(!queries[0].contains("LIMIT"));
}

#[tokio::test]
async fn test_translator_detail_defaults() {
    let stub = StubEndpoint::new(vec![
        (
            "?birthDate",
            json!([row(&[("label", "Doe, Jane"), ("gender", "female")])]),
        ),
        (
            "?authorLabel",
            json!([row(&[
                ("authorLabel", "Kafka"),
                ("olangLabel", "German"),
                ("tlangLabel", "French"),
                ("magLabel", "Merkur"),
                ("genre", "prose"),
            ])]),
        ),
    ]);
    let server = server_with(&stub).await;

    let response = server.get("/api/translators/p_1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["label"], "Doe, Jane");
    assert_eq!(body["gender"], "female");
    assert_eq!(body["birth_year"], "unknown");
    assert_eq!(body["nationalities"], json!(["unknown"]));
    assert_eq!(body["authors"], json!(["Kafka"]));
    assert_eq!(stub.queries().len(), 3);
}

#[tokio::test]
async fn test_unknown_magazine_is_not_found() {
    let stub = StubEndpoint::default();
    let server = server_with(&stub).await;

    let response = server.get("/api/magazines/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_invalid_author_id_is_not_found_without_querying() {
    let stub = StubEndpoint::default();
    let server = server_with(&stub).await;

    let response = server.get("/api/authors/a%3E%20%7D").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(stub.queries().is_empty());
}

#[tokio::test]
async fn test_issue_detail() {
    let stub = StubEndpoint::new(vec![
        (
            "SELECT DISTINCT ?issueLabel ?magazine",
            json!([row(&[
                ("issueLabel", "Merkur 1"),
                ("magazine", "http://spacesoftranslation.org/ns/magazines/merkur"),
                ("magLabel", "Merkur"),
                ("magId", "merkur"),
                ("issueNo", "1"),
                ("pubDate", "1947"),
            ])]),
        ),
        (
            "SELECT DISTINCT ?constituent ?title",
            json!([row(&[
                ("constituent", "c1"),
                ("title", "Der Prozess"),
                ("langLabel", "French"),
                ("translator", "t1"),
                ("name", "Doe, Jane"),
                ("genre", "prose"),
                ("author", "a1"),
                ("authorName", "Kafka, Franz"),
                ("olangLabel", "German"),
            ])]),
        ),
    ]);
    let server = server_with(&stub).await;

    let response = server.get("/api/issue/merkur-1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["info"]["id"], "merkur-1");
    assert_eq!(body["info"]["magazine_label"], "Merkur");
    assert_eq!(body["info"]["volume"], Value::Null);
    assert_eq!(body["constituents"][0]["translator_name"], "Doe, Jane");
}

#[tokio::test]
async fn test_health_probes() {
    let stub = StubEndpoint::default();
    let server = server_with(&stub).await;

    server.get("/health/live").await.assert_status_ok();

    let response = server.get("/health/ready").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unavailable_upstream_is_503() {
    let endpoint = spawn_endpoint(Router::new().route(
        "/sparql",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;
    let server = server_for(&endpoint).await;

    let response = server.get("/api/genres").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["code"], "E_SERVICE_UNAVAILABLE");

    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = server_with(&StubEndpoint::default()).await;

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["paths"]["/api/translations"].is_object());
    assert!(body["paths"]["/api/translators/{id}"].is_object());
    assert!(body["paths"]["/health/ready"].is_object());
}
