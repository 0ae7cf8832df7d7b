use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use cinefinder_api::api::{create_router, AppState};

fn create_test_server() -> TestServer {
    let state = AppState::default();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let session: Value = response.json();
    session["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["catalog"], "sample");
}

#[tokio::test]
async fn test_new_session_has_empty_tables() {
    let server = create_test_server();
    let id = create_session(&server).await;

    let results: Value = server.get(&format!("/sessions/{}/results", id)).await.json();
    assert_eq!(results, json!({ "status": "empty" }));

    let favorites: Value = server.get(&format!("/sessions/{}/favorites", id)).await.json();
    assert_eq!(favorites, json!({ "status": "empty" }));
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let server = create_test_server();
    let response = server
        .get("/sessions/00000000-0000-0000-0000-000000000000/results")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_replaces_results() {
    let server = create_test_server();
    let id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{}/search", id))
        .json(&json!({ "by": "title", "query": "Inception", "limit": 2 }))
        .await;
    response.assert_status_ok();
    let table: Value = response.json();
    assert_eq!(table["status"], "rows");
    assert_eq!(table["rows"].as_array().unwrap().len(), 2);
    assert_eq!(table["rows"][0]["title"], "全面啟動");
    assert_eq!(table["rows"][0]["trailer"], "N/A");

    // Actor search in demo mode yields nothing and clears the previous results
    let response = server
        .post(&format!("/sessions/{}/search", id))
        .json(&json!({ "by": "actor", "name": "Tom Hanks" }))
        .await;
    response.assert_status_ok();
    let table: Value = response.json();
    assert_eq!(table, json!({ "status": "empty" }));
}

#[tokio::test]
async fn test_invalid_search_keeps_previous_results() {
    let server = create_test_server();
    let id = create_session(&server).await;

    server
        .post(&format!("/sessions/{}/search", id))
        .json(&json!({ "by": "genre", "genre": "comedy" }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/sessions/{}/search", id))
        .json(&json!({ "by": "region", "countries": ["Atlantis"] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let table: Value = server.get(&format!("/sessions/{}/results", id)).await.json();
    assert_eq!(table["rows"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_favorites_flow() {
    let server = create_test_server();
    let id = create_session(&server).await;

    server
        .post(&format!("/sessions/{}/search", id))
        .json(&json!({ "by": "multi", "genres": ["drama"], "countries": ["韓國"] }))
        .await
        .assert_status_ok();

    // Add position 2 with a rating
    let response = server
        .post(&format!("/sessions/{}/favorites", id))
        .json(&json!({ "position": 2, "rating": 9 }))
        .await;
    response.assert_status_ok();
    let added: Value = response.json();
    assert_eq!(added["status"], "added");
    assert_eq!(added["movie_id"], 3);

    // Adding the same movie again is reported, not duplicated
    let response = server
        .post(&format!("/sessions/{}/favorites", id))
        .json(&json!({ "position": 2 }))
        .await;
    let again: Value = response.json();
    assert_eq!(again["status"], "already_present");

    // Out of range position
    server
        .post(&format!("/sessions/{}/favorites", id))
        .json(&json!({ "position": 42 }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post(&format!("/sessions/{}/favorites", id))
        .json(&json!({ "position": 0 }))
        .await
        .assert_status_ok();

    let favorites: Value = server.get(&format!("/sessions/{}/favorites", id)).await.json();
    let rows = favorites["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "寄生上流");
    assert_eq!(rows[0]["rating"], "9");
    assert_eq!(rows[1]["title"], "全面啟動");
    assert_eq!(rows[1]["rating"], "未評分");

    // Rate, then remove by title
    server
        .put(&format!("/sessions/{}/favorites/1/rating", id))
        .json(&json!({ "rating": 7 }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/sessions/{}/favorites", id))
        .add_query_param("title", " 寄生上流 ")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/sessions/{}/favorites", id))
        .add_query_param("title", "Inception")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let favorites: Value = server.get(&format!("/sessions/{}/favorites", id)).await.json();
    let rows = favorites["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["movie_id"], 1);
    assert_eq!(rows[0]["rating"], "7");
}

#[tokio::test]
async fn test_mood_recommendation() {
    let server = create_test_server();
    let id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{}/recommendations", id))
        .json(&json!({ "text": "今天好累又焦慮" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "stressed");
    assert_eq!(body["detected"], true);
    assert_eq!(body["genres"], json!(["喜劇", "動畫"]));
    // Sample data repeats per genre; duplicates are merged
    assert_eq!(body["results"]["rows"].as_array().unwrap().len(), 5);

    let response = server
        .post(&format!("/sessions/{}/recommendations", id))
        .json(&json!({ "text": "" }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["mood"], "happy");
    assert_eq!(body["detected"], false);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let server = create_test_server();
    let first = create_session(&server).await;
    let second = create_session(&server).await;

    server
        .post(&format!("/sessions/{}/search", first))
        .json(&json!({ "by": "title", "query": "any" }))
        .await
        .assert_status_ok();

    let table: Value = server.get(&format!("/sessions/{}/results", second)).await.json();
    assert_eq!(table, json!({ "status": "empty" }));

    server
        .delete(&format!("/sessions/{}", first))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/sessions/{}", first))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_vocabularies() {
    let server = create_test_server();

    let genres: Vec<Value> = server.get("/catalog/genres").await.json();
    assert_eq!(genres.len(), 18);
    assert_eq!(genres[3], json!({ "id": "comedy", "label": "喜劇" }));

    let regions: Vec<Value> = server.get("/catalog/regions").await.json();
    assert_eq!(regions.len(), 5);

    let moods: Vec<Value> = server.get("/catalog/moods").await.json();
    assert_eq!(moods.len(), 6);
    assert_eq!(moods[0]["label"], "開心");
}
