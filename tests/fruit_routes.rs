mod common;

use axum::http::StatusCode;
use fruits::{Fruit, FruitStore};
use serde_json::{json, Value};
use uuid::Uuid;

use common::test_server;

fn location(response: &axum_test::TestResponse) -> String {
    response.header("location").to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_liveness() {
    let (server, _) = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "your server is running... better catch it.");
}

#[tokio::test]
async fn test_seed_returns_five_records() {
    let (server, store) = test_server();
    server
        .post("/fruits")
        .form(&json!({ "name": "Old", "color": "grey", "readyToEat": "on" }))
        .await;

    let response = server.get("/fruits/seed").await;
    response.assert_status_ok();

    let fruits: Vec<Fruit> = response.json();
    let triples: Vec<(String, String, bool)> = fruits
        .into_iter()
        .map(|f| (f.name, f.color, f.ready_to_eat))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("Orange".to_string(), "orange".to_string(), false),
            ("Grape".to_string(), "purple".to_string(), false),
            ("Banana".to_string(), "orange".to_string(), false),
            ("Strawberry".to_string(), "red".to_string(), false),
            ("Coconut".to_string(), "brown".to_string(), false),
        ]
    );
    assert_eq!(store.len().await, 5);

    let raw: Value = server.get("/fruits/seed").await.json();
    assert_eq!(raw.as_array().map(Vec::len), Some(5));
    assert_eq!(raw[0]["readyToEat"], false);
    assert_eq!(store.len().await, 5);
}

#[tokio::test]
async fn test_create_redirects_and_lists_new_fruit() {
    let (server, store) = test_server();

    let response = server
        .post("/fruits")
        .form(&json!({ "name": "Kiwi", "color": "green", "readyToEat": "on" }))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/fruits");

    let stored = store.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Kiwi");
    assert!(stored[0].ready_to_eat);

    let list = server.get("/fruits").await;
    list.assert_status_ok();
    assert!(list.text().contains("Kiwi"));
}

#[tokio::test]
async fn test_create_without_checkbox_is_not_ready() {
    let (server, store) = test_server();

    for body in [
        json!({ "name": "Fig", "color": "purple" }),
        json!({ "name": "Lime", "color": "green", "readyToEat": "" }),
        json!({ "name": "Plum", "color": "purple", "readyToEat": "off" }),
    ] {
        server
            .post("/fruits")
            .form(&body)
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    let stored = store.find_all().await.unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|f| !f.ready_to_eat));
}

#[tokio::test]
async fn test_new_form() {
    let (server, _) = test_server();

    let response = server.get("/fruits/new").await;
    response.assert_status_ok();
    assert!(response.text().contains(r#"action="/fruits" method="POST""#));
}

#[tokio::test]
async fn test_show_and_edit_form() {
    let (server, _) = test_server();
    let seeded: Vec<Fruit> = server.get("/fruits/seed").await.json();
    let grape = &seeded[1];

    let show = server.get(&format!("/fruits/{}", grape.id)).await;
    show.assert_status_ok();
    assert!(show.text().contains("The Grape is purple."));

    let edit = server.get(&format!("/fruits/{}/edit", grape.id)).await;
    edit.assert_status_ok();
    assert!(edit.text().contains(r#"value="Grape""#));
}

#[tokio::test]
async fn test_absent_id_renders_empty_page() {
    let (server, _) = test_server();
    let absent = Uuid::new_v4();

    let show = server.get(&format!("/fruits/{}", absent)).await;
    show.assert_status_ok();
    assert!(show.text().contains("No fruit found."));

    let edit = server.get(&format!("/fruits/{}/edit", absent)).await;
    edit.assert_status_ok();
    assert!(edit.text().contains("No fruit found."));
}

#[tokio::test]
async fn test_update_without_checkbox_persists_false() {
    let (server, store) = test_server();
    server
        .post("/fruits")
        .form(&json!({ "name": "Kiwi", "color": "brown", "readyToEat": "on" }))
        .await;
    let id = store.find_all().await.unwrap()[0].id;

    let response = server
        .put(&format!("/fruits/{}", id))
        .form(&json!({ "name": "Kiwi", "color": "green" }))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/fruits");

    let updated = store.find_by_id(&id.to_string()).await.unwrap().unwrap();
    assert_eq!(updated.color, "green");
    assert!(!updated.ready_to_eat);
}

#[tokio::test]
async fn test_delete_removes_one_record() {
    let (server, store) = test_server();
    let seeded: Vec<Fruit> = server.get("/fruits/seed").await.json();
    let banana = &seeded[2];

    let response = server.delete(&format!("/fruits/{}", banana.id)).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(store.len().await, 4);

    let show = server.get(&format!("/fruits/{}", banana.id)).await;
    assert!(show.text().contains("No fruit found."));
    assert!(!server.get("/fruits").await.text().contains("Banana"));
}

#[tokio::test]
async fn test_malformed_id_returns_json_error() {
    let (server, _) = test_server();

    let show = server.get("/fruits/not-an-id").await;
    show.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = show.json();
    assert_eq!(body["error"]["kind"], "MALFORMED_ID");
    assert_eq!(body["code"], 400);

    let update = server
        .put("/fruits/not-an-id")
        .form(&json!({ "name": "Kiwi", "color": "green" }))
        .await;
    update.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(update.json::<Value>()["error"]["kind"], "MALFORMED_ID");

    let delete = server.delete("/fruits/not-an-id").await;
    delete.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(delete.json::<Value>()["error"]["kind"], "MALFORMED_ID");

    let edit = server.get("/fruits/12345/edit").await;
    edit.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let (server, _) = test_server();

    let response = server.get("/styles.css").await;
    response.assert_status_ok();
    assert!(response.text().contains("font-family"));

    server
        .get("/missing.txt")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
