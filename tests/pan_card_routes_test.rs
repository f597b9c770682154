//! PAN card route integration tests

mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};
use serial_test::serial;

use helpers::{send, send_with_content_type, TestApp};

fn pan_card(name: &str, number: &str, owner: &str) -> Value {
    json!({
        "name": name,
        "panNumber": number,
        "dob": "1999-04-12",
        "createdBy": owner
    })
}

async fn create_and_find_id(app: &TestApp, name: &str, number: &str, owner: &str) -> i64 {
    let (status, _) = app.post("/addPanCard", pan_card(name, number, owner)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, cards) = app.get(&format!("/viewPanCards?email={}", owner)).await;
    cards
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["pan_number"] == number)
        .and_then(|c| c["id"].as_i64())
        .expect("created PAN card should be listed")
}

#[tokio::test]
#[serial]
async fn test_add_pan_card() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/addPanCard", pan_card("Asha Rao", "ABCDE1234F", "alice@x.com")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "PAN Card added successfully" }));
}

#[tokio::test]
#[serial]
async fn test_add_pan_card_ignores_content_type() {
    let app = TestApp::new().await;
    let body = pan_card("Asha Rao", "ABCDE1234F", "alice@x.com").to_string();

    let (status, _) = send_with_content_type(
        &app.router,
        "POST",
        "/addPanCard",
        Some(body),
        Some("application/x-www-form-urlencoded"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.db.count_records("pan_cards").await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn test_duplicate_pan_number_for_same_owner_conflicts() {
    let app = TestApp::new().await;

    let (first, _) = app.post("/addPanCard", pan_card("Asha Rao", "ABCDE1234F", "alice@x.com")).await;
    let (second, body) = app.post("/addPanCard", pan_card("A. Rao", "ABCDE1234F", "alice@x.com")).await;
    let (other_owner, _) = app.post("/addPanCard", pan_card("Bo", "ABCDE1234F", "bob@x.com")).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "PAN number already exists for this user" }));
    assert_eq!(other_owner, StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn test_concurrent_duplicate_pan_creates_have_one_winner() {
    let app = TestApp::new().await;
    let body = pan_card("Asha Rao", "ABCDE1234F", "alice@x.com").to_string();

    let (a, b) = tokio::join!(
        send(&app.router, "POST", "/addPanCard", Some(body.clone())),
        send(&app.router, "POST", "/addPanCard", Some(body.clone())),
    );

    let mut statuses = vec![a.0, b.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);
    assert_eq!(app.db.count_records("pan_cards").await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn test_add_pan_card_with_invalid_date_is_bad_request() {
    let app = TestApp::new().await;
    let mut body = pan_card("Asha Rao", "ABCDE1234F", "alice@x.com");
    body["dob"] = json!("not-a-date");

    let (status, _) = app.post("/addPanCard", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.db.count_records("pan_cards").await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_view_pan_cards_requires_email() {
    let app = TestApp::new().await;
    app.post("/addPanCard", pan_card("Asha Rao", "ABCDE1234F", "alice@x.com")).await;

    for uri in ["/viewPanCards", "/viewPanCards?email="] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "User email is required" }));
    }
}

#[tokio::test]
#[serial]
async fn test_view_pan_cards_is_scoped_to_owner() {
    let app = TestApp::new().await;
    app.post("/addPanCard", pan_card("Asha Rao", "ABCDE1234F", "alice@x.com")).await;
    app.post("/addPanCard", pan_card("Bo Li", "ZZZZZ9999Z", "bob@x.com")).await;

    let (status, body) = app.get("/viewPanCards?email=alice@x.com").await;

    assert_eq!(status, StatusCode::OK);
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["pan_number"], "ABCDE1234F");
    assert_eq!(cards[0]["dob"], "1999-04-12");
    assert_eq!(cards[0]["created_by"], "alice@x.com");
}

#[tokio::test]
#[serial]
async fn test_find_pan_card() {
    let app = TestApp::new().await;
    let id = create_and_find_id(&app, "Asha Rao", "ABCDE1234F", "alice@x.com").await;

    let (status, body) = app.get(&format!("/findPanCard/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": id,
            "name": "Asha Rao",
            "pan_number": "ABCDE1234F",
            "dob": "1999-04-12",
            "created_by": "alice@x.com"
        })
    );

    let (status, body) = app.get("/findPanCard/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "PAN Card not found" }));
}

#[tokio::test]
#[serial]
async fn test_edit_pan_card_changes_only_supplied_fields() {
    let app = TestApp::new().await;
    let id = create_and_find_id(&app, "Asha Rao", "ABCDE1234F", "alice@x.com").await;

    let (status, body) = app.put(&format!("/editPanCard/{}", id), json!({ "dob": "2000-01-31" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "PAN Card updated successfully" }));

    let (_, card) = app.get(&format!("/findPanCard/{}", id)).await;
    assert_eq!(card["dob"], "2000-01-31");
    assert_eq!(card["name"], "Asha Rao");
    assert_eq!(card["pan_number"], "ABCDE1234F");
    assert_eq!(card["created_by"], "alice@x.com");
}

#[tokio::test]
#[serial]
async fn test_edit_pan_card_rejects_ownership_change() {
    let app = TestApp::new().await;
    let id = create_and_find_id(&app, "Asha Rao", "ABCDE1234F", "alice@x.com").await;

    let (status, _) = app
        .put(&format!("/editPanCard/{}", id), json!({ "createdBy": "mallory@x.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn test_edit_missing_pan_card_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.put("/editPanCard/9999", json!({ "name": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "PAN Card not found" }));

    let (status, body) = app
        .put("/editPanCard/9999", json!({ "createdBy": "mallory@x.com" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "PAN Card not found" }));
}

#[tokio::test]
#[serial]
async fn test_delete_pan_card_then_find_is_not_found() {
    let app = TestApp::new().await;
    let id = create_and_find_id(&app, "Asha Rao", "ABCDE1234F", "alice@x.com").await;

    let (status, body) = app.delete(&format!("/deletePanCard/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "PAN Card deleted successfully" }));

    let (status, _) = app.get(&format!("/findPanCard/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/deletePanCard/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
