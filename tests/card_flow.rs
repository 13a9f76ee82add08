mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use uuid::Uuid;

#[tokio::test]
async fn test_card_creation_flow_success() {
    println!("\n\n[+] Running test: test_card_creation_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _) = client.create_test_user(None, "business").await;
    let card_data = test_data::sample_card_with_owner(Some(owner_id));

    println!("[>] Sending request to create card: {}", card_data.title);
    let req = test::TestRequest::post()
        .uri("/api/cards")
        .set_json(&card_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"].as_str().unwrap(), card_data.title);
    assert!(body["address"]["city"].is_string());
    assert!(body.get("image").is_some());
    assert_eq!(body["userId"].as_str().unwrap(), owner_id.to_string());

    println!("[>] Verifying card persisted.");
    let cards = ctx.db.list_cards().await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].owner_id, Some(owner_id));
    println!("[/] Test passed: card creation persists the document.");
}

#[tokio::test]
async fn test_card_creation_missing_field_persists_nothing() {
    println!("\n\n[+] Running test: test_card_creation_missing_field_persists_nothing");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // description left out entirely
    let req = test::TestRequest::post()
        .uri("/api/cards")
        .set_json(serde_json::json!({
            "title": "Test Business",
            "subtitle": "Quality since 1999",
            "phone": "0521234567",
            "email": "biz@example.com",
            "address": {
                "country": "Israel",
                "city": "Haifa",
                "street": "HaNamal",
                "houseNumber": 3
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] Sending a card that fails schema validation.");
    let mut short_title = test_data::sample_card();
    short_title.title = "X".to_string();
    let req = test::TestRequest::post()
        .uri("/api/cards")
        .set_json(&short_title)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let cards = ctx.db.list_cards().await.unwrap();
    assert!(cards.is_empty(), "rejected cards must not be persisted");
    println!("[/] Test passed: invalid creation touches nothing.");
}

#[tokio::test]
async fn test_card_listing_and_detail() {
    println!("\n\n[+] Running test: test_card_listing_and_detail");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let card = client.create_test_card(None).await;

    println!("[>] Listing cards.");
    let req = test::TestRequest::get().uri("/api/cards").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let cards = body.as_array().expect("expected a JSON array");
    assert_eq!(cards.len(), 1);
    assert!(cards[0]["address"].is_object());
    assert!(cards[0].get("image").is_some());

    println!("[>] Fetching the card detail.");
    let req = test::TestRequest::get()
        .uri(&format!("/api/cards/{}", card.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_str().unwrap(), card.id.to_string());

    println!("[>] Fetching an unknown id.");
    let req = test::TestRequest::get()
        .uri(&format!("/api/cards/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    println!("[>] Fetching a malformed id.");
    let req = test::TestRequest::get()
        .uri("/api/cards/not-a-real-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: listing and detail behave per contract.");
}

#[tokio::test]
async fn test_my_cards_flow() {
    println!("\n\n[+] Running test: test_my_cards_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None, "business").await;
    let (other_id, _) = client.create_test_user(None, "business").await;

    client.create_test_card(Some(owner_id)).await;
    client.create_test_card(Some(owner_id)).await;
    client.create_test_card(Some(other_id)).await;
    client.create_test_card(None).await;

    println!("[>] Fetching my-cards without a token.");
    let req = test::TestRequest::get().uri("/api/cards/my-cards").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    println!("[>] Fetching my-cards as the owner.");
    let req = test::TestRequest::get()
        .uri("/api/cards/my-cards")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    println!("[/] Test passed: my-cards returns exactly the caller's cards.");
}

#[tokio::test]
async fn test_card_favorite_flow_deduplicates() {
    println!("\n\n[+] Running test: test_card_favorite_flow_deduplicates");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, user_token) = client.create_test_user(None, "regular").await;
    let card = client.create_test_card(None).await;

    println!("[>] Favoriting the card.");
    let req = test::TestRequest::patch()
        .uri(&format!("/api/cards/{}", card.id))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let favorites = body["favoritedBy"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].as_str().unwrap(), user_id.to_string());

    println!("[>] Favoriting the same card again.");
    let req = test::TestRequest::patch()
        .uri(&format!("/api/cards/{}", card.id))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["favoritedBy"].as_array().unwrap().len(),
        1,
        "favorite set must stay deduplicated"
    );

    let favorites = ctx.db.card_favorites(&card.id).await.unwrap();
    assert_eq!(favorites, vec![user_id]);

    println!("[>] Favoriting an unknown card.");
    let req = test::TestRequest::patch()
        .uri(&format!("/api/cards/{}", Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: favoriting is idempotent.");
}

#[tokio::test]
async fn test_card_update_flow_ownership() {
    println!("\n\n[+] Running test: test_card_update_flow_ownership");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None, "business").await;
    let (_other_id, other_token) = client.create_test_user(None, "regular").await;
    let card = client.create_test_card(Some(owner_id)).await;

    let mut updated = test_data::sample_card_with_owner(Some(owner_id));
    updated.title = "Renamed Business".to_string();

    println!("[>] Updating as a non-owner.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/cards/{}", card.id))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .set_json(&updated)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    println!("[>] Updating as the owner.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/cards/{}", card.id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(&updated)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"].as_str().unwrap(), "Renamed Business");

    let stored = ctx.db.get_card_by_id(&card.id).await.unwrap();
    assert_eq!(stored.title, "Renamed Business");
    assert_eq!(stored.owner_id, Some(owner_id), "PUT must not move ownership");
    println!("[/] Test passed: updates are owner-or-admin only.");
}

#[tokio::test]
async fn test_card_delete_flow() {
    println!("\n\n[+] Running test: test_card_delete_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None, "business").await;
    let card = client.create_test_card(Some(owner_id)).await;

    println!("[>] Deleting the card as its owner.");
    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{}", card.id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_str().unwrap(), card.id.to_string());

    println!("[>] Deleting the same id again.");
    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{}", card.id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: delete removes the card once, then 404.");
}
