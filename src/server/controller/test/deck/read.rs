use super::*;

/// Tests fetching a deck that exists.
///
/// Expected: 200 with the deck under `data`
#[tokio::test]
async fn returns_existing_deck() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let deck = DeckFactory::new(db).name("Mono Red").build().await.unwrap();

    let (status, json) = send(&app, Method::GET, &format!("/decks/{}", deck.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], deck.id);
    assert_eq!(json["data"]["name"], "Mono Red");
    assert!(json["data"].get("planeswalker").is_none());
}

/// Tests a well-formed id that matches nothing.
///
/// Expected: 404 NOT_FOUND
#[tokio::test]
async fn unknown_id_is_not_found() {
    let (_test, app) = setup().await;

    let (status, json) = send(
        &app,
        Method::GET,
        "/decks/0123456789abcdef0123456789abcdef",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "NOT_FOUND");
}

/// Tests ids that are not 32 hexadecimal characters.
///
/// Expected: 400 VALIDATION_ERROR on `id`
#[tokio::test]
async fn malformed_id_is_rejected() {
    let (_test, app) = setup().await;

    for id in ["123", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
        let (status, json) = send(&app, Method::GET, &format!("/decks/{}", id), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "id {}", id);
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["details"][0]["field"], "id");
    }
}
