use super::*;

/// Tests keyword search ranking.
///
/// Expected: name matches rank above description matches; non-matches are excluded
#[tokio::test]
async fn search_ranks_name_matches_first() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let described = DeckFactory::new(db)
        .name("Red Deck Wins")
        .description("Lots of goblin tokens")
        .build()
        .await
        .unwrap();
    let named = DeckFactory::new(db).name("Goblin Rush").build().await.unwrap();
    DeckFactory::new(db).name("Elf Ball").build().await.unwrap();

    let (status, json) = send(&app, Method::GET, "/decks/search/keyword?keyword=goblin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![named.id, described.id]);
}

/// Tests a missing or blank keyword.
///
/// Expected: 400 VALIDATION_ERROR on `keyword`
#[tokio::test]
async fn search_requires_keyword() {
    let (_test, app) = setup().await;

    for uri in ["/decks/search/keyword", "/decks/search/keyword?keyword=%20%20"] {
        let (status, json) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(json["details"][0]["field"], "keyword");
    }
}

/// Tests the incomplete deck listing.
///
/// Expected: only decks with `isComplete == false`
#[tokio::test]
async fn lists_incomplete_decks() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let pending = DeckFactory::new(db).is_complete(false).build().await.unwrap();
    DeckFactory::new(db).is_complete(true).build().await.unwrap();

    let (status, json) = send(&app, Method::GET, "/decks/filter/incomplete", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![pending.id]);
}

/// Tests the storage location lookup.
///
/// Expected: case-insensitive substring match, blank location rejected
#[tokio::test]
async fn finds_decks_by_location() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let binder = DeckFactory::new(db).storage_location("Blue Binder").build().await.unwrap();
    DeckFactory::new(db).storage_location("Shoebox").build().await.unwrap();

    let (status, json) = send(&app, Method::GET, "/decks/location/binder", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![binder.id]);

    let (status, json) = send(&app, Method::GET, "/decks/location/%25", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));

    let (_, json) = send(&app, Method::GET, "/decks?storageLocation=_", None).await;
    assert_eq!(json["pagination"]["total"], 0);

    let (status, json) = send(&app, Method::GET, "/decks/location/%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["field"], "location");
}

/// Tests the tier and type lookups.
///
/// Expected: exact matches; unknown symbols rejected
#[tokio::test]
async fn finds_decks_by_tier_and_type() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let combo = DeckFactory::new(db)
        .tier_rating("S")
        .deck_type("COMBO")
        .build()
        .await
        .unwrap();
    let aggro = DeckFactory::new(db).tier_rating("C").build().await.unwrap();

    let (_, json) = send(&app, Method::GET, "/decks/tier/S", None).await;
    assert_eq!(ids(&json), vec![combo.id.clone()]);

    let (_, json) = send(&app, Method::GET, "/decks/type/AGGRO", None).await;
    assert_eq!(ids(&json), vec![aggro.id]);

    let (status, json) = send(&app, Method::GET, "/decks/tier/SS", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["field"], "tierRating");

    let (status, _) = send(&app, Method::GET, "/decks/type/aggro", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests the any-of color lookup.
///
/// Expected: decks containing at least one requested color
#[tokio::test]
async fn finds_decks_by_any_color() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let azorius = DeckFactory::new(db).colors(&["W", "U"]).build().await.unwrap();
    let simic = DeckFactory::new(db).colors(&["G", "U"]).build().await.unwrap();
    DeckFactory::new(db).colors(&["B"]).build().await.unwrap();

    let (status, json) = send(&app, Method::GET, "/decks/filter/colors?colors=W,G", None).await;

    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&json);
    found.sort();
    let mut expected = vec![azorius.id, simic.id];
    expected.sort();
    assert_eq!(found, expected);

    let (status, _) = send(&app, Method::GET, "/decks/filter/colors", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests counting with and without filters.
///
/// Expected: `{ "count": n }` matching the filter
#[tokio::test]
async fn counts_decks() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    DeckFactory::new(db).is_complete(false).build().await.unwrap();
    DeckFactory::new(db).build().await.unwrap();
    DeckFactory::new(db).build().await.unwrap();

    let (status, json) = send(&app, Method::GET, "/decks/stats/count", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 3);

    let (_, json) = send(&app, Method::GET, "/decks/stats/count?isComplete=false&page=9", None).await;
    assert_eq!(json["data"]["count"], 1);

    let (status, _) = send(&app, Method::GET, "/decks/stats/count?isComplete=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests the health endpoint.
///
/// Expected: 200 with the running message
#[tokio::test]
async fn health_reports_running() {
    let (_test, app) = setup().await;

    let (status, json) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Deck API is running");
}

/// Tests that the OpenAPI document is served and lists the deck routes.
///
/// Expected: 200 with `/decks` and `/decks/{id}` paths
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, json) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"].get("/decks").is_some());
    assert!(json["paths"].get("/decks/{id}").is_some());
    assert!(json["paths"].get("/health").is_some());
}
