use super::*;

/// Tests filtering combined with sorting by name.
///
/// Expected: only S tier aggro decks, alphabetical
#[tokio::test]
async fn filters_and_sorts_by_name() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let zeta = DeckFactory::new(db).name("Zeta Burn").tier_rating("S").build().await.unwrap();
    let alpha = DeckFactory::new(db).name("Alpha Rush").tier_rating("S").build().await.unwrap();
    DeckFactory::new(db)
        .name("Mid Combo")
        .tier_rating("S")
        .deck_type("COMBO")
        .build()
        .await
        .unwrap();
    DeckFactory::new(db).name("Beta Aggro").tier_rating("A").build().await.unwrap();

    let (status, json) = send(
        &app,
        Method::GET,
        "/decks?tierRating=S&deckType=AGGRO&sortBy=name&sortOrder=asc",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![alpha.id, zeta.id]);
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["pagination"]["totalPages"], 1);
}

/// Tests requesting a page past the last one.
///
/// Expected: empty `data` with the real total
#[tokio::test]
async fn page_beyond_last_is_empty() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    for _ in 0..3 {
        DeckFactory::new(db).build().await.unwrap();
    }

    let (status, json) = send(&app, Method::GET, "/decks?page=5&limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["pagination"]["page"], 5);
    assert_eq!(json["pagination"]["limit"], 2);
    assert_eq!(json["pagination"]["total"], 3);
    assert_eq!(json["pagination"]["totalPages"], 2);
}

/// Tests out-of-range and unparseable paging values.
///
/// Expected: defaults of page 1 and limit 10
#[tokio::test]
async fn paging_falls_back_to_defaults() {
    let (_test, app) = setup().await;

    for uri in ["/decks?limit=500&page=0", "/decks?limit=abc&page=-3", "/decks?limit=&page="] {
        let (status, json) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::OK, "uri {}", uri);
        assert_eq!(json["pagination"]["page"], 1);
        assert_eq!(json["pagination"]["limit"], 10);
        assert_eq!(json["pagination"]["totalPages"], 0);
    }
}

/// Tests the default ordering of newest first.
///
/// Expected: decks ordered by `createdAt` descending
#[tokio::test]
async fn defaults_to_newest_first() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let now = chrono::Utc::now();

    let old = DeckFactory::new(db)
        .created_at(now - chrono::Duration::hours(2))
        .build()
        .await
        .unwrap();
    let new = DeckFactory::new(db).created_at(now).build().await.unwrap();
    let mid = DeckFactory::new(db)
        .created_at(now - chrono::Duration::hours(1))
        .build()
        .await
        .unwrap();

    let (_, json) = send(&app, Method::GET, "/decks", None).await;

    assert_eq!(ids(&json), vec![new.id, mid.id, old.id]);
}

/// Tests unknown sort options and filter values.
///
/// Expected: 400 VALIDATION_ERROR naming each parameter
#[tokio::test]
async fn rejects_unknown_sort_and_filter_values() {
    let (_test, app) = setup().await;

    let (status, json) = send(
        &app,
        Method::GET,
        "/decks?sortBy=power&sortOrder=sideways&deckType=MIDRANGE",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    let fields: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["deckType", "sortBy", "sortOrder"]);
}
