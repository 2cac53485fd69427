use super::*;

/// Tests creating a deck from a validated draft.
///
/// Verifies that the repository assigns a 32 character hex id, sets both timestamps
/// to the same instant and stores the normalized fields.
///
/// Expected: Ok with deck created
#[tokio::test]
async fn creates_deck_with_server_assigned_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let deck = repo.create(draft("lightning aggro")).await?;

    assert_eq!(deck.id.len(), 32);
    assert!(deck.id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(deck.name, "Lightning Aggro");
    assert_eq!(deck.colors, vec![Color::Red, Color::Green]);
    assert_eq!(deck.created_at, deck.updated_at);

    let stored = entity::prelude::Deck::find_by_id(deck.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name_key, "lightning aggro");
    assert_eq!(stored.colors, r#"["R","G"]"#);
    assert_eq!(stored.tier_rating, "A");

    Ok(())
}

/// Tests that name uniqueness ignores case.
///
/// Verifies that the unique index on the case-folded name rejects a second deck whose
/// name differs only in case, and that no row is added.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name_in_any_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    repo.create(draft("Lightning Aggro")).await?;

    let result = repo.create(draft("LIGHTNING   aggro")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(row_count(db).await, 1);

    Ok(())
}

/// Tests that the conflict is detected against rows written outside the repository.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_name_taken_by_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    DeckFactory::new(db).name("Mono Blue Tempo").build().await?;

    let repo = DeckRepository::new(db.clone());
    let result = repo.create(draft("mono blue tempo")).await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("Mono Blue Tempo")));

    Ok(())
}
