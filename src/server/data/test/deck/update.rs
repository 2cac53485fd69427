use super::*;

/// Tests a partial update.
///
/// Verifies that supplied fields change, other fields keep their values, `id` and
/// `createdAt` are untouched and `updatedAt` strictly increases.
///
/// Expected: Ok(Some) with merged deck
#[tokio::test]
async fn merges_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let created = repo.create(draft("Elf Ball")).await?;

    let updated = repo
        .update(
            &created.id,
            &UpdateDeckParams {
                tier_rating: Some(TierRating::S),
                is_complete: Some(false),
                planeswalker: Some(Some("Nissa".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Elf Ball");
    assert_eq!(updated.tier_rating, TierRating::S);
    assert!(!updated.is_complete);
    assert_eq!(updated.planeswalker.as_deref(), Some("Nissa"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    assert_eq!(repo.find_by_id(&created.id).await?, Some(updated));

    Ok(())
}

/// Tests that consecutive updates keep increasing `updatedAt`.
///
/// Expected: Ok with strictly increasing timestamps
#[tokio::test]
async fn updated_at_strictly_increases() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let created = repo.create(draft("Quick Edits")).await?;

    let mut previous = created.updated_at;
    for location in ["Box 1", "Box 2", "Box 3"] {
        let updated = repo
            .update(
                &created.id,
                &UpdateDeckParams {
                    storage_location: Some(location.to_string()),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();
        assert!(updated.updated_at > previous);
        previous = updated.updated_at;
    }

    Ok(())
}

/// Tests renaming a deck to a name held by another deck.
///
/// Expected: Err(AppError::Conflict) and the deck keeps its name
#[tokio::test]
async fn rejects_rename_to_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    repo.create(draft("Burn")).await?;
    let other = repo.create(draft("Zoo")).await?;

    let result = repo
        .update(
            &other.id,
            &UpdateDeckParams {
                name: Some("BURN".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.find_by_id(&other.id).await?.unwrap().name, "Zoo");

    Ok(())
}

/// Tests that changing only the case of a deck's own name is allowed.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn allows_renaming_to_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let created = repo.create(draft("Burn")).await?;

    let updated = repo
        .update(
            &created.id,
            &UpdateDeckParams {
                name: Some("burn".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.map(|d| d.name), Some("Burn".to_string()));

    Ok(())
}

/// Tests that the merged deck is validated before it is written.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_invalid_merge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let created = repo.create(draft("Valid Deck")).await?;

    let result = repo
        .update(
            &created.id,
            &UpdateDeckParams {
                colors: Some(vec![]),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(err)) if err.has_field("colors")));

    Ok(())
}

/// Tests updating a deck that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let result = repo
        .update(
            "ffffffffffffffffffffffffffffffff",
            &UpdateDeckParams {
                is_complete: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
