use super::*;

/// Tests deleting an existing deck.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = DeckFactory::new(db).build().await?;
    let keep = DeckFactory::new(db).build().await?;

    let repo = DeckRepository::new(db.clone());
    assert!(repo.delete(&row.id).await?);

    assert_eq!(repo.find_by_id(&row.id).await?, None);
    assert!(repo.find_by_id(&keep.id).await?.is_some());
    assert_eq!(row_count(db).await, 1);

    Ok(())
}

/// Tests deleting a missing deck.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_nothing_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());

    assert!(!repo.delete("ffffffffffffffffffffffffffffffff").await?);
    assert!(!repo.delete("bogus").await?);

    Ok(())
}
