use super::*;

/// Tests that a name match outranks a description-only match.
///
/// The description-only deck is newer, so it would come first if results were only
/// ordered by creation time.
///
/// Expected: Ok with the name match first
#[tokio::test]
async fn ranks_name_match_above_description_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let by_name = DeckFactory::new(db)
        .name("Goblin Rush")
        .description("Fast and red")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let by_description = DeckFactory::new(db)
        .name("Red Deck Wins")
        .description("Plenty of goblins")
        .created_at(now)
        .build()
        .await?;
    DeckFactory::new(db)
        .name("Elves")
        .description("Green ramp")
        .build()
        .await?;

    let repo = DeckRepository::new(db.clone());
    let results = repo.search("GOBLIN").await?;

    assert_eq!(
        results.into_iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![by_name.id, by_description.id]
    );

    Ok(())
}

/// Tests that planeswalker matches score between name and description matches.
///
/// Expected: Ok ordered name, planeswalker, description
#[tokio::test]
async fn ranks_planeswalker_between_name_and_description() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let description = DeckFactory::new(db)
        .name("Superfriends")
        .description("Every jace ever printed")
        .build()
        .await?;
    let planeswalker = DeckFactory::new(db)
        .name("Blue Tempo")
        .planeswalker(Some("Jace Beleren"))
        .build()
        .await?;
    let name = DeckFactory::new(db).name("Jace Control").build().await?;

    let repo = DeckRepository::new(db.clone());
    let results = repo.search("jace").await?;

    assert_eq!(
        results.into_iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![name.id, planeswalker.id, description.id]
    );

    Ok(())
}

/// Tests multi-term keywords.
///
/// A deck matching both terms scores higher than one matching a single term, and a
/// deck matching either term is included.
///
/// Expected: Ok with the two-term match first
#[tokio::test]
async fn scores_each_term() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let both = DeckFactory::new(db)
        .name("Mono Red Burn")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let one = DeckFactory::new(db)
        .name("Burn Pile")
        .created_at(now)
        .build()
        .await?;

    let repo = DeckRepository::new(db.clone());
    let results = repo.search("red   burn").await?;

    assert_eq!(
        results.into_iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![both.id, one.id]
    );

    Ok(())
}

/// Tests a blank keyword.
///
/// Expected: Ok with no results
#[tokio::test]
async fn blank_keyword_matches_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    DeckFactory::new(db).build().await?;

    let repo = DeckRepository::new(db.clone());

    assert!(repo.search("   ").await?.is_empty());

    Ok(())
}

/// Tests that search folds case beyond ASCII in every searched field.
///
/// Expected: Ok with the accented deck found by name and by planeswalker
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    let created = repo.create(draft("Élan Vital")).await?;
    let walker = DeckFactory::new(db).planeswalker(Some("ÓSKAR")).build().await?;

    let found = repo.search("élan").await?;
    assert_eq!(found.into_iter().map(|d| d.id).collect::<Vec<_>>(), vec![created.id.clone()]);

    let found = repo.search("ÉLAN").await?;
    assert_eq!(found.into_iter().map(|d| d.id).collect::<Vec<_>>(), vec![created.id]);

    let found = repo.search("óskar").await?;
    assert_eq!(found.into_iter().map(|d| d.id).collect::<Vec<_>>(), vec![walker.id]);

    Ok(())
}

/// Tests that `LIKE` wildcards in a keyword are plain characters.
///
/// Expected: Ok with no results for `%` or `_`
#[tokio::test]
async fn wildcard_keyword_matches_literally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db.clone());
    repo.create(draft("Mono Red")).await?;
    repo.create(draft("Mono Green")).await?;

    assert!(repo.search("%").await?.is_empty());
    assert!(repo.search("_").await?.is_empty());
    assert!(repo.search("mono_red").await?.is_empty());

    Ok(())
}
