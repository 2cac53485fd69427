use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    SqlErr,
};

use entity::deck::{Column, Entity as DeckEntity};

use crate::server::{
    data::store::DeckStore,
    error::AppError,
    model::{
        deck::{
            self, color_pattern, encode_colors, search_key, Deck, DeckId, NewDeck,
            UpdateDeckParams,
        },
        query::{DeckFilter, PaginatedDecks, Pagination},
        symbol::{Color, DeckType, SortField, SortOrder, TierRating},
    },
};

/// SQL ranking tiers S through D rather than alphabetically.
fn tier_rank_sql() -> String {
    let arms: String = TierRating::ALL
        .iter()
        .map(|tier| format!("WHEN '{}' THEN {} ", tier, tier.rank()))
        .collect();

    format!("CASE \"tier_rating\" {}ELSE {} END", arms, TierRating::ALL.len())
}

/// SeaORM-backed deck store.
///
/// Owns its connection handle (a cheap clone of the pool) so it can sit behind an
/// `Arc<dyn DeckStore>` in the application state.
pub struct DeckRepository {
    db: DatabaseConnection,
}

impl DeckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the AND-combined condition for a filter; absent fields add nothing.
    fn filter_condition(filter: &DeckFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(deck_type) = filter.deck_type {
            condition = condition.add(Column::DeckType.eq(deck_type.as_str()));
        }
        if let Some(game_stage) = filter.game_stage {
            condition = condition.add(Column::GameStage.eq(game_stage.as_str()));
        }
        if let Some(tier_rating) = filter.tier_rating {
            condition = condition.add(Column::TierRating.eq(tier_rating.as_str()));
        }
        if let Some(is_complete) = filter.is_complete {
            condition = condition.add(Column::IsComplete.eq(is_complete));
        }
        if let Some(has_card_sleeves) = filter.has_card_sleeves {
            condition = condition.add(Column::HasCardSleeves.eq(has_card_sleeves));
        }
        if let Some(location) = &filter.storage_location {
            condition = condition.add(contains_text(Column::StorageLocationKey, location));
        }
        if let Some(colors) = &filter.colors {
            if !colors.is_empty() {
                condition = condition.add(Self::colors_condition(colors));
            }
        }

        condition
    }

    /// Any-of membership against the JSON-encoded `colors` column.
    fn colors_condition(colors: &[Color]) -> Condition {
        colors.iter().fold(Condition::any(), |condition, color| {
            condition.add(Column::Colors.contains(color_pattern(*color)))
        })
    }

    fn sorted(query: Select<DeckEntity>, pagination: &Pagination) -> Select<DeckEntity> {
        let order = match pagination.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let query = match pagination.sort_by {
            SortField::Name => query.order_by(Column::NameKey, order),
            SortField::CreatedAt => query.order_by(Column::CreatedAt, order),
            SortField::UpdatedAt => query.order_by(Column::UpdatedAt, order),
            SortField::TierRating => query.order_by(Expr::cust(tier_rank_sql()), order),
            SortField::DeckType => query.order_by(Column::DeckType, order),
            SortField::GameStage => query.order_by(Column::GameStage, order),
            SortField::StorageLocation => query.order_by(Column::StorageLocation, order),
        };

        query.order_by(Column::Id, Order::Asc)
    }

    fn newest_first(query: Select<DeckEntity>) -> Select<DeckEntity> {
        query
            .order_by(Column::CreatedAt, Order::Desc)
            .order_by(Column::Id, Order::Asc)
    }

    async fn list(&self, query: Select<DeckEntity>) -> Result<Vec<Deck>, AppError> {
        let models = Self::newest_first(query).all(&self.db).await?;

        Ok(to_domain(models)?)
    }
}

#[async_trait]
impl DeckStore for DeckRepository {
    async fn create(&self, draft: NewDeck) -> Result<Deck, AppError> {
        let name_key = draft.name_key();
        let deck = draft.into_deck(DeckId::generate(), deck::now());

        let model = entity::deck::ActiveModel {
            id: ActiveValue::Set(deck.id.clone()),
            name: ActiveValue::Set(deck.name.clone()),
            name_key: ActiveValue::Set(name_key),
            description: ActiveValue::Set(deck.description.clone()),
            description_key: ActiveValue::Set(search_key(&deck.description)),
            colors: ActiveValue::Set(encode_colors(&deck.colors)),
            tier_rating: ActiveValue::Set(deck.tier_rating.to_string()),
            deck_type: ActiveValue::Set(deck.deck_type.to_string()),
            game_stage: ActiveValue::Set(deck.game_stage.to_string()),
            has_card_sleeves: ActiveValue::Set(deck.has_card_sleeves),
            is_complete: ActiveValue::Set(deck.is_complete),
            storage_location: ActiveValue::Set(deck.storage_location.clone()),
            storage_location_key: ActiveValue::Set(search_key(&deck.storage_location)),
            planeswalker: ActiveValue::Set(deck.planeswalker.clone()),
            planeswalker_key: ActiveValue::Set(deck.planeswalker.as_deref().map(search_key)),
            descriptive_image: ActiveValue::Set(deck.descriptive_image.clone()),
            created_at: ActiveValue::Set(deck.created_at),
            updated_at: ActiveValue::Set(deck.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|err| conflict_or_db(err, &deck.name))?;

        Ok(Deck::from_entity(model)?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, AppError> {
        let Some(id) = DeckId::parse(id) else {
            return Ok(None);
        };

        let model = DeckEntity::find_by_id(id.into_string())
            .one(&self.db)
            .await?;

        Ok(model.map(Deck::from_entity).transpose()?)
    }

    async fn find_all(
        &self,
        filter: &DeckFilter,
        pagination: &Pagination,
    ) -> Result<PaginatedDecks, AppError> {
        let query = DeckEntity::find().filter(Self::filter_condition(filter));

        let total = query.clone().count(&self.db).await?;

        let models = Self::sorted(query, pagination)
            .offset(pagination.skip())
            .limit(pagination.limit)
            .all(&self.db)
            .await?;

        Ok(PaginatedDecks {
            decks: to_domain(models)?,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: pagination.total_pages(total),
        })
    }

    async fn update(&self, id: &str, patch: &UpdateDeckParams) -> Result<Option<Deck>, AppError> {
        let Some(id) = DeckId::parse(id) else {
            return Ok(None);
        };
        let Some(model) = DeckEntity::find_by_id(id.into_string()).one(&self.db).await? else {
            return Ok(None);
        };

        let current = Deck::from_entity(model)?;
        let merged = current.merge(patch, deck::now())?;

        let result = entity::deck::ActiveModel {
            id: ActiveValue::Unchanged(merged.id.clone()),
            name: ActiveValue::Set(merged.name.clone()),
            name_key: ActiveValue::Set(merged.name_key()),
            description: ActiveValue::Set(merged.description.clone()),
            description_key: ActiveValue::Set(search_key(&merged.description)),
            colors: ActiveValue::Set(encode_colors(&merged.colors)),
            tier_rating: ActiveValue::Set(merged.tier_rating.to_string()),
            deck_type: ActiveValue::Set(merged.deck_type.to_string()),
            game_stage: ActiveValue::Set(merged.game_stage.to_string()),
            has_card_sleeves: ActiveValue::Set(merged.has_card_sleeves),
            is_complete: ActiveValue::Set(merged.is_complete),
            storage_location: ActiveValue::Set(merged.storage_location.clone()),
            storage_location_key: ActiveValue::Set(search_key(&merged.storage_location)),
            planeswalker: ActiveValue::Set(merged.planeswalker.clone()),
            planeswalker_key: ActiveValue::Set(merged.planeswalker.as_deref().map(search_key)),
            descriptive_image: ActiveValue::Set(merged.descriptive_image.clone()),
            created_at: ActiveValue::Unchanged(merged.created_at),
            updated_at: ActiveValue::Set(merged.updated_at),
        }
        .update(&self.db)
        .await;

        match result {
            Ok(model) => Ok(Some(Deck::from_entity(model)?)),
            // Deleted between the read and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(conflict_or_db(err, &merged.name)),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(id) = DeckId::parse(id) else {
            return Ok(false);
        };

        let result = DeckEntity::delete_by_id(id.into_string())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Deck>, AppError> {
        let model = DeckEntity::find()
            .filter(Column::NameKey.eq(deck::name_key(name)))
            .one(&self.db)
            .await?;

        Ok(model.map(Deck::from_entity).transpose()?)
    }

    async fn find_by_tier(&self, tier_rating: TierRating) -> Result<Vec<Deck>, AppError> {
        self.list(DeckEntity::find().filter(Column::TierRating.eq(tier_rating.as_str())))
            .await
    }

    async fn find_by_type(&self, deck_type: DeckType) -> Result<Vec<Deck>, AppError> {
        self.list(DeckEntity::find().filter(Column::DeckType.eq(deck_type.as_str())))
            .await
    }

    async fn find_by_storage_location(&self, location: &str) -> Result<Vec<Deck>, AppError> {
        let condition = contains_text(Column::StorageLocationKey, location);

        self.list(DeckEntity::find().filter(condition)).await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Deck>, AppError> {
        let terms: Vec<String> = keyword.split_whitespace().map(search_key).collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let condition = terms.iter().fold(Condition::any(), |condition, term| {
            condition
                .add(contains_text(Column::NameKey, term))
                .add(contains_text(Column::PlaneswalkerKey, term))
                .add(contains_text(Column::DescriptionKey, term))
        });

        let models = DeckEntity::find().filter(condition).all(&self.db).await?;

        let mut scored: Vec<(u32, Deck)> = to_domain(models)?
            .into_iter()
            .map(|deck| (deck.relevance(&terms), deck))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(scored.into_iter().map(|(_, deck)| deck).collect())
    }

    async fn find_by_colors(&self, colors: &[Color]) -> Result<Vec<Deck>, AppError> {
        if colors.is_empty() {
            return Ok(Vec::new());
        }

        self.list(DeckEntity::find().filter(Self::colors_condition(colors)))
            .await
    }

    async fn count(&self, filter: &DeckFilter) -> Result<u64, AppError> {
        let count = DeckEntity::find()
            .filter(Self::filter_condition(filter))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn find_incomplete(&self) -> Result<Vec<Deck>, AppError> {
        self.list(DeckEntity::find().filter(Column::IsComplete.eq(false)))
            .await
    }
}

/// Literal, case-folded substring match against one of the lower-cased `*_key` columns.
///
/// `%`, `_` and the escape character itself are escaped so user text never acts as a
/// `LIKE` wildcard.
fn contains_text(column: Column, text: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&search_key(text)));

    Condition::all().add(column.like(LikeExpr::new(pattern).escape('\\')))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn to_domain(models: Vec<entity::deck::Model>) -> Result<Vec<Deck>, DbErr> {
    models.into_iter().map(Deck::from_entity).collect()
}

/// Translates a violation of the unique `name_key` index into a conflict.
fn conflict_or_db(err: DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("Deck with name '{}' already exists", name))
        }
        _ => AppError::DbErr(err),
    }
}
