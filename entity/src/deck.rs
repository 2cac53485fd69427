use sea_orm::entity::prelude::*;

/// A stored deck record.
///
/// Enum-valued fields hold their canonical symbols (`"S"`, `"AGGRO"`, `"EARLY"`) and
/// `colors` holds a JSON array of color symbols, e.g. `["W","U"]`. `name_key` is the
/// case-folded name and carries the unique constraint that guards name collisions.
/// The other `*_key` columns hold lower-cased copies of the free-text fields so
/// substring matches are case-insensitive beyond ASCII.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deck")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub name_key: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub description_key: String,
    pub colors: String,
    pub tier_rating: String,
    pub deck_type: String,
    pub game_stage: String,
    pub has_card_sleeves: bool,
    pub is_complete: bool,
    pub storage_location: String,
    pub storage_location_key: String,
    pub planeswalker: Option<String>,
    pub planeswalker_key: Option<String>,
    pub descriptive_image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
