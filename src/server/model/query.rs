//! Filter and pagination parameters for deck listings.

use crate::{
    model::{api::PaginationDto, deck::DeckDto},
    server::model::{
        deck::Deck,
        symbol::{Color, DeckType, GameStage, SortField, SortOrder, TierRating},
    },
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Optional predicates for listing and counting decks.
///
/// Every populated field narrows the result set; the predicates are AND-combined and an
/// empty filter matches every deck. `storage_location` is a case-insensitive substring
/// match and `colors` matches decks containing any of the listed colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckFilter {
    pub deck_type: Option<DeckType>,
    pub game_stage: Option<GameStage>,
    pub tier_rating: Option<TierRating>,
    pub is_complete: Option<bool>,
    pub has_card_sleeves: Option<bool>,
    pub storage_location: Option<String>,
    pub colors: Option<Vec<Color>>,
}

/// Page window and ordering for a deck listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Pagination {
    /// Normalizes raw page values: a page below 1 becomes 1 and a limit outside
    /// `1..=100` falls back to 10. Sorting defaults to newest first.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(page) if page >= 1 => page as u64,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(limit) if (1..=MAX_LIMIT as i64).contains(&limit) => limit as u64,
            _ => DEFAULT_LIMIT,
        };

        Self {
            page,
            limit,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }

    pub fn with_sort(mut self, sort_by: SortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Number of records preceding the requested page.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of decks plus the numbers needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDecks {
    pub decks: Vec<Deck>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedDecks {
    pub fn into_dto(self) -> (Vec<DeckDto>, PaginationDto) {
        let pagination = PaginationDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        };

        (
            self.decks.into_iter().map(Deck::into_dto).collect(),
            pagination,
        )
    }
}
