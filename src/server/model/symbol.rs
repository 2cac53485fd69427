//! Closed vocabularies used by deck records and listing queries.
//!
//! Each enum maps one-to-one onto the symbol stored in the database and exchanged over
//! the API. Parsing is exact and total: anything outside the vocabulary is a
//! `ParseEnumError` naming the accepted symbols.

use thiserror::Error;

/// A value that is not part of an enum's vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} must be one of [{}], got '{value}'", .expected.join(", "))]
pub struct ParseEnumError {
    /// Field-style name of the vocabulary, e.g. `tierRating`.
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const SYMBOLS: &'static [&'static str] = &[$($symbol),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($symbol => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: value.to_string(),
                        expected: Self::SYMBOLS,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

symbol_enum! {
    /// Mana color of a deck.
    Color as "color" {
        White => "W",
        Blue => "U",
        Black => "B",
        Red => "R",
        Green => "G",
        Colorless => "C",
    }
}

symbol_enum! {
    /// Competitive rating, best (`S`) to worst (`D`).
    TierRating as "tierRating" {
        S => "S",
        A => "A",
        B => "B",
        C => "C",
        D => "D",
    }
}

symbol_enum! {
    DeckType as "deckType" {
        Aggro => "AGGRO",
        Combo => "COMBO",
        Control => "CONTROL",
    }
}

symbol_enum! {
    /// Point of the game the deck is built to win in.
    GameStage as "gameStage" {
        Early => "EARLY",
        Mid => "MID",
        Late => "LATE",
    }
}

symbol_enum! {
    /// Field a deck listing can be ordered by.
    SortField as "sortBy" {
        Name => "name",
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
        TierRating => "tierRating",
        DeckType => "deckType",
        GameStage => "gameStage",
        StorageLocation => "storageLocation",
    }
}

symbol_enum! {
    SortOrder as "sortOrder" {
        Asc => "asc",
        Desc => "desc",
    }
}

impl TierRating {
    /// Position in the tier order, `S` being 0.
    pub fn rank(self) -> i32 {
        match self {
            TierRating::S => 0,
            TierRating::A => 1,
            TierRating::B => 2,
            TierRating::C => 3,
            TierRating::D => 4,
        }
    }
}
