//! Name-only catalog entities: genres, platforms, publishers, developers,
//! and game statuses.
//!
//! These five tables share one shape (`id`, unique `name`), so they are
//! described by the [`LookupEntity`] trait and handled generically by the
//! storage, service, and HTTP layers.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::postgres::PgRow;

/// Maximum length of a lookup name.
pub const NAME_MAX_LEN: usize = 255;

/// Discriminates the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Genre,
    Platform,
    Publisher,
    Developer,
    GameStatus,
}

impl LookupKind {
    /// All lookup kinds, in seeding order.
    pub const ALL: [LookupKind; 5] = [
        Self::Genre,
        Self::Platform,
        Self::Publisher,
        Self::Developer,
        Self::GameStatus,
    ];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Genre => "genres",
            Self::Platform => "platforms",
            Self::Publisher => "publishers",
            Self::Developer => "developers",
            Self::GameStatus => "game_statuses",
        }
    }

    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Genre => "Genre",
            Self::Platform => "Platform",
            Self::Publisher => "Publisher",
            Self::Developer => "Developer",
            Self::GameStatus => "Game status",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A row of one of the lookup tables.
pub trait LookupEntity:
    for<'r> FromRow<'r, PgRow> + Serialize + Clone + fmt::Debug + Send + Sync + Unpin + 'static
{
    /// Which table this entity lives in.
    const KIND: LookupKind;

    /// Build an entity from its columns.
    fn from_parts(id: i64, name: String) -> Self;

    /// Primary key.
    fn id(&self) -> i64;

    /// Unique name.
    fn name(&self) -> &str;
}

/// Data required to create a lookup row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLookup {
    pub name: String,
}

/// Partial update of a lookup row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLookup {
    pub name: Option<String>,
}

macro_rules! lookup_entity {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
        pub struct $name {
            /// Primary key.
            pub id: i64,
            /// Unique name.
            pub name: String,
        }

        impl LookupEntity for $name {
            const KIND: LookupKind = $kind;

            fn from_parts(id: i64, name: String) -> Self {
                Self { id, name }
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

lookup_entity!(
    /// A game genre (e.g. "RPG").
    Genre => LookupKind::Genre
);
lookup_entity!(
    /// A platform a game can be played on (e.g. "PC").
    Platform => LookupKind::Platform
);
lookup_entity!(
    /// A game publisher.
    Publisher => LookupKind::Publisher
);
lookup_entity!(
    /// A game developer studio.
    Developer => LookupKind::Developer
);
lookup_entity!(
    /// A play status attached to reviews (e.g. "Completed").
    GameStatus => LookupKind::GameStatus
);
