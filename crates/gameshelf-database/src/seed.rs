//! Catalog seed data.
//!
//! Seeding is idempotent: rows whose name (or title) already exists are
//! skipped, so the seeders can be run against a populated store.

use std::fmt;
use std::ops::AddAssign;

use chrono::NaiveDate;
use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_entity::game::CreateGame;
use gameshelf_entity::lookup::{CreateLookup, LookupEntity};

use crate::provider::Repositories;
use crate::store::{GameStore, LookupStore};

pub const GENRES: &[&str] = &[
    "Indie",
    "Soulslike",
    "Action",
    "Adventure",
    "RPG",
    "Simulation",
    "Strategy",
    "Sports",
    "Puzzle",
    "Idle",
    "Casual",
    "Arcade",
    "Racing",
    "Horror",
    "Survival",
    "Shooter",
    "Fighting",
    "MMO",
    "MOBA",
    "Battle Royale",
    "Sandbox",
    "Open World",
    "MMORPG",
    "Metroidvania",
    "Stealth",
    "Platformer",
    "Roguelike",
    "Rhythm",
    "Educational",
    "Music",
    "Party",
    "Trivia",
    "Board",
    "Cards",
    "Puzzle Adventure",
];

pub const PLATFORMS: &[&str] = &[
    "PC",
    "PlayStation 4",
    "Xbox One",
    "Nintendo Switch",
    "PlayStation 5",
    "Xbox Series X",
    "iOS",
    "Android",
];

pub const PUBLISHERS: &[&str] = &[
    "Bandai Namco",
    "Sony Interactive Entertainment",
    "Rockstar Games",
    "CAPCOM",
    "Nintendo",
    "Square Enix",
    "Ubisoft",
    "Bethesda Softworks",
    "Activision",
    "Electronic Arts",
];

pub const DEVELOPERS: &[&str] = &[
    "FromSoftware",
    "Naughty Dog",
    "Rockstar Games",
    "CD Projekt Red",
    "Nintendo",
    "Capcom",
    "Square Enix",
    "Konami",
    "Ubisoft",
    "Bethesda",
];

pub const GAME_STATUSES: &[&str] = &[
    "Played",
    "Playing",
    "Completed",
    "Retired",
    "Shelved",
    "Abandoned",
];

/// A seeded game. Lookups are referenced by name.
#[derive(Debug, Clone, Copy)]
pub struct SeedGame {
    pub title: &'static str,
    pub description: &'static str,
    pub release_date: (i32, u32, u32),
    pub genre: &'static str,
    pub developer: &'static str,
    pub publisher: &'static str,
}

pub const GAMES: &[SeedGame] = &[
    SeedGame {
        title: "The Legend of Zelda: Breath of the Wild",
        description: "Open-air action-adventure set in a ruined Hyrule, released for the Nintendo Switch and Wii U.",
        release_date: (2017, 3, 3),
        genre: "Adventure",
        developer: "Nintendo",
        publisher: "Nintendo",
    },
    SeedGame {
        title: "Dark Souls III",
        description: "Action role-playing game and the final entry of the Dark Souls series.",
        release_date: (2016, 3, 24),
        genre: "Soulslike",
        developer: "FromSoftware",
        publisher: "Bandai Namco",
    },
    SeedGame {
        title: "Bloodborne",
        description: "Gothic action role-playing game set in the plagued city of Yharnam, exclusive to PlayStation 4.",
        release_date: (2015, 3, 24),
        genre: "Soulslike",
        developer: "FromSoftware",
        publisher: "Sony Interactive Entertainment",
    },
    SeedGame {
        title: "The Witcher 3: Wild Hunt",
        description: "Open-world role-playing game following the monster hunter Geralt of Rivia.",
        release_date: (2015, 5, 19),
        genre: "RPG",
        developer: "CD Projekt Red",
        publisher: "CAPCOM",
    },
    SeedGame {
        title: "Red Dead Redemption 2",
        description: "Western action-adventure and prequel to Red Dead Redemption.",
        release_date: (2018, 10, 26),
        genre: "Adventure",
        developer: "Rockstar Games",
        publisher: "Rockstar Games",
    },
    SeedGame {
        title: "Grand Theft Auto V",
        description: "Action-adventure set in Los Santos with three playable protagonists.",
        release_date: (2013, 9, 17),
        genre: "Adventure",
        developer: "Rockstar Games",
        publisher: "Rockstar Games",
    },
    SeedGame {
        title: "Persona 5 Royal",
        description: "Expanded re-release of the role-playing game Persona 5.",
        release_date: (2020, 3, 31),
        genre: "RPG",
        developer: "Capcom",
        publisher: "Square Enix",
    },
    SeedGame {
        title: "Elden Ring",
        description: "Open-world action role-playing game set in the Lands Between.",
        release_date: (2022, 2, 25),
        genre: "Soulslike",
        developer: "FromSoftware",
        publisher: "Bandai Namco",
    },
];

/// What to seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTarget {
    All,
    Genres,
    Platforms,
    Publishers,
    Developers,
    GameStatuses,
    Games,
}

/// Rows inserted and skipped by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

impl AddAssign for SeedReport {
    fn add_assign(&mut self, rhs: Self) {
        self.inserted += rhs.inserted;
        self.skipped += rhs.skipped;
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} inserted, {} skipped", self.inserted, self.skipped)
    }
}

/// Steps run by [`SeedTarget::All`], lookups before games.
const ALL_STEPS: [SeedTarget; 6] = [
    SeedTarget::Genres,
    SeedTarget::Platforms,
    SeedTarget::Publishers,
    SeedTarget::Developers,
    SeedTarget::GameStatuses,
    SeedTarget::Games,
];

/// Seed `target`.
pub async fn seed(repos: &Repositories, target: SeedTarget) -> AppResult<SeedReport> {
    if target != SeedTarget::All {
        return seed_one(repos, target).await;
    }

    let mut total = SeedReport::default();
    for step in ALL_STEPS {
        total += seed_one(repos, step).await?;
    }
    Ok(total)
}

async fn seed_one(repos: &Repositories, target: SeedTarget) -> AppResult<SeedReport> {
    let report = match target {
        SeedTarget::Genres => seed_lookup(repos.genres.as_ref(), GENRES).await?,
        SeedTarget::Platforms => seed_lookup(repos.platforms.as_ref(), PLATFORMS).await?,
        SeedTarget::Publishers => seed_lookup(repos.publishers.as_ref(), PUBLISHERS).await?,
        SeedTarget::Developers => seed_lookup(repos.developers.as_ref(), DEVELOPERS).await?,
        SeedTarget::GameStatuses => {
            seed_lookup(repos.game_statuses.as_ref(), GAME_STATUSES).await?
        }
        SeedTarget::Games => seed_games(repos).await?,
        SeedTarget::All => return Err(AppError::internal("Nested seed target")),
    };

    info!(seed = ?target, inserted = report.inserted, skipped = report.skipped, "Seeded");
    Ok(report)
}

async fn seed_lookup<T: LookupEntity>(
    store: &dyn LookupStore<T>,
    names: &[&str],
) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();
    for name in names {
        if store.find_by_name(name).await?.is_some() {
            report.skipped += 1;
            continue;
        }
        store
            .create(&CreateLookup {
                name: (*name).to_string(),
            })
            .await?;
        report.inserted += 1;
    }
    Ok(report)
}

async fn seed_games(repos: &Repositories) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();
    for game in GAMES {
        if repos.games.find_by_title(game.title).await?.is_some() {
            report.skipped += 1;
            continue;
        }

        let (year, month, day) = game.release_date;
        let release_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AppError::internal(format!("Invalid release date for '{}'", game.title))
        })?;

        let data = CreateGame {
            title: game.title.to_string(),
            description: game.description.to_string(),
            release_date,
            genre_id: lookup_id(repos.genres.as_ref(), game.genre).await?,
            developer_id: lookup_id(repos.developers.as_ref(), game.developer).await?,
            publisher_id: lookup_id(repos.publishers.as_ref(), game.publisher).await?,
            cover_image: None,
        };
        repos.games.create(&data).await?;
        report.inserted += 1;
    }
    Ok(report)
}

async fn lookup_id<T: LookupEntity>(store: &dyn LookupStore<T>, name: &str) -> AppResult<i64> {
    store
        .find_by_name(name)
        .await?
        .map(|row| row.id())
        .ok_or_else(|| {
            AppError::validation(format!(
                "{} '{name}' is missing; seed the lookup tables first",
                T::KIND
            ))
        })
}
