//! Process-local store.
//!
//! Implements every store trait over ordered maps behind a single async
//! `RwLock`. It mirrors the relational schema's behaviour: identity
//! sequences, unique and check constraints, `RESTRICT` on referenced
//! lookup rows and `CASCADE` for rows owned by users and games. Data is
//! lost when the process exits.

mod activity;
mod catalog;
mod users;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tokio::sync::RwLock;

use gameshelf_entity::backlog::BacklogEntry;
use gameshelf_entity::follower::Follower;
use gameshelf_entity::game::Game;
use gameshelf_entity::lookup::LookupKind;
use gameshelf_entity::review::UserReview;
use gameshelf_entity::user::User;

/// In-memory implementation of all store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    games: BTreeMap<i64, Game>,
    lookups: HashMap<LookupKind, BTreeMap<i64, String>>,
    reviews: BTreeMap<i64, UserReview>,
    backlogs: BTreeMap<i64, BacklogEntry>,
    /// Keyed by `(user_id, follower_id)`.
    followers: BTreeMap<(i64, i64), Follower>,
    /// `(game_id, platform_id)` pairs.
    game_platforms: BTreeSet<(i64, i64)>,
    sequences: HashMap<&'static str, i64>,
}

impl Tables {
    /// Next value of a table's identity sequence. Values are never reused.
    fn next_id(&mut self, table: &'static str) -> i64 {
        let seq = self.sequences.entry(table).or_insert(0);
        *seq += 1;
        *seq
    }

    fn lookup(&self, kind: LookupKind) -> Option<&BTreeMap<i64, String>> {
        self.lookups.get(&kind)
    }

    fn lookup_mut(&mut self, kind: LookupKind) -> &mut BTreeMap<i64, String> {
        self.lookups.entry(kind).or_default()
    }

    fn lookup_exists(&self, kind: LookupKind, id: i64) -> bool {
        self.lookup(kind).is_some_and(|rows| rows.contains_key(&id))
    }

    /// Whether any row still points at the given lookup row.
    fn lookup_in_use(&self, kind: LookupKind, id: i64) -> bool {
        match kind {
            LookupKind::Genre => self.games.values().any(|g| g.genre_id == id),
            LookupKind::Developer => self.games.values().any(|g| g.developer_id == id),
            LookupKind::Publisher => self.games.values().any(|g| g.publisher_id == id),
            LookupKind::GameStatus => self.reviews.values().any(|r| r.status_id == id),
            LookupKind::Platform => self.game_platforms.iter().any(|&(_, p)| p == id),
        }
    }

    /// Remove every row owned by a user.
    fn cascade_user(&mut self, user_id: i64) {
        self.reviews.retain(|_, r| r.user_id != user_id);
        self.backlogs.retain(|_, b| b.user_id != user_id);
        self.followers
            .retain(|&(user, follower), _| user != user_id && follower != user_id);
    }

    /// Remove every row owned by a game.
    fn cascade_game(&mut self, game_id: i64) {
        self.reviews.retain(|_, r| r.game_id != game_id);
        self.backlogs.retain(|_, b| b.game_id != game_id);
        self.game_platforms.retain(|&(game, _)| game != game_id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use gameshelf_core::error::ErrorKind;
    use gameshelf_entity::backlog::CreateBacklogEntry;
    use gameshelf_entity::follower::FollowRelation;
    use gameshelf_entity::game::{CreateGame, GamePlatform, UpdateGame};
    use gameshelf_entity::lookup::{
        CreateLookup, Developer, GameStatus, Genre, Platform, Publisher, UpdateLookup,
    };
    use gameshelf_entity::review::{CreateReview, UpdateReview};
    use gameshelf_entity::user::{CreateUser, UpdateUser};

    use super::*;
    use gameshelf_core::traits::Repository;

    use crate::store::{
        BacklogStore, FollowerStore, GamePlatformStore, GameStore, LookupStore, ReviewStore,
        UserStore,
    };

    fn new_user(name: &str) -> CreateUser {
        CreateUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "hash".to_string(),
            bio: None,
            photo: None,
        }
    }

    async fn lookup<T: gameshelf_entity::lookup::LookupEntity>(
        store: &dyn LookupStore<T>,
        name: &str,
    ) -> i64 {
        store
            .create(&CreateLookup {
                name: name.to_string(),
            })
            .await
            .unwrap()
            .id()
    }

    /// Seeds one genre/developer/publisher and returns a game input using them.
    async fn game_input(store: &MemoryStore, title: &str) -> CreateGame {
        let genre = lookup::<Genre>(store, &format!("{title} genre")).await;
        let developer = lookup::<Developer>(store, &format!("{title} dev")).await;
        let publisher = lookup::<Publisher>(store, &format!("{title} pub")).await;
        CreateGame {
            title: title.to_string(),
            description: "desc".to_string(),
            release_date: NaiveDate::from_ymd_opt(2017, 3, 3).unwrap(),
            genre_id: genre,
            developer_id: developer,
            publisher_id: publisher,
            cover_image: None,
        }
    }

    #[tokio::test]
    async fn test_user_unique_constraints() {
        let store = MemoryStore::new();
        let users: &dyn UserStore = &store;

        let first = users.create(&new_user("gaby")).await.unwrap();
        assert_eq!(first.id, 1);

        let err = users.create(&new_user("gaby")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Username already exists");

        let mut other = new_user("felipe");
        other.email = "gaby@example.com".to_string();
        let err = users.create(&other).await.unwrap_err();
        assert_eq!(err.message, "Email already exists");
    }

    #[tokio::test]
    async fn test_user_update_merges_and_checks_uniqueness() {
        let store = MemoryStore::new();
        let users: &dyn UserStore = &store;
        let gaby = users.create(&new_user("gaby")).await.unwrap();
        users.create(&new_user("felipe")).await.unwrap();

        let updated = users
            .update(
                gaby.id,
                &UpdateUser {
                    bio: Some("Speedrunner".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.bio.as_deref(), Some("Speedrunner"));
        assert_eq!(updated.username, "gaby");

        let err = users
            .update(
                gaby.id,
                &UpdateUser {
                    username: Some("felipe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        assert!(users.update(99, &UpdateUser::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let genres: &dyn LookupStore<Genre> = &store;
        let first = lookup::<Genre>(genres, "RPG").await;
        assert!(genres.delete(first).await.unwrap());
        let second = lookup::<Genre>(genres, "Indie").await;
        assert!(second > first);
        assert!(!genres.delete(first).await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_name_conflict_and_rename() {
        let store = MemoryStore::new();
        let statuses: &dyn LookupStore<GameStatus> = &store;
        let playing = lookup::<GameStatus>(statuses, "Playing").await;
        lookup::<GameStatus>(statuses, "Completed").await;

        let err = statuses
            .update(
                playing,
                &UpdateLookup {
                    name: Some("Completed".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message, "Game status name already exists");

        let found = statuses.find_by_name("Playing").await.unwrap().unwrap();
        assert_eq!(found.id, playing);
    }

    #[tokio::test]
    async fn test_game_requires_existing_references() {
        let store = MemoryStore::new();
        let games: &dyn GameStore = &store;
        let mut input = game_input(&store, "Bloodborne").await;
        input.genre_id = 404;

        let err = games.create(&input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_referenced_genre_cannot_be_deleted() {
        let store = MemoryStore::new();
        let games: &dyn GameStore = &store;
        let genres: &dyn LookupStore<Genre> = &store;
        let game = games
            .create(&game_input(&store, "Dark Souls III").await)
            .await
            .unwrap();

        let err = genres.delete(game.genre_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let renamed = games
            .update(
                game.id,
                &UpdateGame {
                    description: Some("Prepare to die".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.description, "Prepare to die");
        assert_eq!(renamed.title, "Dark Souls III");
    }

    #[tokio::test]
    async fn test_review_constraints_and_cascade() {
        let store = MemoryStore::new();
        let users: &dyn UserStore = &store;
        let games: &dyn GameStore = &store;
        let reviews: &dyn ReviewStore = &store;
        let backlogs: &dyn BacklogStore = &store;

        let user = users.create(&new_user("gaby")).await.unwrap();
        let game = games
            .create(&game_input(&store, "Hades").await)
            .await
            .unwrap();
        let status = lookup::<GameStatus>(&store, "Completed").await;

        let mut input = CreateReview {
            game_id: game.id,
            user_id: user.id,
            score: 11,
            status_id: status,
            mastered: false,
            review: None,
        };
        let err = reviews.create(&input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        input.score = 9;
        let review = reviews.create(&input).await.unwrap();
        let err = reviews.create(&input).await.unwrap_err();
        assert_eq!(err.message, "User review already exists");

        let err = reviews
            .update(
                review.id,
                &UpdateReview {
                    score: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        backlogs
            .create(&CreateBacklogEntry {
                user_id: user.id,
                game_id: game.id,
            })
            .await
            .unwrap();

        assert!(users.delete(user.id).await.unwrap());
        assert!(reviews.find_all().await.unwrap().is_empty());
        assert!(backlogs.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_follower_relations() {
        let store = MemoryStore::new();
        let users: &dyn UserStore = &store;
        let followers: &dyn FollowerStore = &store;

        let a = users.create(&new_user("a")).await.unwrap();
        let b = users.create(&new_user("b")).await.unwrap();
        let c = users.create(&new_user("c")).await.unwrap();

        for follower in [b.id, c.id] {
            followers
                .follow(&FollowRelation {
                    user_id: a.id,
                    follower_id: follower,
                })
                .await
                .unwrap();
        }

        let err = followers
            .follow(&FollowRelation {
                user_id: a.id,
                follower_id: b.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let err = followers
            .follow(&FollowRelation {
                user_id: a.id,
                follower_id: a.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let names: Vec<_> = followers
            .followers_of(a.id)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, ["b", "c"]);

        let following = followers.following_of(c.id).await.unwrap();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].id, a.id);

        users.delete(b.id).await.unwrap();
        assert_eq!(followers.followers_of(a.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_game_platform_links() {
        let store = MemoryStore::new();
        let games: &dyn GameStore = &store;
        let links: &dyn GamePlatformStore = &store;
        let platforms: &dyn LookupStore<Platform> = &store;

        let game = games
            .create(&game_input(&store, "Celeste").await)
            .await
            .unwrap();
        let pc = lookup::<Platform>(platforms, "PC").await;
        let switch = lookup::<Platform>(platforms, "Nintendo Switch").await;

        for platform_id in [switch, pc] {
            links
                .link(&GamePlatform {
                    game_id: game.id,
                    platform_id,
                })
                .await
                .unwrap();
        }

        let names: Vec<_> = links
            .platforms_for_game(game.id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["PC", "Nintendo Switch"]);

        let err = platforms.delete(pc).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        assert!(games.delete(game.id).await.unwrap());
        assert!(links.games_for_platform(pc).await.unwrap().is_empty());
        assert!(platforms.delete(pc).await.unwrap());
    }
}
