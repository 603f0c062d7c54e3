//! User accounts and follower relations.

use async_trait::async_trait;
use chrono::Utc;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::follower::{FollowRelation, Follower};
use gameshelf_entity::user::{CreateUser, UpdateUser, User};

use super::{MemoryStore, Tables};
use crate::error::{check_violation, constraint, missing_reference, unique_violation};
use crate::store::{FollowerStore, UserStore};

impl Tables {
    fn check_user_unique(&self, id: Option<i64>, username: &str, email: &str) -> AppResult<()> {
        let others = self.users.values().filter(|u| Some(u.id) != id);
        for user in others {
            if user.username == username {
                return Err(unique_violation(constraint::USERS_USERNAME));
            }
            if user.email == email {
                return Err(unique_violation(constraint::USERS_EMAIL));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<User, CreateUser, UpdateUser> for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        tables.check_user_unique(None, &data.username, &data.email)?;

        let now = Utc::now();
        let user = User {
            id: tables.next_id("users"),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            bio: data.bio.clone(),
            photo: data.photo.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<Option<User>> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.users.get(&id) else {
            return Ok(None);
        };

        let mut user = current.clone();
        if let Some(username) = &data.username {
            user.username = username.clone();
        }
        if let Some(email) = &data.email {
            user.email = email.clone();
        }
        if let Some(bio) = &data.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(photo) = &data.photo {
            user.photo = Some(photo.clone());
        }
        tables.check_user_unique(Some(id), &user.username, &user.email)?;

        user.updated_at = Utc::now();
        tables.users.insert(id, user.clone());
        Ok(Some(user))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }
        tables.cascade_user(id);
        Ok(true)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl FollowerStore for MemoryStore {
    async fn follow(&self, relation: &FollowRelation) -> AppResult<Follower> {
        if relation.is_self_follow() {
            return Err(check_violation(constraint::FOLLOWERS_NOT_SELF));
        }

        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&relation.user_id)
            || !tables.users.contains_key(&relation.follower_id)
        {
            return Err(missing_reference("Follower"));
        }

        let key = (relation.user_id, relation.follower_id);
        if tables.followers.contains_key(&key) {
            return Err(unique_violation(constraint::FOLLOWERS_PKEY));
        }

        let follower = Follower {
            user_id: relation.user_id,
            follower_id: relation.follower_id,
            created_at: Utc::now(),
        };
        tables.followers.insert(key, follower.clone());
        Ok(follower)
    }

    async fn find(&self, relation: &FollowRelation) -> AppResult<Option<Follower>> {
        let tables = self.tables.read().await;
        Ok(tables
            .followers
            .get(&(relation.user_id, relation.follower_id))
            .cloned())
    }

    async fn unfollow(&self, relation: &FollowRelation) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .followers
            .remove(&(relation.user_id, relation.follower_id))
            .is_some())
    }

    async fn followers_of(&self, user_id: i64) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        // Keys are ordered by (user_id, follower_id), so followers come out by id.
        Ok(tables
            .followers
            .keys()
            .filter(|&&(user, _)| user == user_id)
            .filter_map(|(_, follower)| tables.users.get(follower).cloned())
            .collect())
    }

    async fn following_of(&self, follower_id: i64) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .followers
            .keys()
            .filter(|&&(_, follower)| follower == follower_id)
            .filter_map(|(user, _)| tables.users.get(user).cloned())
            .collect())
    }
}
