//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Parameterised over the entity and its create/update inputs so that
/// each resource gets a strongly typed repository. Entity-specific
/// queries live on resource traits that extend this one.
#[async_trait]
pub trait Repository<Entity, Create, Update>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Create: Send + Sync + 'static,
    Update: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Entity>>;

    /// List every entity, ordered by primary key.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Create a new entity and return it.
    async fn create(&self, data: &Create) -> AppResult<Entity>;

    /// Merge the present fields of `data` into an entity.
    ///
    /// Returns `None` when no entity has the given id.
    async fn update(&self, id: i64, data: &Update) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
