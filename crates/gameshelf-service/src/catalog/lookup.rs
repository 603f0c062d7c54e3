//! Generic service for the name-only lookup tables.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::LookupStore;
use gameshelf_entity::lookup::{CreateLookup, LookupEntity, UpdateLookup};

use crate::context::RequestContext;

/// Handles one lookup table. Names are unique within a table.
#[derive(Debug)]
pub struct LookupService<T: LookupEntity> {
    store: Arc<dyn LookupStore<T>>,
}

impl<T: LookupEntity> Clone for LookupService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: LookupEntity> LookupService<T> {
    /// Creates a new lookup service.
    pub fn new(store: Arc<dyn LookupStore<T>>) -> Self {
        Self { store }
    }

    fn not_found() -> AppError {
        AppError::not_found(format!("{} not found", T::KIND.label()))
    }

    fn name_taken() -> AppError {
        AppError::conflict(format!("{} name already exists", T::KIND.label()))
    }

    pub async fn create(&self, ctx: &RequestContext, data: CreateLookup) -> AppResult<T> {
        if self.store.find_by_name(&data.name).await?.is_some() {
            return Err(Self::name_taken());
        }

        let row = self.store.create(&data).await?;
        info!(kind = %T::KIND, id = row.id(), user_id = ctx.user_id, "Lookup created");
        Ok(row)
    }

    pub async fn get(&self, id: i64) -> AppResult<T> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)
    }

    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.store.find_all().await
    }

    /// Renames a row. Renaming to another row's name is a conflict.
    pub async fn update(&self, ctx: &RequestContext, id: i64, data: UpdateLookup) -> AppResult<T> {
        if let Some(name) = &data.name {
            if let Some(existing) = self.store.find_by_name(name).await? {
                if existing.id() != id {
                    return Err(Self::name_taken());
                }
            }
        }

        let row = self
            .store
            .update(id, &data)
            .await?
            .ok_or_else(Self::not_found)?;
        info!(kind = %T::KIND, id, user_id = ctx.user_id, "Lookup updated");
        Ok(row)
    }

    /// Deletes a row. Rows still referenced by games or reviews are kept.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(Self::not_found());
        }
        info!(kind = %T::KIND, id, user_id = ctx.user_id, "Lookup deleted");
        Ok(())
    }
}
