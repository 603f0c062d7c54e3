//! Generic repository for the name-only lookup tables.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::lookup::{CreateLookup, LookupEntity, UpdateLookup};

use crate::error::{delete_error, query_error, write_error};
use crate::store::LookupStore;

/// Repository over one lookup table, selected by `T::KIND`.
///
/// Table names come from a closed set of `&'static str`s, never from
/// user input, so they are interpolated directly into the SQL.
#[derive(Debug)]
pub struct LookupRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: LookupEntity> LookupRepository<T> {
    /// Create a new repository for `T`'s table.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn table() -> &'static str {
        T::KIND.table()
    }

    fn label() -> &'static str {
        T::KIND.label()
    }
}

impl<T> Clone for LookupRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: LookupEntity> Repository<T, CreateLookup, UpdateLookup> for LookupRepository<T> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let sql = format!("SELECT id, name FROM {} WHERE id = $1", Self::table());
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e, &format!("find {} by id", Self::table())))
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", Self::table());
        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(e, &format!("list {}", Self::table())))
    }

    async fn create(&self, data: &CreateLookup) -> AppResult<T> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
            Self::table()
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error(e, Self::label()))
    }

    async fn update(&self, id: i64, data: &UpdateLookup) -> AppResult<Option<T>> {
        let sql = format!(
            "UPDATE {} SET name = COALESCE($2, name) WHERE id = $1 RETURNING id, name",
            Self::table()
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(&data.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, Self::label()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", Self::table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, Self::label()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl<T: LookupEntity> LookupStore<T> for LookupRepository<T> {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<T>> {
        let sql = format!("SELECT id, name FROM {} WHERE name = $1", Self::table());
        sqlx::query_as::<_, T>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e, &format!("find {} by name", Self::table())))
    }
}
