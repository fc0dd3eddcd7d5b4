//! Generic repository for any entity with an integer primary key.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

/// Type-agnostic CRUD over a `SeaORM` entity.
///
/// Works against any connection, including a transaction. When created by a
/// [`UnitOfWork`](super::UnitOfWork) every successful write is counted.
pub struct GenericRepository<'c, E, C> {
    conn: &'c C,
    writes: Option<&'c AtomicU64>,
    _entity: PhantomData<E>,
}

impl<'c, E, C> GenericRepository<'c, E, C> {
    /// Creates an untracked repository over `conn`.
    #[must_use]
    pub const fn new(conn: &'c C) -> Self {
        Self {
            conn,
            writes: None,
            _entity: PhantomData,
        }
    }

    /// Creates a repository whose writes are added to `writes`.
    #[must_use]
    pub const fn tracked(conn: &'c C, writes: &'c AtomicU64) -> Self {
        Self {
            conn,
            writes: Some(writes),
            _entity: PhantomData,
        }
    }

    fn record_write(&self) {
        if let Some(writes) = self.writes {
            writes.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl<E, C> GenericRepository<'_, E, C>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Loads every row, ordered by primary key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select.all(self.conn).await
    }

    /// Finds a row by primary key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.conn).await
    }

    /// Counts all rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr>
    where
        E::Model: Sync,
    {
        E::find().count(self.conn).await
    }

    /// Inserts a new row and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn add<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let stored = model.insert(self.conn).await?;
        self.record_write();
        Ok(stored)
    }

    /// Updates the columns set on `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails or no row matches.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let stored = model.update(self.conn).await?;
        self.record_write();
        Ok(stored)
    }

    /// Deletes a row by primary key. Returns `false` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = E::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }
        self.record_write();
        Ok(true)
    }
}
