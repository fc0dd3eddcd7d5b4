//! Unit of work over a single database transaction.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, TransactionTrait};
use tracing::debug;

use super::generic::GenericRepository;
use crate::entities::{clients, order_details, orders, products};

/// Groups repository writes into one transaction.
///
/// Nothing is visible to other connections until [`complete`](Self::complete)
/// commits. Dropping the unit of work without completing it rolls back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
    writes: AtomicU64,
}

impl UnitOfWork {
    /// Starts a new transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self {
            txn: db.begin().await?,
            writes: AtomicU64::new(0),
        })
    }

    /// Repository for entity `E`, bound to this transaction.
    pub fn repository<E: EntityTrait>(&self) -> GenericRepository<'_, E, DatabaseTransaction> {
        GenericRepository::tracked(&self.txn, &self.writes)
    }

    /// Clients repository.
    pub fn clients(&self) -> GenericRepository<'_, clients::Entity, DatabaseTransaction> {
        self.repository()
    }

    /// Products repository.
    pub fn products(&self) -> GenericRepository<'_, products::Entity, DatabaseTransaction> {
        self.repository()
    }

    /// Orders repository.
    pub fn orders(&self) -> GenericRepository<'_, orders::Entity, DatabaseTransaction> {
        self.repository()
    }

    /// Order details repository.
    pub fn order_details(
        &self,
    ) -> GenericRepository<'_, order_details::Entity, DatabaseTransaction> {
        self.repository()
    }

    /// Number of writes made so far.
    pub fn pending_changes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Commits every pending change and returns how many there were.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    pub async fn complete(self) -> Result<u64, DbErr> {
        let changes = self.writes.into_inner();
        self.txn.commit().await?;
        debug!(changes, "Unit of work committed");
        Ok(changes)
    }

    /// Discards every pending change.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollback fails.
    pub async fn discard(self) -> Result<(), DbErr> {
        let changes = self.writes.into_inner();
        self.txn.rollback().await?;
        debug!(changes, "Unit of work rolled back");
        Ok(())
    }
}
