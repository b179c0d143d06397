//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Rows are never physically removed. Every entity carries a `deleted_at` tombstone and
//! every read goes through [`SoftDelete::find_active`], so a deleted row is invisible to
//! the rest of the application. Repositories are generic over [`ConnectionTrait`] so the
//! same methods run against a pooled connection or inside a transaction.

pub mod project;
pub mod sprint;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Select,
};

/// Active-only query capability for tombstoned entities.
pub trait SoftDelete: EntityTrait {
    /// Column holding the primary key.
    fn id_column() -> Self::Column;

    /// Column holding the deletion timestamp, `NULL` while the row is live.
    fn deleted_at_column() -> Self::Column;

    /// Selects rows that have not been soft-deleted.
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::deleted_at_column().is_null())
    }

    /// Selects a single live row by primary key.
    fn find_active_by_id(id: i32) -> Select<Self> {
        Self::find_active().filter(Self::id_column().eq(id))
    }
}

/// Tombstones a live row.
///
/// # Arguments
/// - `db` - Connection or transaction to write through
/// - `id` - Primary key of the row
///
/// # Returns
/// - `Ok(u64)` - Rows affected, `0` when the row is missing or already deleted
/// - `Err(DbErr)` - Database error during update
pub async fn soft_delete<E, C>(db: &C, id: i32) -> Result<u64, DbErr>
where
    E: SoftDelete,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(E::deleted_at_column(), Expr::value(Utc::now()))
        .filter(E::id_column().eq(id))
        .filter(E::deleted_at_column().is_null())
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

impl SoftDelete for entity::user::Entity {
    fn id_column() -> Self::Column {
        entity::user::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        entity::user::Column::DeletedAt
    }
}

impl SoftDelete for entity::project::Entity {
    fn id_column() -> Self::Column {
        entity::project::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        entity::project::Column::DeletedAt
    }
}

impl SoftDelete for entity::sprint::Entity {
    fn id_column() -> Self::Column {
        entity::sprint::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        entity::sprint::Column::DeletedAt
    }
}

impl SoftDelete for entity::task::Entity {
    fn id_column() -> Self::Column {
        entity::task::Column::Id
    }

    fn deleted_at_column() -> Self::Column {
        entity::task::Column::DeletedAt
    }
}

/// Builds a `%needle%` pattern for a case-insensitive substring match against a
/// lower-cased column.
pub(crate) fn contains_pattern(needle: &str) -> String {
    format!("%{}%", needle.to_lowercase())
}
