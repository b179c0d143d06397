use sea_orm_migration::{prelude::*, schema::*, sea_orm::DatabaseBackend};

use super::m20250101_000002_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create()
            .table(User::Table)
            .if_not_exists()
            .col(pk_auto(User::Id))
            .col(string_uniq(User::Email))
            .col(string(User::PasswordHash))
            .col(string_len(User::Role, 32))
            .col(string(User::FirstName))
            .col(string(User::LastName))
            .col(integer_null(User::CurrentProjectId))
            .col(
                timestamp_with_time_zone(User::CreatedAt)
                    .default(Expr::current_timestamp())
                    .not_null(),
            )
            .col(timestamp_with_time_zone_null(User::DeletedAt))
            .to_owned();

        // SQLite cannot add constraints to an existing table but accepts a forward
        // reference, so team membership is declared here. Other backends add it once
        // `projects` exists.
        if manager.get_database_backend() == DatabaseBackend::Sqlite {
            table.foreign_key(&mut current_project_fk());
        }

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

/// Team membership: `users.current_project_id` → `projects.id`.
pub(crate) fn current_project_fk() -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name("fk_user_current_project_id")
        .from(User::Table, User::CurrentProjectId)
        .to(Project::Table, Project::Id)
        .on_delete(ForeignKeyAction::SetNull)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    FirstName,
    LastName,
    CurrentProjectId,
    CreatedAt,
    DeletedAt,
}
