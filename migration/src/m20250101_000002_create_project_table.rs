use sea_orm_migration::{prelude::*, schema::*, sea_orm::DatabaseBackend};

use super::m20250101_000001_create_user_table::{current_project_fk, User};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Name))
                    .col(text(Project::Description))
                    .col(string_len(Project::Status, 32))
                    .col(date(Project::StartDate))
                    .col(date_null(Project::EndDate))
                    .col(integer(Project::ManagerId))
                    .col(
                        timestamp_with_time_zone(Project::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Project::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_manager_id")
                            .from(Project::Table, Project::ManagerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_manager_id")
                    .table(Project::Table)
                    .col(Project::ManagerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Team membership points back at projects. SQLite declared it with `users`.
        if manager.get_database_backend() == DatabaseBackend::Sqlite {
            return Ok(());
        }

        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .add_foreign_key(current_project_fk().get_foreign_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DatabaseBackend::Sqlite {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .drop_foreign_key(Alias::new("fk_user_current_project_id"))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    ManagerId,
    CreatedAt,
    DeletedAt,
}
