use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000001_create_user_table::User, m20250101_000002_create_project_table::Project,
    m20250101_000003_create_sprint_table::Sprint,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(string(Task::Title))
                    .col(text(Task::Description))
                    .col(string_len(Task::Status, 32))
                    .col(string_len(Task::Priority, 16))
                    .col(date_null(Task::DueDate))
                    .col(integer(Task::ProjectId))
                    .col(integer_null(Task::SprintId))
                    .col(integer_null(Task::AssigneeId))
                    .col(
                        timestamp_with_time_zone(Task::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Task::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_project_id")
                            .from(Task::Table, Task::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_sprint_id")
                            .from(Task::Table, Task::SprintId)
                            .to(Sprint::Table, Sprint::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignee_id")
                            .from(Task::Table, Task::AssigneeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_task_project_id", Task::ProjectId),
            ("idx_task_sprint_id", Task::SprintId),
            ("idx_task_assignee_id", Task::AssigneeId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Task::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    #[sea_orm(iden = "tasks")]
    Table,
    Id,
    Title,
    Description,
    Status,
    Priority,
    DueDate,
    ProjectId,
    SprintId,
    AssigneeId,
    CreatedAt,
    DeletedAt,
}
