use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000002_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sprint::Table)
                    .if_not_exists()
                    .col(pk_auto(Sprint::Id))
                    .col(string(Sprint::Name))
                    .col(text(Sprint::Goal))
                    .col(date(Sprint::StartDate))
                    .col(date(Sprint::EndDate))
                    .col(integer(Sprint::ProjectId))
                    .col(
                        timestamp_with_time_zone(Sprint::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Sprint::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sprint_project_id")
                            .from(Sprint::Table, Sprint::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sprint_project_id")
                    .table(Sprint::Table)
                    .col(Sprint::ProjectId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sprint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sprint {
    #[sea_orm(iden = "sprints")]
    Table,
    Id,
    Name,
    Goal,
    StartDate,
    EndDate,
    ProjectId,
    CreatedAt,
    DeletedAt,
}
