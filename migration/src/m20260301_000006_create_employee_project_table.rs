use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000004_create_project_table::Project,
    m20260301_000005_create_employee_table::Employee,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeProject::Table)
                    .if_not_exists()
                    .col(integer(EmployeeProject::EmployeeId))
                    .col(integer(EmployeeProject::ProjectId))
                    .primary_key(
                        Index::create()
                            .col(EmployeeProject::EmployeeId)
                            .col(EmployeeProject::ProjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_project_employee_id")
                            .from(EmployeeProject::Table, EmployeeProject::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_project_project_id")
                            .from(EmployeeProject::Table, EmployeeProject::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeProject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeProject {
    Table,
    EmployeeId,
    ProjectId,
}
