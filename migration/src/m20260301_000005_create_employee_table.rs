use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len(Employee::FirstName, 100))
                    .col(string_len(Employee::LastName, 100))
                    .col(date_null(Employee::Birthdate))
                    .col(integer_null(Employee::DepartmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_department_id")
                            .from(Employee::Table, Employee::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Birthdate,
    DepartmentId,
}
