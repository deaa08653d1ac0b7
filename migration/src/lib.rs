pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_user_permission_table;
mod m20260301_000003_create_department_table;
mod m20260301_000004_create_project_table;
mod m20260301_000005_create_employee_table;
mod m20260301_000006_create_employee_project_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_user_permission_table::Migration),
            Box::new(m20260301_000003_create_department_table::Migration),
            Box::new(m20260301_000004_create_project_table::Migration),
            Box::new(m20260301_000005_create_employee_table::Migration),
            Box::new(m20260301_000006_create_employee_project_table::Migration),
        ]
    }
}
