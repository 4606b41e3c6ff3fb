pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20250901_000001_status_checks;
mod m20250901_000002_inspirations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_status_checks::Migration),
            Box::new(m20250901_000002_inspirations::Migration),
        ]
    }
}
