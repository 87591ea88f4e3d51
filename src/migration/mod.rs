//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260119_000001_create_catalog;
mod m20260119_000002_create_cases;
mod m20260119_000003_create_relations;
mod m20260119_000004_seed_platforms;

pub use m20260119_000004_seed_platforms::DEFAULT_PLATFORMS;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260119_000001_create_catalog::Migration),
            Box::new(m20260119_000002_create_cases::Migration),
            Box::new(m20260119_000003_create_relations::Migration),
            Box::new(m20260119_000004_seed_platforms::Migration),
        ]
    }
}
