pub use sea_orm_migration::prelude::*;

mod m20240112_101500_agent;
mod m20240112_103200_settings;
mod m20240113_091800_transaction;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240112_101500_agent::Migration),
            Box::new(m20240112_103200_settings::Migration),
            Box::new(m20240113_091800_transaction::Migration),
        ]
    }
}
