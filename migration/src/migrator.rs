use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601100001_create_users::Migration),
            Box::new(migrations::m202601100002_create_organizations::Migration),
            Box::new(migrations::m202601100003_create_organization_members::Migration),
            Box::new(migrations::m202601100004_create_subscriptions::Migration),
            Box::new(migrations::m202601120001_create_events::Migration),
            Box::new(migrations::m202601150001_create_attendance_records::Migration),
        ]
    }
}
