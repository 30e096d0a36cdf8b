pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_contact_messages;
mod m20260301_000002_create_personal_info;
mod m20260301_000003_create_skills;
mod m20260301_000004_create_education;
mod m20260301_000005_create_projects;
mod m20260301_000006_create_cv_files;
mod m20260301_000007_create_profile_images;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_contact_messages::Migration),
            Box::new(m20260301_000002_create_personal_info::Migration),
            Box::new(m20260301_000003_create_skills::Migration),
            Box::new(m20260301_000004_create_education::Migration),
            Box::new(m20260301_000005_create_projects::Migration),
            Box::new(m20260301_000006_create_cv_files::Migration),
            Box::new(m20260301_000007_create_profile_images::Migration),
        ]
    }
}
