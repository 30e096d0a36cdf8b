use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ProfileImages::Filename).text().not_null())
                    .col(ColumnDef::new(ProfileImages::ImageUrl).text().not_null())
                    .col(
                        ColumnDef::new(ProfileImages::AltText)
                            .text()
                            .default("Profile Image"),
                    )
                    .col(
                        ColumnDef::new(ProfileImages::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProfileImages::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active profile image
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_profile_images_single_active
                ON profile_images (is_active)
                WHERE is_active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_profile_images_single_active;")
            .await?;

        manager
            .drop_table(Table::drop().table(ProfileImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProfileImages {
    Table,
    Id,
    Filename,
    ImageUrl,
    AltText,
    IsActive,
    UploadedAt,
}
