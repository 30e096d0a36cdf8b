use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CvFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvFiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CvFiles::Filename).text().not_null())
                    .col(ColumnDef::new(CvFiles::FileUrl).text().not_null())
                    .col(ColumnDef::new(CvFiles::FileSize).big_integer())
                    .col(ColumnDef::new(CvFiles::MimeType).text())
                    .col(
                        ColumnDef::new(CvFiles::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CvFiles::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active CV
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_cv_files_single_active
                ON cv_files (is_active)
                WHERE is_active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_cv_files_single_active;")
            .await?;

        manager
            .drop_table(Table::drop().table(CvFiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvFiles {
    Table,
    Id,
    Filename,
    FileUrl,
    FileSize,
    MimeType,
    IsActive,
    UploadedAt,
}
