use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Education::Degree).text().not_null())
                    .col(ColumnDef::new(Education::Institution).text().not_null())
                    .col(ColumnDef::new(Education::Location).text())
                    .col(ColumnDef::new(Education::StartDate).date())
                    .col(ColumnDef::new(Education::EndDate).date())
                    .col(ColumnDef::new(Education::Cgpa).text())
                    .col(ColumnDef::new(Education::Description).text())
                    .col(
                        ColumnDef::new(Education::Achievements)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Education::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Education::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE education ADD CONSTRAINT education_dates_ordered
                CHECK (end_date IS NULL OR start_date IS NULL OR end_date >= start_date);

                CREATE TRIGGER update_education_updated_at
                BEFORE UPDATE ON education
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_education_updated_at ON education;")
            .await?;

        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    Institution,
    Location,
    StartDate,
    EndDate,
    Cgpa,
    Description,
    Achievements,
    IsCurrent,
    CreatedAt,
    UpdatedAt,
}
