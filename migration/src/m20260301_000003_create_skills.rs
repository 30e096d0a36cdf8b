use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).text().not_null())
                    .col(ColumnDef::new(Skills::Category).text().not_null())
                    .col(
                        ColumnDef::new(Skills::Level)
                            .integer()
                            .not_null()
                            .default(50)
                            .check(Expr::col(Skills::Level).between(0, 100)),
                    )
                    .col(ColumnDef::new(Skills::Icon).text())
                    .col(
                        ColumnDef::new(Skills::Color)
                            .text()
                            .not_null()
                            .default("from-blue-500 to-cyan-500"),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
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
                ALTER TABLE skills ADD CONSTRAINT skills_category_known CHECK (category IN (
                    'Frontend Development',
                    'Backend Development',
                    'Database & Data',
                    'Tools & Technologies',
                    'AI & Machine Learning',
                    'Soft Skills'
                ));

                CREATE INDEX IF NOT EXISTS idx_skills_category_name
                ON skills (category, name);

                CREATE TRIGGER update_skills_updated_at
                BEFORE UPDATE ON skills
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
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_skills_updated_at ON skills;
                DROP INDEX IF EXISTS idx_skills_category_name;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Level,
    Icon,
    Color,
    CreatedAt,
    UpdatedAt,
}
