use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create registrations table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Registrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Registrations::Name).text().not_null())
                    .col(ColumnDef::new(Registrations::Email).text().not_null())
                    .col(ColumnDef::new(Registrations::Phone).text().not_null())
                    .col(ColumnDef::new(Registrations::Level).text().not_null())
                    .col(ColumnDef::new(Registrations::Plan).text().not_null())
                    .col(
                        ColumnDef::new(Registrations::Language)
                            .string_len(16)
                            .not_null()
                            .default("en"),
                    )
                    .col(
                        ColumnDef::new(Registrations::Status)
                            .string_len(32)
                            .not_null()
                            .default("pending"),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Dashboard reads everything newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_registrations_created_at
                ON registrations (created_at DESC, id DESC);
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
                DROP INDEX IF EXISTS idx_registrations_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registrations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Registrations {
    Table,
    Id,
    CreatedAt,
    Name,
    Email,
    Phone,
    Level,
    Plan,
    Language,
    Status,
}
