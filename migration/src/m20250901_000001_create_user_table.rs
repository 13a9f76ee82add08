use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(
                        ColumnDef::new(User::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(User::FirstName)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::MiddleName)
                            .string()
                    )
                    .col(
                        ColumnDef::new(User::LastName)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Phone)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::PasswordHash)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::State)
                            .string()
                    )
                    .col(
                        ColumnDef::new(User::Country)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::City)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Street)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::HouseNumber)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::ImageUrl)
                            .string()
                    )
                    .col(
                        ColumnDef::new(User::ImageAlt)
                            .string()
                    )
                    .col(
                        ColumnDef::new(User::Gender)
                            .string()
                    )
                    .col(
                        ColumnDef::new(User::UserType)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_email")
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(User::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    Phone,
    Email,
    PasswordHash,
    State,
    Country,
    City,
    Street,
    HouseNumber,
    ImageUrl,
    ImageAlt,
    Gender,
    UserType,
    CreatedAt,
    UpdatedAt,
}
