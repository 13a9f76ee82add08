use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Card {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    Phone,
    Email,
    Web,
    ImageUrl,
    ImageAlt,
    State,
    Country,
    City,
    Street,
    HouseNumber,
    Zip,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FK is declared inline; sqlite cannot add constraints after the fact
        m.create_table(
            Table::create()
                .table(Card::Table)
                .col(ColumnDef::new(Card::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Card::Title).string().not_null())
                .col(ColumnDef::new(Card::Subtitle).string().not_null())
                .col(ColumnDef::new(Card::Description).string().not_null())
                .col(ColumnDef::new(Card::Phone).string().not_null())
                .col(ColumnDef::new(Card::Email).string().not_null())
                .col(ColumnDef::new(Card::Web).string())
                .col(ColumnDef::new(Card::ImageUrl).string())
                .col(ColumnDef::new(Card::ImageAlt).string())
                .col(ColumnDef::new(Card::State).string())
                .col(ColumnDef::new(Card::Country).string().not_null())
                .col(ColumnDef::new(Card::City).string().not_null())
                .col(ColumnDef::new(Card::Street).string().not_null())
                .col(ColumnDef::new(Card::HouseNumber).integer().not_null())
                .col(ColumnDef::new(Card::Zip).string())
                .col(ColumnDef::new(Card::OwnerId).uuid())
                .col(ColumnDef::new(Card::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Card::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_card_owner")
                        .from(Card::Table, Card::OwnerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_card_owner")
                .table(Card::Table)
                .col(Card::OwnerId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Card::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
