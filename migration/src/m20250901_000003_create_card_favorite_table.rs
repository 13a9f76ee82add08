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
}

#[derive(DeriveIden)]
enum CardFavorite {
    Table,
    CardId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Composite PK keeps the favorite set a set; the insert path relies on
        // ON CONFLICT DO NOTHING against it
        m.create_table(
            Table::create()
                .table(CardFavorite::Table)
                .if_not_exists()
                .col(ColumnDef::new(CardFavorite::CardId).uuid().not_null())
                .col(ColumnDef::new(CardFavorite::UserId).uuid().not_null())
                .col(ColumnDef::new(CardFavorite::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_card_favorite")
                        .col(CardFavorite::CardId)
                        .col(CardFavorite::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_card_favorite_card")
                        .from(CardFavorite::Table, CardFavorite::CardId)
                        .to(Card::Table, Card::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_card_favorite_user")
                        .from(CardFavorite::Table, CardFavorite::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_card_favorite_card")
                .table(CardFavorite::Table)
                .col(CardFavorite::CardId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_card_favorite_user")
                .table(CardFavorite::Table)
                .col(CardFavorite::UserId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(CardFavorite::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
