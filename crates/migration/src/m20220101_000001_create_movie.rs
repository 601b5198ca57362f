//! Create `movie` table.
//!
//! `name` carries the unique constraint that backs duplicate-title detection.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(uuid(Movie::Id).primary_key())
                    .col(string_len(Movie::Name, 255).unique_key().not_null())
                    .col(text_null(Movie::Synopsis))
                    .col(string_len_null(Movie::Trailer, 512))
                    .col(date_null(Movie::ReleaseDate))
                    .col(double_null(Movie::BoxOffice))
                    .col(string_len_null(Movie::Poster, 512))
                    .col(string_len_null(Movie::Gender, 64))
                    .col(timestamp_with_time_zone(Movie::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Movie::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Name,
    Synopsis,
    Trailer,
    ReleaseDate,
    BoxOffice,
    Poster,
    Gender,
    CreatedAt,
    UpdatedAt,
}
