use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Movie: catalogue filtering by category
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_gender")
                    .table(Movie::Table)
                    .col(Movie::Gender)
                    .to_owned(),
            )
            .await?;

        // Movie: release date ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_release_date")
                    .table(Movie::Table)
                    .col(Movie::ReleaseDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_movie_gender").table(Movie::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movie_release_date").table(Movie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movie { Table, Gender, ReleaseDate }
