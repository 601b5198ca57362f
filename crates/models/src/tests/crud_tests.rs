use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use super::setup_test_db;
use crate::{movie, user};

fn movie_am(name: &str) -> movie::ActiveModel {
    let now = Utc::now().into();
    movie::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        synopsis: Set(Some("synopsis".into())),
        trailer: Set(None),
        release_date: Set(NaiveDate::from_ymd_opt(2002, 8, 30)),
        box_office: Set(Some(30_641_770.0)),
        poster: Set(Some("posters/cidade.jpg".into())),
        gender: Set(Some("crime".into())),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

fn user_am(email: &str) -> user::ActiveModel {
    let now = Utc::now().into();
    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Test User".into()),
        email: Set(email.to_string()),
        password_hash: Set("$argon2id$placeholder".into()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Test movie CRUD operations
#[tokio::test]
async fn test_movie_crud() -> anyhow::Result<()> {
    let (db, _dir) = setup_test_db().await?;

    let created = movie_am("Cidade de Deus").insert(&db).await?;
    assert_eq!(created.name, "Cidade de Deus");
    assert_eq!(created.release_date, NaiveDate::from_ymd_opt(2002, 8, 30));

    let found = movie::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|m| m.id), Some(created.id));

    let by_name = movie::Entity::find()
        .filter(movie::Column::Name.eq("Cidade de Deus"))
        .one(&db)
        .await?;
    assert!(by_name.is_some());

    let mut am: movie::ActiveModel = created.clone().into();
    am.gender = Set(Some("drama".into()));
    let updated = am.update(&db).await?;
    assert_eq!(updated.gender.as_deref(), Some("drama"));

    movie::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(movie::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// The unique constraint on `movie.name` rejects a second insert
#[tokio::test]
async fn test_movie_name_unique_constraint() -> anyhow::Result<()> {
    let (db, _dir) = setup_test_db().await?;

    movie_am("Tropa de Elite").insert(&db).await?;
    let err = movie_am("Tropa de Elite").insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));
    assert_eq!(movie::Entity::find().count(&db).await?, 1);
    Ok(())
}

/// Test user CRUD operations and email uniqueness
#[tokio::test]
async fn test_user_crud() -> anyhow::Result<()> {
    let (db, _dir) = setup_test_db().await?;

    let email = format!("test_{}@example.com", Uuid::new_v4());
    let created = user_am(&email).insert(&db).await?;
    assert_eq!(created.email, email);

    let by_email = user::Entity::find().filter(user::Column::Email.eq(email.clone())).one(&db).await?;
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    let err = user_am(&email).insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(user::Entity::find().count(&db).await?, 0);
    Ok(())
}
