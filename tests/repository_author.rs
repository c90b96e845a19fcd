use blog_core::domain::entities::{AuthorPatch, NewAuthor};
use blog_core::domain::repositories::AuthorRepository;
use blog_core::domain::validation::ValidationError;
use blog_core::error::AppError;
use blog_core::infrastructure::persistence::PgAuthorRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_author(pool: PgPool) {
    let repo = PgAuthorRepository::new(Arc::new(pool));

    let result = repo.create(NewAuthor::new("Ada", "5551234567")).await;

    assert!(result.is_ok());
    let author = result.unwrap();
    assert_eq!(author.name, "Ada");
    assert_eq!(author.phone_number, "5551234567");
    assert!(author.updated_at.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_by_id_and_name(pool: PgPool) {
    let repo = PgAuthorRepository::new(Arc::new(pool));
    let created = repo
        .create(NewAuthor::new("Grace", "5551234568"))
        .await
        .unwrap();

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id, Some(created.clone()));

    let by_name = repo.find_by_name("Grace").await.unwrap();
    assert_eq!(by_name.map(|a| a.id), Some(created.id));

    assert!(repo.find_by_name("grace").await.unwrap().is_none());
    assert!(repo.find_by_id(created.id + 1000).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_unique_constraint_maps_to_name_taken(pool: PgPool) {
    let repo = PgAuthorRepository::new(Arc::new(pool));
    repo.create(NewAuthor::new("Ada", "5551234567"))
        .await
        .unwrap();

    let err = repo
        .create(NewAuthor::new("Ada", "5559876543"))
        .await
        .unwrap_err();

    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::NameTaken {
            name: "Ada".to_string()
        })
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_authors(pool: PgPool) {
    let repo = PgAuthorRepository::new(Arc::new(pool));

    for i in 1..=3 {
        repo.create(NewAuthor::new(format!("Author {}", i), format!("555000000{}", i)))
            .await
            .unwrap();
    }

    let authors = repo.list().await.unwrap();

    assert_eq!(authors.len(), 3);
    assert!(authors.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_author(pool: PgPool) {
    let repo = PgAuthorRepository::new(Arc::new(pool));
    let created = repo
        .create(NewAuthor::new("Ada", "5551234567"))
        .await
        .unwrap();

    let patch = AuthorPatch {
        phone_number: Some("5550000000".to_string()),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap();

    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.phone_number, "5550000000");
    assert!(updated.updated_at.is_some());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_missing_author(pool: PgPool) {
    let repo = PgAuthorRepository::new(Arc::new(pool));

    let patch = AuthorPatch {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let err = repo.update(999, patch).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_phone_check_constraint(pool: PgPool) {
    let result = sqlx::query("INSERT INTO authors (name, phone_number) VALUES ($1, $2)")
        .bind("Bypass")
        .bind("12345")
        .execute(&pool)
        .await;

    assert!(result.is_err());
}
