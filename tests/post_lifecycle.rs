mod common;

use blog_core::prelude::*;
use common::{content_of, post_service, valid_post};

#[tokio::test]
async fn test_clickbait_titles() {
    let service = post_service();

    let post = service
        .create_post(valid_post("Top 10 Secrets"))
        .await
        .unwrap();
    assert_eq!(post.title, "Top 10 Secrets");
    assert_eq!(post.category, Category::Fiction);

    for title in ["You Won't Believe This", "GUESS who", "The stopwatch"] {
        assert!(service.create_post(valid_post(title)).await.is_ok(), "{title}");
    }

    let err = service
        .create_post(valid_post("My Boring Day"))
        .await
        .unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::TitleNotClickbait));
    assert_eq!(err.to_string(), "Title must be clickbait-y!");

    let err = service.create_post(valid_post("")).await.unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::TitleRequired));
}

#[tokio::test]
async fn test_content_length_boundary() {
    let service = post_service();

    let short = NewPost {
        content: content_of(249),
        ..valid_post("Top tips")
    };
    let err = service.create_post(short).await.unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::ContentTooShort { actual: 249, .. })
    ));

    let exact = NewPost {
        content: content_of(250),
        ..valid_post("Top tips")
    };
    assert!(service.create_post(exact).await.is_ok());

    let empty = NewPost {
        content: String::new(),
        ..valid_post("Top tips")
    };
    assert!(service.create_post(empty).await.is_err());
}

#[tokio::test]
async fn test_summary_length_boundary() {
    let service = post_service();

    let long = NewPost {
        summary: Some(content_of(251)),
        ..valid_post("Top tips")
    };
    let err = service.create_post(long).await.unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::SummaryTooLong { actual: 251, .. })
    ));

    let exact = NewPost {
        summary: Some(content_of(250)),
        ..valid_post("Top tips")
    };
    assert!(service.create_post(exact).await.is_ok());

    let absent = NewPost {
        summary: None,
        ..valid_post("Top tips")
    };
    assert!(service.create_post(absent).await.is_ok());
}

#[tokio::test]
async fn test_category_membership() {
    let service = post_service();

    for (raw, expected) in [
        ("Fiction", Category::Fiction),
        ("Non-Fiction", Category::NonFiction),
    ] {
        let post = service
            .create_post(NewPost {
                category: raw.to_string(),
                ..valid_post("Secret recipes")
            })
            .await
            .unwrap();
        assert_eq!(post.category, expected);
    }

    let err = service
        .create_post(NewPost {
            category: "Drama".to_string(),
            ..valid_post("Secret recipes")
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::InvalidCategory {
            value: "Drama".to_string()
        })
    );
    assert_eq!(service.list_posts(PostFilter::default()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_posts_by_category() {
    let service = post_service();
    service.create_post(valid_post("Top 1")).await.unwrap();
    service
        .create_post(NewPost {
            category: "Non-Fiction".to_string(),
            ..valid_post("Top 2")
        })
        .await
        .unwrap();
    service.create_post(valid_post("Top 3")).await.unwrap();

    let fiction = service
        .list_posts(PostFilter::category(Category::Fiction))
        .await
        .unwrap();
    let titles: Vec<_> = fiction.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Top 1", "Top 3"]);

    let non_fiction = service
        .list_posts(PostFilter::category(Category::NonFiction))
        .await
        .unwrap();
    assert_eq!(non_fiction.len(), 1);
}

#[tokio::test]
async fn test_update_post_fields() {
    let service = post_service();
    let post = service.create_post(valid_post("Top tips")).await.unwrap();
    assert!(post.updated_at.is_none());

    let updated = service
        .update_post(
            post.id,
            PostPatch {
                title: Some("Guess again".to_string()),
                category: Some("Non-Fiction".to_string()),
                summary: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Guess again");
    assert_eq!(updated.category, Category::NonFiction);
    assert_eq!(updated.summary, None);
    assert_eq!(updated.content, post.content);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_failed_update_leaves_post_unchanged() {
    let service = post_service();
    let post = service.create_post(valid_post("Top tips")).await.unwrap();

    let err = service
        .update_post(
            post.id,
            PostPatch {
                title: Some("Still top".to_string()),
                content: Some(content_of(10)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::ContentTooShort { .. })
    ));

    let err = service
        .update_post(
            post.id,
            PostPatch {
                category: Some("fiction".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.as_validation().map(|v| v.field()), Some("category"));

    assert_eq!(service.get_post(post.id).await.unwrap(), post);
}

#[tokio::test]
async fn test_missing_post() {
    let service = post_service();

    let err = service.get_post(7).await.unwrap_err();
    assert_eq!(err.code(), "not_found");

    let err = service
        .update_post(
            7,
            PostPatch {
                title: Some("Top".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}
