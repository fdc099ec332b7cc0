//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use blog_types::{
        CommentId, CommentRepository, CreateCommentRequest, NewComment, Pagination, PostId,
        RepoError, UserId,
    };

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn new_comment(body: &str, post_id: u64, user_id: u64) -> NewComment {
        NewComment::from_request(
            CreateCommentRequest {
                body: body.to_string(),
            },
            PostId::new(post_id),
            UserId::new(user_id),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_comment() {
        let repo = setup_repo().await;

        let comment = repo.insert(new_comment("hello", 5, 9)).await.unwrap();

        assert_eq!(comment.id, CommentId::new(1));
        assert_eq!(comment.body, "hello");
        assert_eq!(comment.post_id, PostId::new(5));
        assert_eq!(comment.user_id, UserId::new(9));
        assert_eq!(comment.created_at, comment.updated_at);
    }

    #[tokio::test]
    async fn test_list_filters_by_post() {
        let repo = setup_repo().await;

        repo.insert(new_comment("first", 1, 1)).await.unwrap();
        repo.insert(new_comment("other post", 2, 1)).await.unwrap();
        repo.insert(new_comment("second", 1, 2)).await.unwrap();

        let comments = repo
            .all_comments_by_post_id(Pagination::default(), PostId::new(1))
            .await
            .unwrap();

        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|c| c.post_id == PostId::new(1)));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = setup_repo().await;

        for body in ["a", "b", "c"] {
            repo.insert(new_comment(body, 1, 1)).await.unwrap();
        }

        let bodies: Vec<String> = repo
            .all_comments_by_post_id(Pagination::default(), PostId::new(1))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.body)
            .collect();

        assert_eq!(bodies, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_list_applies_limit_and_offset() {
        let repo = setup_repo().await;

        for i in 0..5 {
            repo.insert(new_comment(&format!("comment {i}"), 3, 1))
                .await
                .unwrap();
        }

        let page = repo
            .all_comments_by_post_id(Pagination::new(2, 1), PostId::new(3))
            .await
            .unwrap();

        let bodies: Vec<&str> = page.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["comment 3", "comment 2"]);
    }

    #[tokio::test]
    async fn test_list_offset_past_end_is_empty() {
        let repo = setup_repo().await;

        repo.insert(new_comment("only", 1, 1)).await.unwrap();

        let page = repo
            .all_comments_by_post_id(Pagination::new(10, 10), PostId::new(1))
            .await
            .unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_list_unknown_post_is_empty() {
        let repo = setup_repo().await;

        let comments = repo
            .all_comments_by_post_id(Pagination::default(), PostId::new(404))
            .await
            .unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_insert_identifier_out_of_range() {
        let repo = setup_repo().await;

        let result = repo.insert(new_comment("big", u64::MAX, 1)).await;

        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let repo = setup_repo().await;

        repo.create_schema().await.unwrap();
        repo.insert(new_comment("still works", 1, 1)).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_database_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blog.db");
        let url = format!("sqlite://{}", path.display());

        let repo = SqliteRepo::new(&url).await.unwrap();
        repo.insert(new_comment("persisted", 1, 1)).await.unwrap();

        assert!(path.exists());
    }
}
