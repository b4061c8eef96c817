use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::data::forum_repository::{ForumRepository, NewComment, NewPost, NewVote};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAggregate};
use crate::domain::vote::Vote;

#[derive(Debug, Clone)]
pub(crate) struct PostgresForumRepository {
    pool: PgPool,
}

impl PostgresForumRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_comments(&self, post_ids: &[i64]) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_id, body, user_id
            FROM comments
            WHERE post_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn load_votes(&self, post_ids: &[i64]) -> Result<Vec<Vote>, DomainError> {
        let rows = sqlx::query_as::<_, VoteRow>(
            r#"
            SELECT id, post_id, user_id, user_vote
            FROM votes
            WHERE post_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Vote::from).collect())
    }

    async fn load_aggregates(&self, posts: Vec<Post>) -> Result<Vec<PostAggregate>, DomainError> {
        let post_ids: Vec<i64> = posts.iter().map(|post| post.id).collect();

        let mut comments: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in self.load_comments(&post_ids).await? {
            comments.entry(comment.post_id).or_default().push(comment);
        }

        let mut votes: HashMap<i64, Vec<Vote>> = HashMap::new();
        for vote in self.load_votes(&post_ids).await? {
            votes.entry(vote.post_id).or_default().push(vote);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = comments.remove(&post.id).unwrap_or_default();
                let votes = votes.remove(&post.id).unwrap_or_default();
                PostAggregate {
                    post,
                    comments,
                    votes,
                }
            })
            .collect())
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    body: String,
    user_id: i64,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            body: row.body,
            user_id: row.user_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct VoteRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    user_vote: i16,
}

impl From<VoteRow> for Vote {
    fn from(row: VoteRow) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            user_id: row.user_id,
            user_vote: row.user_vote,
        }
    }
}

#[async_trait]
impl ForumRepository for PostgresForumRepository {
    async fn list_posts(&self) -> Result<Vec<PostAggregate>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, user_id, created_at, updated_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.load_aggregates(rows.into_iter().map(Post::from).collect())
            .await
    }

    async fn get_post(&self, id: i64) -> Result<Option<PostAggregate>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut aggregates = self.load_aggregates(vec![Post::from(row)]).await?;
        Ok(aggregates.pop())
    }

    async fn insert_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, body, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, user_id, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(row))
    }

    async fn update_post(&self, post: &Post) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = $2,
                body = $3,
                user_id = $4,
                updated_at = $5
            WHERE id = $1
            RETURNING id, title, body, user_id, created_at, updated_at
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.user_id)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(row))
    }

    async fn delete_post(&self, id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    async fn get_comment(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_id, body, user_id
            FROM comments
            WHERE id = $1 AND post_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Comment::from))
    }

    async fn insert_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (post_id, body, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, body, user_id
            "#,
        )
        .bind(input.post_id)
        .bind(&input.body)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(row))
    }

    async fn update_comment(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments
            SET body = $2,
                user_id = $3
            WHERE id = $1
            RETURNING id, post_id, body, user_id
            "#,
        )
        .bind(comment.id)
        .bind(&comment.body)
        .bind(comment.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(row))
    }

    async fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1 AND post_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    async fn insert_vote(&self, input: NewVote) -> Result<Vote, DomainError> {
        let row = sqlx::query_as::<_, VoteRow>(
            r#"
            INSERT INTO votes (post_id, user_id, user_vote)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id, user_vote
            "#,
        )
        .bind(input.post_id)
        .bind(input.user_id)
        .bind(input.user_vote)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Vote::from(row))
    }

    async fn update_vote(&self, vote: &Vote) -> Result<Vote, DomainError> {
        let row = sqlx::query_as::<_, VoteRow>(
            r#"
            UPDATE votes
            SET user_vote = $2
            WHERE id = $1
            RETURNING id, post_id, user_id, user_vote
            "#,
        )
        .bind(vote.id)
        .bind(vote.user_vote)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Vote::from(row))
    }
}

fn map_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23503")
    {
        return DomainError::NotFound("post".to_string());
    }
    DomainError::Unexpected(err.to_string())
}
