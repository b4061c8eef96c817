use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAggregate};
use crate::domain::vote::Vote;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) user_id: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct NewComment {
    pub(crate) post_id: i64,
    pub(crate) body: String,
    pub(crate) user_id: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct NewVote {
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) user_vote: i16,
}

/// Typed access to the post/comment/vote store. Reads return aggregates
/// with both relation collections loaded; deletes report affected rows and
/// never fail on missing ids.
#[async_trait]
pub(crate) trait ForumRepository: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<PostAggregate>, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<PostAggregate>, DomainError>;
    async fn insert_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn update_post(&self, post: &Post) -> Result<Post, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<u64, DomainError>;

    async fn get_comment(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Option<Comment>, DomainError>;
    async fn insert_comment(&self, input: NewComment) -> Result<Comment, DomainError>;
    async fn update_comment(&self, comment: &Comment) -> Result<Comment, DomainError>;
    async fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<u64, DomainError>;

    async fn insert_vote(&self, input: NewVote) -> Result<Vote, DomainError>;
    async fn update_vote(&self, vote: &Vote) -> Result<Vote, DomainError>;
}
