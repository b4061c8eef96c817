use chrono::Utc;

use crate::data::forum_repository::{ForumRepository, NewComment, NewPost, NewVote};
use crate::domain::comment::{CommentPatch, CreateCommentRequest};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, PostAggregate, PostPatch, PostView};
use crate::domain::vote::{VoteOutcome, VoteRequest};

pub(crate) struct ForumService<R: ForumRepository> {
    repo: R,
}

impl<R: ForumRepository> ForumService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    async fn load_post(&self, id: i64) -> Result<PostAggregate, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {id}")))
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<PostView>, DomainError> {
        let aggregates = self.repo.list_posts().await?;
        Ok(aggregates.into_iter().map(PostAggregate::present).collect())
    }

    pub(crate) async fn create_post(
        &self,
        req: CreatePostRequest,
    ) -> Result<PostView, DomainError> {
        let req = req.validate()?;

        let post = self
            .repo
            .insert_post(NewPost {
                title: req.title,
                body: req.body,
                user_id: req.user_id,
            })
            .await?;

        Ok(PostAggregate {
            post,
            comments: Vec::new(),
            votes: Vec::new(),
        }
        .present())
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<PostView, DomainError> {
        Ok(self.load_post(id).await?.present())
    }

    pub(crate) async fn update_post(
        &self,
        id: i64,
        patch: PostPatch,
    ) -> Result<PostView, DomainError> {
        let aggregate = self.load_post(id).await?;

        let mut post = aggregate.post;
        post.apply_patch(patch);
        post.updated_at = Utc::now();
        post.validate()?;

        let post = self.repo.update_post(&post).await?;
        Ok(PostAggregate {
            post,
            comments: aggregate.comments,
            votes: aggregate.votes,
        }
        .present())
    }

    /// Idempotent: deleting an absent post reports zero affected rows.
    pub(crate) async fn delete_post(&self, id: i64) -> Result<u64, DomainError> {
        self.repo.delete_post(id).await
    }

    pub(crate) async fn add_comment(
        &self,
        post_id: i64,
        req: CreateCommentRequest,
    ) -> Result<PostView, DomainError> {
        self.load_post(post_id).await?;
        let req = req.validate()?;

        self.repo
            .insert_comment(NewComment {
                post_id,
                body: req.body,
                user_id: req.user_id,
            })
            .await?;

        self.get_post(post_id).await
    }

    pub(crate) async fn update_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        patch: CommentPatch,
    ) -> Result<PostView, DomainError> {
        self.load_post(post_id).await?;

        let mut comment = self
            .repo
            .get_comment(post_id, comment_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("comment id: {comment_id}")))?;

        comment.apply_patch(patch);
        comment.validate()?;

        self.repo.update_comment(&comment).await?;
        self.get_post(post_id).await
    }

    pub(crate) async fn delete_comment(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> Result<u64, DomainError> {
        self.repo.delete_comment(post_id, comment_id).await
    }

    /// One vote per (post, user): an existing vote is flipped in place,
    /// otherwise a fresh one is inserted. The look-up-then-write pair is
    /// not transactional, so concurrent votes by the same user can still
    /// race into duplicate rows.
    pub(crate) async fn create_or_update_vote(
        &self,
        post_id: i64,
        req: VoteRequest,
    ) -> Result<VoteOutcome, DomainError> {
        let req = req.validate()?;
        let aggregate = self.load_post(post_id).await?;

        if let Some(mut vote) = aggregate
            .votes
            .into_iter()
            .find(|vote| vote.user_id == req.user_id)
        {
            vote.user_vote = req.user_vote;
            let vote = self.repo.update_vote(&vote).await?;
            return Ok(VoteOutcome::Updated(vote));
        }

        let vote = self
            .repo
            .insert_vote(NewVote {
                post_id,
                user_id: req.user_id,
                user_vote: req.user_vote,
            })
            .await?;
        Ok(VoteOutcome::Created(vote))
    }
}
