use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::error::DomainError;
use super::validate::{normalize_non_empty, validate_user_id};
use super::vote::Vote;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Post {
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        normalize_non_empty("title", &self.title)?;
        normalize_non_empty("body", &self.body)?;
        validate_user_id(self.user_id)
    }

    /// Patch fields overwrite, absent fields keep their prior values.
    pub(crate) fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) user_id: i64,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let title = normalize_non_empty("title", &self.title)?;
        let body = normalize_non_empty("body", &self.body)?;
        validate_user_id(self.user_id)?;
        Ok(Self {
            title,
            body,
            user_id: self.user_id,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PostPatch {
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) user_id: Option<i64>,
}

/// A post with its relations loaded, the unit every read returns.
#[derive(Debug, Clone)]
pub(crate) struct PostAggregate {
    pub(crate) post: Post,
    pub(crate) comments: Vec<Comment>,
    pub(crate) votes: Vec<Vote>,
}

impl PostAggregate {
    /// Derives the response-shaped view. Counters are computed fresh on
    /// every read and are never persisted.
    pub(crate) fn present(self) -> PostView {
        let comments_total = self.comments.len() as i64;
        let up_votes_total = self.votes.iter().filter(|v| v.user_vote == 1).count() as i64;
        let down_votes_total = self.votes.iter().filter(|v| v.user_vote == -1).count() as i64;

        PostView {
            id: self.post.id,
            title: self.post.title,
            body: self.post.body,
            user_id: self.post.user_id,
            created_at: self.post.created_at,
            updated_at: self.post.updated_at,
            comments: self.comments,
            votes: self.votes,
            comments_total,
            up_votes_total,
            down_votes_total,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PostView {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) votes: Vec<Vote>,
    pub(crate) comments_total: i64,
    pub(crate) up_votes_total: i64,
    pub(crate) down_votes_total: i64,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{CreatePostRequest, Post, PostAggregate, PostPatch};
    use crate::domain::comment::Comment;
    use crate::domain::error::DomainError;
    use crate::domain::vote::Vote;

    fn sample_post() -> Post {
        Post {
            id: 1,
            title: "title".to_string(),
            body: "body".to_string(),
            user_id: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_vote(id: i64, user_id: i64, user_vote: i16) -> Vote {
        Vote {
            id,
            post_id: 1,
            user_id,
            user_vote,
        }
    }

    #[test]
    fn create_request_rejects_empty_title() {
        let req = CreatePostRequest {
            title: "   ".to_string(),
            body: "body".to_string(),
            user_id: 3,
        };
        let err = req.validate().expect_err("title must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation { field: "title", .. }
        ));
    }

    #[test]
    fn create_request_rejects_out_of_range_user_id() {
        for user_id in [0, 11] {
            let req = CreatePostRequest {
                title: "title".to_string(),
                body: "body".to_string(),
                user_id,
            };
            assert!(req.validate().is_err(), "user_id {user_id} must fail");
        }
        for user_id in [1, 10] {
            let req = CreatePostRequest {
                title: "title".to_string(),
                body: "body".to_string(),
                user_id,
            };
            assert!(req.validate().is_ok(), "user_id {user_id} must pass");
        }
    }

    #[test]
    fn apply_patch_overwrites_only_present_fields() {
        let mut post = sample_post();
        post.apply_patch(PostPatch {
            title: Some("new title".to_string()),
            body: None,
            user_id: None,
        });

        assert_eq!(post.title, "new title");
        assert_eq!(post.body, "body");
        assert_eq!(post.user_id, 3);
    }

    #[test]
    fn present_with_no_relations_yields_zero_counters() {
        let view = PostAggregate {
            post: sample_post(),
            comments: Vec::new(),
            votes: Vec::new(),
        }
        .present();

        assert_eq!(view.comments_total, 0);
        assert_eq!(view.up_votes_total, 0);
        assert_eq!(view.down_votes_total, 0);
    }

    #[test]
    fn present_counts_comments_and_split_votes() {
        let view = PostAggregate {
            post: sample_post(),
            comments: vec![Comment {
                id: 1,
                post_id: 1,
                body: "nice".to_string(),
                user_id: 4,
            }],
            votes: vec![
                sample_vote(1, 2, 1),
                sample_vote(2, 3, 1),
                sample_vote(3, 4, -1),
            ],
        }
        .present();

        assert_eq!(view.comments_total, 1);
        assert_eq!(view.up_votes_total, 2);
        assert_eq!(view.down_votes_total, 1);
        assert_eq!(
            view.up_votes_total + view.down_votes_total,
            view.votes.len() as i64
        );
    }
}
