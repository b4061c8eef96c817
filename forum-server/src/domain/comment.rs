use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::validate::{normalize_non_empty, validate_user_id};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) body: String,
    pub(crate) user_id: i64,
}

impl Comment {
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        normalize_non_empty("body", &self.body)?;
        validate_user_id(self.user_id)
    }

    pub(crate) fn apply_patch(&mut self, patch: CommentPatch) {
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCommentRequest {
    pub(crate) body: String,
    pub(crate) user_id: i64,
}

impl CreateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let body = normalize_non_empty("body", &self.body)?;
        validate_user_id(self.user_id)?;
        Ok(Self {
            body,
            user_id: self.user_id,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CommentPatch {
    pub(crate) body: Option<String>,
    pub(crate) user_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::{Comment, CommentPatch, CreateCommentRequest};

    #[test]
    fn create_request_rejects_empty_body() {
        let req = CreateCommentRequest {
            body: String::new(),
            user_id: 4,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_rejects_out_of_range_user_id() {
        let req = CreateCommentRequest {
            body: "nice".to_string(),
            user_id: 42,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn apply_patch_keeps_unset_fields() {
        let mut comment = Comment {
            id: 1,
            post_id: 2,
            body: "original".to_string(),
            user_id: 4,
        };
        comment.apply_patch(CommentPatch {
            body: Some("edited".to_string()),
            user_id: None,
        });

        assert_eq!(comment.body, "edited");
        assert_eq!(comment.user_id, 4);
        assert_eq!(comment.post_id, 2);
    }
}
