use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::validate::{validate_user_id, validate_user_vote};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Vote {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) user_vote: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VoteRequest {
    pub(crate) user_id: i64,
    pub(crate) user_vote: i16,
}

impl VoteRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_user_id(self.user_id)?;
        validate_user_vote(self.user_vote)?;
        Ok(self)
    }
}

/// Whether the upsert inserted a fresh vote or flipped an existing one.
#[derive(Debug, Clone)]
pub(crate) enum VoteOutcome {
    Created(Vote),
    Updated(Vote),
}

impl VoteOutcome {
    pub(crate) fn vote(&self) -> &Vote {
        match self {
            Self::Created(vote) | Self::Updated(vote) => vote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{VoteOutcome, VoteRequest};
    use crate::domain::vote::Vote;

    #[test]
    fn request_rejects_user_vote_two() {
        let req = VoteRequest {
            user_id: 4,
            user_vote: 2,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn request_accepts_both_directions() {
        for user_vote in [1, -1] {
            let req = VoteRequest {
                user_id: 4,
                user_vote,
            };
            assert!(req.validate().is_ok(), "user_vote {user_vote} must pass");
        }
    }

    #[test]
    fn outcome_exposes_inner_vote() {
        let vote = Vote {
            id: 1,
            post_id: 2,
            user_id: 3,
            user_vote: -1,
        };
        let outcome = VoteOutcome::Created(vote);
        assert_eq!(outcome.vote().user_vote, -1);
    }
}
