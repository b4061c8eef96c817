use super::error::DomainError;

/// Authors are the fixed 1..=10 directory users.
pub(crate) const USER_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

pub(crate) fn normalize_non_empty(
    field: &'static str,
    value: &str,
) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation {
            field,
            message: "must not be empty",
        });
    }
    Ok(value.to_string())
}

pub(crate) fn validate_user_id(value: i64) -> Result<(), DomainError> {
    if !USER_ID_RANGE.contains(&value) {
        return Err(DomainError::Validation {
            field: "userId",
            message: "must be between 1 and 10",
        });
    }
    Ok(())
}

pub(crate) fn validate_user_vote(value: i16) -> Result<(), DomainError> {
    if value != 1 && value != -1 {
        return Err(DomainError::Validation {
            field: "userVote",
            message: "must be 1 or -1",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{normalize_non_empty, validate_user_id, validate_user_vote};
    use crate::domain::error::DomainError;

    #[test]
    fn normalize_non_empty_trims_and_keeps_value() {
        let value = normalize_non_empty("title", "  hello  ").expect("must validate");
        assert_eq!(value, "hello");
    }

    #[test]
    fn normalize_non_empty_rejects_blank() {
        let err = normalize_non_empty("body", "   ").expect_err("blank must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation { field: "body", .. }
        ));
    }

    #[test]
    fn user_id_bounds_are_inclusive() {
        assert!(validate_user_id(1).is_ok());
        assert!(validate_user_id(10).is_ok());
        assert!(validate_user_id(0).is_err());
        assert!(validate_user_id(11).is_err());
    }

    #[test]
    fn user_vote_accepts_only_plus_minus_one() {
        assert!(validate_user_vote(1).is_ok());
        assert!(validate_user_vote(-1).is_ok());
        assert!(validate_user_vote(2).is_err());
        assert!(validate_user_vote(0).is_err());
    }
}
