use super::ValidationError;
use serde::Serialize;
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct MemberId(i32);

impl MemberId {
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        match i32::try_from(id) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ValidationError::new(format!("Invalid member ID: {id}"))),
        }
    }

    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl AsRef<i32> for MemberId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    for valid_id in [1_i64, 42, i32::MAX as i64] {
        let parsed = MemberId::parse(valid_id).expect("valid member ID");
        assert_eq!(
            parsed,
            MemberId::new(valid_id as i32),
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    for invalid_id in [0_i64, -7, i32::MAX as i64 + 1] {
        let error = MemberId::parse(invalid_id).expect_err("invalid ID");
        assert_eq!(
            error.as_ref(),
            &format!("Invalid member ID: {invalid_id}")
        );
    }
}
