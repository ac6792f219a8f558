use super::ValidationError;
use serde::Serialize;
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct ProjectId(i32);

impl ProjectId {
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        match i32::try_from(id) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => {
                Err(ValidationError::new(format!("Invalid project ID: {id}")))
            }
        }
    }

    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl AsRef<i32> for ProjectId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    let parsed = ProjectId::parse(1).expect("1 is a valid project ID");
    assert_eq!(parsed, ProjectId::new(1));
}

#[test]
fn test_invalid_ids() {
    let result = ProjectId::parse(0);
    let error = result.expect_err("0 is not a valid project ID");
    assert_eq!(error.as_ref(), "Invalid project ID: 0");

    let result = ProjectId::parse(i64::MAX);
    assert!(result.is_err(), "IDs must fit in 32 bits");
}
