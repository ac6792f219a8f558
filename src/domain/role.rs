use super::ValidationError;
use serde::Serialize;

/// A member's role, either on a single project or as the member's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role(String);

impl Role {
    pub fn parse(role: String) -> Result<Self, ValidationError> {
        match role.chars().count() {
            x if x < 1 => {
                Err(ValidationError::new("Role cannot be empty".to_string()))
            }
            x if x > 255 => Err(ValidationError::new(
                "Max role length is 255 characters".to_string(),
            )),
            _ => Ok(Self(role)),
        }
    }

    /// Parses an optional role, as found in request bodies and nullable
    /// columns.
    pub fn parse_optional(
        role: Option<String>,
    ) -> Result<Option<Self>, ValidationError> {
        role.map(Self::parse).transpose()
    }
}

impl AsRef<String> for Role {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
