use super::ValidationError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Accepts addresses that are valid per the HTML living standard:
    /// https://html.spec.whatwg.org/multipage/input.html#valid-e-mail-address
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if !validator::validate_email(&s) {
            return Err(ValidationError::new(format!(
                "Invalid email address: {s}"
            )));
        }

        Ok(Self(s))
    }
}

impl AsRef<String> for Email {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
