use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// A message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Missing("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::Missing("email"));
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Missing("message"));
        }
        Ok(())
    }
}

/// Validate and record a contact submission. Nothing leaves the machine.
pub fn submit(message: &ContactMessage) -> Result<(), ContactError> {
    message.validate()?;
    tracing::info!(
        name = %message.name.trim(),
        email = %message.email.trim(),
        length = message.message.len(),
        "contact form submitted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let msg = ContactMessage::new("Ishaan", "ishaan@example.in", "Loved the quiz");
        assert!(submit(&msg).is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let msg = ContactMessage::new(" ", "a@b.c", "hi");
        assert_eq!(submit(&msg), Err(ContactError::Missing("name")));
        let msg = ContactMessage::new("A", "", "hi");
        assert_eq!(submit(&msg), Err(ContactError::Missing("email")));
        let msg = ContactMessage::new("A", "a@b.c", "\n");
        assert_eq!(submit(&msg), Err(ContactError::Missing("message")));
    }

    #[test]
    fn test_invalid_email() {
        let msg = ContactMessage::new("A", "not-an-email", "hi");
        assert_eq!(
            submit(&msg),
            Err(ContactError::InvalidEmail("not-an-email".to_string()))
        );
        assert_eq!(
            ContactError::InvalidEmail("x".to_string()).to_string(),
            "'x' is not a valid email address"
        );
    }
}
