use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// The three fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
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

    /// Same rule as the inputs' `required` attribute: no field may be empty.
    /// Whitespace counts as a value.
    pub fn validate(&self) -> Result<(), ContactError> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }

    /// There is no backend; a valid message is only logged.
    pub fn submit(&self) -> Result<(), ContactError> {
        if let Err(e) = self.validate() {
            log::warn!("contact form rejected: {e}");
            return Err(e);
        }
        match serde_json::to_string(self) {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(e) => log::warn!("contact form submitted but couldn't be serialized: {e}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_message_submits() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "Hello there");
        assert_eq!(msg.validate(), Ok(()));
        assert_eq!(msg.submit(), Ok(()));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let msg = ContactMessage::new("", "ada@example.com", "Hello");
        assert_eq!(msg.submit(), Err(ContactError::MissingField("name")));

        let msg = ContactMessage::new("Ada", "", "Hello");
        assert_eq!(msg.submit(), Err(ContactError::MissingField("email")));

        let msg = ContactMessage::new("Ada", "ada@example.com", "");
        assert_eq!(msg.submit(), Err(ContactError::MissingField("message")));

        // first empty field wins
        assert_eq!(
            ContactMessage::default().validate(),
            Err(ContactError::MissingField("name"))
        );
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "   ");
        assert_eq!(msg.submit(), Ok(()));

        let msg = ContactMessage::new(" ", "\t", "\n");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn test_logged_form() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "Hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hi",
            })
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ContactError::MissingField("email").to_string(),
            "email is required"
        );
    }
}
