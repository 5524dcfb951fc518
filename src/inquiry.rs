//! Contact form state. Submissions never leave the browser.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Destination,
    Social,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Destination,
        EventType::Social,
        EventType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Destination => "destination",
            EventType::Social => "social",
            EventType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Destination => "Destination Wedding",
            EventType::Social => "Social Event",
            EventType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    EventType,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("please tell us your name")]
    MissingName,
    #[error("please add an email address")]
    MissingEmail,
    #[error("\"{0}\" does not look like an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: Option<EventType>,
    pub message: String,
}

impl Inquiry {
    pub fn with_field(mut self, field: Field, value: String) -> Self {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::EventType => self.event_type = EventType::from_value(&value),
            Field::Message => self.message = value,
        }
        self
    }

    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.trim().is_empty() {
            return Err(InquiryError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(InquiryError::MissingEmail);
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(InquiryError::InvalidEmail(email.to_string())),
        }
    }

    /// The payload a real backend would receive.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Inquiry {
        Inquiry::default()
            .with_field(Field::Name, "Sarah".into())
            .with_field(Field::Email, "sarah@example.com".into())
    }

    #[test]
    fn requires_name_and_email() {
        assert_eq!(Inquiry::default().validate(), Err(InquiryError::MissingName));
        assert_eq!(
            Inquiry::default()
                .with_field(Field::Name, "  Sarah ".into())
                .validate(),
            Err(InquiryError::MissingEmail)
        );
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_email() {
        let inquiry = filled().with_field(Field::Email, "sarah@localhost".into());
        assert_eq!(
            inquiry.validate(),
            Err(InquiryError::InvalidEmail("sarah@localhost".into()))
        );
        assert!(filled()
            .with_field(Field::Email, "@example.com".into())
            .validate()
            .is_err());
    }

    #[test]
    fn unknown_event_type_clears_selection() {
        let inquiry = filled().with_field(Field::EventType, "destination".into());
        assert_eq!(inquiry.event_type, Some(EventType::Destination));

        let inquiry = inquiry.with_field(Field::EventType, String::new());
        assert_eq!(inquiry.event_type, None);
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = filled()
            .with_field(Field::EventType, "wedding".into())
            .to_json()
            .expect("inquiry serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["eventType"], "wedding");
        assert_eq!(value["name"], "Sarah");
        assert_eq!(value["phone"], "");
    }
}
