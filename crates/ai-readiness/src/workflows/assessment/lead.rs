use serde::{Deserialize, Serialize};

const MIN_PHONE_CHARS: usize = 10;

/// Contact details collected before the report is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCapture {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LeadCaptureError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,
    #[error("Invalid email address")]
    InvalidEmail,
}

impl LeadCapture {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Checks run in order: presence, phone length, email shape.
    pub fn validate(&self) -> Result<(), LeadCaptureError> {
        let blank = [&self.name, &self.email, &self.phone]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank {
            return Err(LeadCaptureError::MissingFields);
        }
        if self.phone.trim().chars().count() < MIN_PHONE_CHARS {
            return Err(LeadCaptureError::PhoneTooShort);
        }
        if !self.email.contains('@') {
            return Err(LeadCaptureError::InvalidEmail);
        }
        Ok(())
    }
}
