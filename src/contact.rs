//! Contact form validation.
//!
//! Rules are evaluated in a fixed order and the first failing rule decides
//! the message shown to the visitor.

use crate::config::{MESSAGE_MAX_LEN, MESSAGE_MIN_LEN, NAME_MIN_LEN};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const SUCCESS_MESSAGE: &str = "Smash ! Message sent with success !";

/// Raw field values read at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingField,
    InvalidEmail,
    NameTooShort,
    MessageTooShort,
    MessageTooLong,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingField => {
                write!(f, "Let serve! You missed a field – please fill them all in..")
            }
            ContactError::InvalidEmail => {
                write!(f, "Faulty serve! Please enter a valid email address.")
            }
            ContactError::NameTooShort => write!(
                f,
                "Net shot! Your name needs at least {} characters.",
                NAME_MIN_LEN
            ),
            ContactError::MessageTooShort => write!(
                f,
                "Edge ball! Your message is too short – at least {} characters needed !",
                MESSAGE_MIN_LEN
            ),
            ContactError::MessageTooLong => write!(
                f,
                "Out of bounds! Your message is too long – maximum {} characters !",
                MESSAGE_MAX_LEN
            ),
        }
    }
}

impl std::error::Error for ContactError {}

/// Length as the browser reports it (UTF-16 code units).
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a submission, returning the first rule it breaks.
pub fn validate_contact(form: &ContactForm) -> Result<(), ContactError> {
    let result = if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
        Err(ContactError::MissingField)
    } else if !is_valid_email(&form.email) {
        Err(ContactError::InvalidEmail)
    } else if text_len(&form.name) < NAME_MIN_LEN {
        Err(ContactError::NameTooShort)
    } else if text_len(&form.message) < MESSAGE_MIN_LEN {
        Err(ContactError::MessageTooShort)
    } else if text_len(&form.message) > MESSAGE_MAX_LEN {
        Err(ContactError::MessageTooLong)
    } else {
        Ok(())
    };

    match &result {
        Ok(()) => debug!("Contact form accepted"),
        Err(e) => debug!("Contact form rejected: {:?}", e),
    }
    result
}
