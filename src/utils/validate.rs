use lazy_static::lazy_static;
use regex::Regex;
use serde::{ Deserialize, Serialize };

use crate::error::FormError;

lazy_static! {
    // Structural check only: something@something.tld
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trims the three fields and checks them in form order. The first failing
/// field decides the error shown inline under the form.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactMessage, FormError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(FormError::EmptyName);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FormError::InvalidEmail);
    }
    if message.is_empty() {
        return Err(FormError::EmptyMessage);
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
