use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text fields of the listing draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Location,
    Contact,
}

/// A shared food listing on the board
///
/// Quantity is unsigned so it can never go negative. A listing at 0 stays in
/// the collection but is hidden from the available view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

/// In-progress form input, reset to defaults after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub quantity: u32,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            contact: String::new(),
            quantity: 1,
        }
    }
}

/// Per-field validation messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub contact: String,
    pub location: String,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.contact.is_empty() && self.location.is_empty()
    }
}
