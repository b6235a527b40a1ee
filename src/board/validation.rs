use regex::Regex;

use crate::models::{Draft, ValidationErrors};

/// Does the contact look like a Gmail address?
///
/// Lowercases the whole address before matching, so both the local part and
/// the domain are compared case-insensitively.
fn is_valid_gmail(email: &str) -> bool {
    let re = Regex::new(r"^[a-z0-9._%+-]+@gmail\.com$").expect("valid email regex");
    re.is_match(&email.to_lowercase())
}

/// Validate a draft before it is submitted to the board.
///
/// Contact is optional, but when present it must be a Gmail address. Location
/// must contain something other than whitespace. Other fields are left to the
/// form layer.
pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if !draft.contact.is_empty() && !is_valid_gmail(&draft.contact) {
        errors.contact = "Please enter a valid Gmail address".to_string();
    }

    if draft.location.trim().is_empty() {
        errors.location = "Location is required".to_string();
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(contact: &str, location: &str) -> Draft {
        Draft {
            name: "Pizza".to_string(),
            contact: contact.to_string(),
            location: location.to_string(),
            ..Draft::default()
        }
    }

    #[test]
    fn accepts_plain_gmail_address() {
        assert!(is_valid_gmail("someone@gmail.com"));
    }

    #[test]
    fn accepts_mixed_case_and_local_part_punctuation() {
        assert!(is_valid_gmail("First.Last+leftovers@GMAIL.COM"));
        assert!(is_valid_gmail("maria_r%42@Gmail.com"));
    }

    #[test]
    fn rejects_other_domains_and_malformed_addresses() {
        assert!(!is_valid_gmail("someone@hotmail.com"));
        assert!(!is_valid_gmail("someone@gmailXcom"));
        assert!(!is_valid_gmail("@gmail.com"));
        assert!(!is_valid_gmail("someone@gmail.com extra"));
    }

    #[test]
    fn empty_contact_is_not_an_error() {
        let errors = validate(&draft_with("", "Main St"));
        assert!(errors.contact.is_empty());
    }

    #[test]
    fn bad_contact_sets_the_gmail_message() {
        let errors = validate(&draft_with("maria@hotmail.com", "Main St"));
        assert_eq!(errors.contact, "Please enter a valid Gmail address");
    }

    #[test]
    fn whitespace_location_is_required() {
        let errors = validate(&draft_with("", "   "));
        assert_eq!(errors.location, "Location is required");

        let errors = validate(&draft_with("", ""));
        assert_eq!(errors.location, "Location is required");
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate(&draft_with("someone@gmail.com", "Main St"));
        assert!(errors.is_empty());
    }
}
