use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the characters `encodeURIComponent` leaves bare
/// (alphanumerics and `-_.!~*'()`), so links match what the form layer of a
/// browser app would produce.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a Google Maps search deep link for a pickup location.
pub fn maps_search_url(location: &str) -> String {
    let encoded = utf8_percent_encode(location, QUERY).to_string();
    format!("https://www.google.com/maps/search/?api=1&query={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_and_reserved_punctuation() {
        assert_eq!(
            maps_search_url("Main St & 5th Ave"),
            "https://www.google.com/maps/search/?api=1&query=Main%20St%20%26%205th%20Ave"
        );
    }

    #[test]
    fn keeps_unreserved_punctuation_bare() {
        assert_eq!(
            maps_search_url("Main-St (rear_door) ~5pm!"),
            "https://www.google.com/maps/search/?api=1&query=Main-St%20(rear_door)%20~5pm!"
        );
    }

    #[test]
    fn leaves_alphanumerics_alone() {
        assert_eq!(
            maps_search_url("Elm"),
            "https://www.google.com/maps/search/?api=1&query=Elm"
        );
    }
}
