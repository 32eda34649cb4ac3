use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for extracting the reference ID from an email subject line.
    /// The prefix is case-insensitive and the code is exactly 14 alphanumerics.
    /// - Valid: "Ref ID: MSAU2407240001", "reference id: MSAU2407240001"
    /// - Invalid: "MSAU2407240001" (no prefix), "Ref ID: MSAU240724000" (13 chars)
    pub static ref SUBJECT_REFERENCE_REGEX: Regex =
        Regex::new(r"(?i:Ref(?:erence)? ID: )(?P<refid>[0-9a-zA-Z]{14})").unwrap();

    /// Regex for splitting an RFC-style sender header into display name and address.
    /// - Valid: "The Sender <sender@example.com>"
    /// - Invalid: "sender@example.com" (bare address, no angle brackets)
    pub static ref SENDER_ADDRESS_REGEX: Regex =
        Regex::new(r"(?i)(?P<name>[a-z ]*) <(?P<address>[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})>")
            .unwrap();
}

/// Extract the 14-character reference ID from a subject line.
///
/// Matching is purely syntactic. Whether the code is bound to a user is the
/// resolver's concern, not this function's.
pub fn extract_reference_id(subject: &str) -> Option<&str> {
    if subject.is_empty() {
        return None;
    }

    SUBJECT_REFERENCE_REGEX
        .captures(subject)
        .and_then(|caps| caps.name("refid"))
        .map(|m| m.as_str())
}

/// A sender header split into its display name and address parts.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedSender<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

/// Split a `Display Name <local@host>` sender header.
pub fn parse_sender(from: &str) -> Option<ParsedSender<'_>> {
    SENDER_ADDRESS_REGEX.captures(from).and_then(|caps| {
        let name = caps.name("name")?.as_str();
        let address = caps.name("address")?.as_str();
        Some(ParsedSender { name, address })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reference_id_long_format() {
        assert_eq!(
            extract_reference_id("Reference ID: MSAU2407240001"),
            Some("MSAU2407240001")
        );
    }

    #[test]
    fn test_extract_reference_id_short_format() {
        assert_eq!(
            extract_reference_id("Ref ID: MSAU2407240001"),
            Some("MSAU2407240001")
        );
    }

    #[test]
    fn test_extract_reference_id_case_insensitive_prefix() {
        assert_eq!(
            extract_reference_id("ref id: MSAU2407240001"),
            Some("MSAU2407240001")
        );
        assert_eq!(
            extract_reference_id("REFERENCE ID: MSAU2407240001"),
            Some("MSAU2407240001")
        );
    }

    #[test]
    fn test_extract_reference_id_embedded_in_longer_subject() {
        assert_eq!(
            extract_reference_id("Fwd: Ref ID: MSAU2407240001 (invoice attached)"),
            Some("MSAU2407240001")
        );
    }

    #[test]
    fn test_extract_reference_id_invalid() {
        assert_eq!(extract_reference_id(""), None);
        // 13 characters
        assert_eq!(extract_reference_id("Ref ID: MSAU240724000"), None);
        // missing prefix
        assert_eq!(extract_reference_id("AU2407240001"), None);
        assert_eq!(extract_reference_id("MSAU240724000"), None);
        // non-alphanumeric character inside the code
        assert_eq!(extract_reference_id("Ref ID: MSAU-407240001"), None);
    }

    #[test]
    fn test_parse_sender_valid() {
        let sender = parse_sender("The Sender <sender@example.com>").unwrap();
        assert_eq!(sender.name, "The Sender");
        assert_eq!(sender.address, "sender@example.com");
    }

    #[test]
    fn test_parse_sender_invalid() {
        assert!(parse_sender("sender@example.com").is_none());
        assert!(parse_sender("").is_none());
        assert!(parse_sender("The Sender <not-an-address>").is_none());
    }
}
