use serde::{Deserialize, Serialize};

/// Length of a complete ABDM health number.
pub const ABDM_NUMBER_LEN: usize = 14;

/// Group sizes used for the on-screen representation (XXXX XXXX XXXX XX).
const DISPLAY_GROUPS: [usize; 4] = [4, 4, 4, 2];

/// Strip everything but decimal digits and cap at [`ABDM_NUMBER_LEN`].
///
/// Total over arbitrary input and idempotent: feeding the output back in
/// returns it unchanged.
pub fn sanitize_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(ABDM_NUMBER_LEN)
        .collect()
}

/// Group a canonical digit string as 4-4-4-2 for display.
///
/// The trailing group may be shorter; empty groups are dropped. The display
/// string is derived, never stored: `sanitize_digits(format_grouped(d)) == d`.
pub fn format_grouped(digits: &str) -> String {
    let mut groups = Vec::new();
    let mut rest = digits;
    for size in DISPLAY_GROUPS {
        if rest.is_empty() {
            break;
        }
        let cut = size.min(rest.len());
        groups.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    groups.join(" ")
}

/// Canonical ABDM number: 0–14 decimal digits, the single source of truth
/// for both validity and the grouped display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbdmNumber(String);

impl AbdmNumber {
    /// Build from arbitrary user input by sanitizing it first.
    pub fn from_input(input: &str) -> Self {
        Self(sanitize_digits(input))
    }

    /// The canonical digit string, no separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Grouped representation for display.
    pub fn display(&self) -> String {
        format_grouped(&self.0)
    }

    /// True iff all 14 digits are present.
    pub fn is_complete(&self) -> bool {
        self.0.len() == ABDM_NUMBER_LEN
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_only_digits() {
        assert_eq!(sanitize_digits("abc12-34"), "1234");
        assert_eq!(sanitize_digits("1234 5678 9012 34"), "12345678901234");
        assert_eq!(sanitize_digits(""), "");
        assert_eq!(sanitize_digits("no digits here"), "");
    }

    #[test]
    fn sanitize_caps_at_fourteen() {
        assert_eq!(sanitize_digits("123456789012345678").len(), 14);
        assert_eq!(sanitize_digits("123456789012345678"), "12345678901234");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_digits("x1y2z3 456789012345");
        assert_eq!(sanitize_digits(&once), once);
    }

    #[test]
    fn format_groups_as_4_4_4_2() {
        assert_eq!(format_grouped(""), "");
        assert_eq!(format_grouped("123"), "123");
        assert_eq!(format_grouped("1234"), "1234");
        assert_eq!(format_grouped("12345"), "1234 5");
        assert_eq!(format_grouped("123456789012"), "1234 5678 9012");
        assert_eq!(format_grouped("1234567890123"), "1234 5678 9012 3");
        assert_eq!(format_grouped("12345678901234"), "1234 5678 9012 34");
    }

    #[test]
    fn format_round_trips_through_sanitize() {
        for d in ["", "1", "1234", "123456", "12345678901234"] {
            assert_eq!(sanitize_digits(&format_grouped(d)), d);
        }
    }

    #[test]
    fn completeness_boundary() {
        assert!(!AbdmNumber::from_input("1234567890123").is_complete());
        assert!(AbdmNumber::from_input("12345678901234").is_complete());
        // 15th digit is dropped by the sanitizer, so still complete
        let n = AbdmNumber::from_input("123456789012345");
        assert!(n.is_complete());
        assert_eq!(n.as_str(), "12345678901234");
    }

    #[test]
    fn display_matches_example() {
        let n = AbdmNumber::from_input("12345678901234");
        assert_eq!(n.display(), "1234 5678 9012 34");
    }
}
