use regex::Regex;
use std::sync::LazyLock;

pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9+._%\-]{1,256}",
    r"@",
    r"[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}",
    r"(?:\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
);

pub const PHONE_PATTERN: &str = concat!(
    r"^(?:\+[0-9]+[\- .]*)?",
    r"(?:\([0-9]+\)[\- .]*)?",
    r"(?:[0-9][0-9\- .]+[0-9])$",
);

pub const PASSWORD_PATTERN: &str = r"^[a-zA-Z0-9]{8,}$";

// The patterns are fixed at compile time; failing to build one is a defect.
pub(crate) static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

pub(crate) static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern must compile"));

pub(crate) static PASSWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PASSWORD_PATTERN).expect("password pattern must compile"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_REGEX.is_match("some@valid.email"));
        assert!(EMAIL_REGEX.is_match("first.last+tag@mail.example.co"));
        assert!(EMAIL_REGEX.is_match("a_b%c@x-y.z"));
        assert!(!EMAIL_REGEX.is_match("some.invalid@email"));
        assert!(!EMAIL_REGEX.is_match("@valid.email"));
        assert!(!EMAIL_REGEX.is_match("some@-valid.email"));
        assert!(!EMAIL_REGEX.is_match("some@valid.email "));
        assert!(!EMAIL_REGEX.is_match("so me@valid.email"));
    }

    #[test]
    fn test_email_label_lengths() {
        let local = "a".repeat(256);
        assert!(EMAIL_REGEX.is_match(&format!("{local}@valid.email")));
        let local = "a".repeat(257);
        assert!(!EMAIL_REGEX.is_match(&format!("{local}@valid.email")));

        let host = "h".repeat(65);
        assert!(EMAIL_REGEX.is_match(&format!("user@{host}.com")));
        let host = "h".repeat(66);
        assert!(!EMAIL_REGEX.is_match(&format!("user@{host}.com")));

        let tld = "t".repeat(26);
        assert!(EMAIL_REGEX.is_match(&format!("user@host.{tld}")));
        let tld = "t".repeat(27);
        assert!(!EMAIL_REGEX.is_match(&format!("user@host.{tld}")));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_REGEX.is_match("(012) 345 - 67 89"));
        assert!(PHONE_REGEX.is_match("0123456789"));
        assert!(PHONE_REGEX.is_match("+44 (20) 7946.0958"));
        assert!(PHONE_REGEX.is_match("123"));
        assert!(!PHONE_REGEX.is_match("12"));
        assert!(!PHONE_REGEX.is_match("(012) 345 - 67 89 abc"));
        assert!(!PHONE_REGEX.is_match("012-345-"));
        assert!(!PHONE_REGEX.is_match("-012345"));
    }

    #[test]
    fn test_password_pattern() {
        assert!(PASSWORD_REGEX.is_match("qwerty123456"));
        assert!(!PASSWORD_REGEX.is_match("@qwerty123456"));
        assert!(!PASSWORD_REGEX.is_match("qwerty1"));
    }
}
