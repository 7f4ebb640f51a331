//! Email redaction for log output.

/// Redact an email address for logging.
///
/// Keeps the first and last character of the local part, masks everything
/// in between, and leaves the domain intact:
///
/// ```
/// use reg_shared::utils::email::redact_email;
///
/// assert_eq!(redact_email("john.doe@gmail.com"), "j******e@gmail.com");
/// assert_eq!(redact_email("ab@gmail.com"), "a*b@gmail.com");
/// assert_eq!(redact_email("a@gmail.com"), "a@gmail.com");
/// ```
pub fn redact_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return "<redacted>".to_string();
    };

    // Character count, not byte length; the local part may be non-ASCII
    match local.chars().count() {
        0 | 1 => format!("{}@{}", local, domain),
        2 => {
            let mut chars = local.chars();
            let first = chars.next().unwrap_or('*');
            let last = chars.next_back().unwrap_or('*');
            format!("{}*{}@{}", first, last, domain)
        }
        n => {
            let first = local.chars().next().unwrap_or('*');
            let last = local.chars().next_back().unwrap_or('*');
            format!("{}{}{}@{}", first, "*".repeat(n - 2), last, domain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_long_local_part() {
        assert_eq!(redact_email("john.doe@gmail.com"), "j******e@gmail.com");
    }

    #[test]
    fn test_redact_short_local_parts() {
        assert_eq!(redact_email("a@gmail.com"), "a@gmail.com");
        assert_eq!(redact_email("ab@gmail.com"), "a*b@gmail.com");
        assert_eq!(redact_email("abc@gmail.com"), "a*c@gmail.com");
    }

    #[test]
    fn test_redact_non_ascii_local_part() {
        // Mask width follows characters, not bytes
        assert_eq!(redact_email("éé@x.com"), "é*é@x.com");
        assert_eq!(redact_email("héllo@x.com"), "h***o@x.com");
        assert_eq!(redact_email("é@x.com"), "é@x.com");
    }

    #[test]
    fn test_redact_without_at_sign() {
        assert_eq!(redact_email("not-an-email"), "<redacted>");
        assert_eq!(redact_email(""), "<redacted>");
    }

    #[test]
    fn test_domain_left_intact() {
        let redacted = redact_email("someone@example.org");
        assert!(redacted.ends_with("@example.org"));
        assert!(!redacted.contains("omeon"));
    }
}
