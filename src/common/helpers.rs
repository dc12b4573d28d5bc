// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = zero_auth::common::safe_email_log("user@example.com");
/// assert_eq!(masked, "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            // First char, not first byte: the local part may be multibyte.
            match parts[0].chars().next() {
                Some(first) => format!("{}***@{}", first, parts[1]),
                None => format!("***@{}", parts[1]),
            }
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_local_part() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
    }

    #[test]
    fn masks_multibyte_local_part_without_panicking() {
        assert_eq!(safe_email_log("日本user@example.com"), "日***@example.com");
        assert_eq!(safe_email_log("@example.com"), "***@example.com");
    }

    #[test]
    fn masks_non_addresses_entirely() {
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
        assert_eq!(safe_email_log(""), "***@***.***");
    }
}
