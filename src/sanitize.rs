// src/sanitize.rs
//
// Error message sanitization before display

use regex::Regex;

/// Cleans an upstream error message before it reaches the terminal.
///
/// Responses relayed from REST services can carry control characters and,
/// in some failure modes, echo the authorization header back. Control
/// characters are stripped and bearer tokens redacted; the message text is
/// otherwise preserved verbatim.
pub fn clean_upstream_message(message: &str) -> String {
    let filtered: String = message.chars().filter(|c| !c.is_control()).collect();

    match Regex::new(r"(?i)bearer\s+[A-Za-z0-9._~+/=-]+") {
        Ok(token_pattern) => token_pattern
            .replace_all(&filtered, "Bearer [REDACTED]")
            .to_string(),
        Err(_) => filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_plain_message() {
        assert_eq!(
            clean_upstream_message("File Not Found."),
            "File Not Found."
        );
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(
            clean_upstream_message("Access\r\ndenied\x07"),
            "Accessdenied"
        );
    }

    #[test]
    fn test_redacts_bearer_tokens() {
        let cleaned = clean_upstream_message("Invalid JWT token: Bearer eyJ0eXAiOiJKV1Qi.abc-123");
        assert_eq!(cleaned, "Invalid JWT token: Bearer [REDACTED]");
    }
}
