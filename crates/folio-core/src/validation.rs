//! Field validation for timeline post submissions.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::NewTimelinePost;
use crate::error::ValidationError;

// Syntactic check only - no domain existence or deliverability verification.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

/// Validate raw submitted fields into a [`NewTimelinePost`].
///
/// Absent fields count as empty. Checks run in a fixed order - name, then
/// content, then email - and the first failure is the reported reason.
/// Accepted input passes through unchanged.
pub fn validate(
    name: Option<String>,
    email: Option<String>,
    content: Option<String>,
) -> Result<NewTimelinePost, ValidationError> {
    let name = name.unwrap_or_default();
    let email = email.unwrap_or_default();
    let content = content.unwrap_or_default();

    if name.is_empty() {
        return Err(ValidationError::Name);
    }
    if content.is_empty() {
        return Err(ValidationError::Content);
    }
    if !EMAIL_RE.is_match(&email) {
        return Err(ValidationError::Email);
    }

    Ok(NewTimelinePost {
        name,
        email,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, content: &str) -> Result<NewTimelinePost, ValidationError> {
        validate(
            Some(name.to_string()),
            Some(email.to_string()),
            Some(content.to_string()),
        )
    }

    #[test]
    fn accepts_valid_fields_unchanged() {
        let post = fields(" John Doe ", "johndoe@gmail.com", "Hello world").unwrap();
        // No trimming or normalization.
        assert_eq!(post.name, " John Doe ");
        assert_eq!(post.email, "johndoe@gmail.com");
        assert_eq!(post.content, "Hello world");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            fields("", "johndoe@gmail.com", "Hello").unwrap_err(),
            ValidationError::Name
        );
    }

    #[test]
    fn rejects_empty_content() {
        assert_eq!(
            fields("John", "johndoe@gmail.com", "").unwrap_err(),
            ValidationError::Content
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["not-an-email", "a@b", "", "john@", "@gmail.com", "a b@c.de"] {
            assert_eq!(
                fields("John", email, "Hello").unwrap_err(),
                ValidationError::Email,
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_common_email_shapes() {
        for email in [
            "a@b.co",
            "john.doe+tag@sub.example.org",
            "JOHN_DOE%42@EXAMPLE.CO",
        ] {
            assert!(fields("John", email, "Hello").is_ok(), "{email:?}");
        }
    }

    #[test]
    fn name_failure_reported_before_content_and_email() {
        assert_eq!(fields("", "not-an-email", "").unwrap_err(), ValidationError::Name);
    }

    #[test]
    fn content_failure_reported_before_email() {
        assert_eq!(
            fields("John", "not-an-email", "").unwrap_err(),
            ValidationError::Content
        );
    }

    #[test]
    fn absent_fields_count_as_empty() {
        assert_eq!(validate(None, None, None).unwrap_err(), ValidationError::Name);
        assert_eq!(
            validate(Some("John".into()), Some("johndoe@gmail.com".into()), None).unwrap_err(),
            ValidationError::Content
        );
        assert_eq!(
            validate(Some("John".into()), None, Some("Hello".into())).unwrap_err(),
            ValidationError::Email
        );
    }

    #[test]
    fn reasons_display_as_client_strings() {
        assert_eq!(ValidationError::Name.to_string(), "Invalid name");
        assert_eq!(ValidationError::Content.to_string(), "Invalid content");
        assert_eq!(ValidationError::Email.to_string(), "Invalid email");
    }
}
