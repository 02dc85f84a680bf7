//! Client-side contact form validation.
//!
//! Mirrors the server's rules so obviously-bad submissions are rejected
//! before a request is made. The server remains authoritative; its field
//! errors come back in the same `{param, msg}` shape.

use serde::{Deserialize, Serialize};

/// Minimum message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A contact form as the user filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One field-level validation failure, matching the server's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

impl FieldError {
    fn new(param: &str, msg: &str) -> Self {
        Self {
            param: param.to_string(),
            msg: msg.to_string(),
        }
    }
}

/// Validate a form. An empty result means the form may be submitted.
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_plausible_email(email) {
        errors.push(FieldError::new("email", "Please provide a valid email"));
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.push(FieldError::new("message", "Message is required"));
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.push(FieldError::new(
            "message",
            "Message must be at least 10 characters",
        ));
    }

    errors
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "We need a site rebuild this quarter.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_subject_is_optional() {
        let mut form = valid_form();
        form.subject.clear();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_missing_fields_each_reported() {
        let errors = validate(&ContactForm::default());
        let params: Vec<&str> = errors.iter().map(|e| e.param.as_str()).collect();
        assert_eq!(params, ["name", "email", "message"]);
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(validate(&form)[0].param, "name");
    }

    #[test]
    fn test_email_shape() {
        let mut form = valid_form();
        for bad in ["plainaddress", "@example.com", "a@b", "a b@example.com", "a@.com"] {
            form.email = bad.to_string();
            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "{bad} should fail");
            assert_eq!(errors[0].param, "email");
        }
        for good in ["a@b.co", "first.last@sub.example.com"] {
            form.email = good.to_string();
            assert!(validate(&form).is_empty(), "{good} should pass");
        }
    }

    #[test]
    fn test_short_message_rejected() {
        let mut form = valid_form();
        form.message = "too short".to_string(); // 9 chars
        let errors = validate(&form);
        assert_eq!(errors[0].param, "message");

        form.message = "just long enough!".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_field_error_wire_shape() {
        let json = r#"[{"param":"email","msg":"Please provide a valid email"}]"#;
        let errors: Vec<FieldError> = serde_json::from_str(json).unwrap();
        assert_eq!(errors[0].param, "email");
    }
}
