//! Client-side form validation for the login/signup modal.
//!
//! Runs before any network call; an empty [`FieldErrors`] lets the submit
//! proceed. Messages are the ones shown under the inputs.

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;
pub const MIN_SIGNUP_PASSWORD_LEN: usize = 8;

/// Per-field error messages; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    FieldErrors {
        username: None,
        email: validate_email(email),
        password: validate_password(password, MIN_LOGIN_PASSWORD_LEN),
    }
}

pub fn validate_signup(username: &str, email: &str, password: &str) -> FieldErrors {
    let username = if username.is_empty() {
        Some("Username is required".to_string())
    } else if username.chars().count() < MIN_USERNAME_LEN {
        Some(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        ))
    } else {
        None
    };
    FieldErrors {
        username,
        email: validate_email(email),
        password: validate_password(password, MIN_SIGNUP_PASSWORD_LEN),
    }
}

fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_well_formed_email(email) {
        Some("Invalid email address".to_string())
    } else {
        None
    }
}

fn validate_password(password: &str, min_len: usize) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < min_len {
        Some(format!("Password must be at least {min_len} characters"))
    } else {
        None
    }
}

/// Shape check only: one `@` with a non-empty local part and a dotted,
/// non-empty domain. Anything stricter belongs to the server.
fn is_well_formed_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_form_passes() {
        assert!(validate_login("asa@example.com", "hunter2x").is_empty());
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = validate_login("", "");
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plain", "@nolocal.com", "nodomain@", "a@b", "a b@c.com", "x@.com"] {
            let errors = validate_login(email, "longenough");
            assert_eq!(
                errors.email.as_deref(),
                Some("Invalid email address"),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn login_password_minimum_is_six() {
        let errors = validate_login("asa@example.com", "five5");
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(validate_login("asa@example.com", "sixsix").is_empty());
    }

    #[test]
    fn signup_password_minimum_is_eight() {
        let errors = validate_signup("asa", "asa@example.com", "seven77");
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert!(validate_signup("asa", "asa@example.com", "eighteight").is_empty());
    }

    #[test]
    fn signup_checks_username_length() {
        let errors = validate_signup("ab", "asa@example.com", "eighteight");
        assert_eq!(
            errors.username.as_deref(),
            Some("Username must be at least 3 characters")
        );
        let errors = validate_signup("", "asa@example.com", "eighteight");
        assert_eq!(errors.username.as_deref(), Some("Username is required"));
    }

    #[test]
    fn errors_report_all_fields_at_once() {
        let errors = validate_signup("", "bad", "short");
        assert!(errors.username.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(!errors.is_empty());
    }
}
