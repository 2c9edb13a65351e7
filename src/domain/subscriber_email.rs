use crate::domain::ViolationKind;

/// Subscriber email, trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Parse subscriber email
    pub fn parse(email: String) -> Result<Self, ViolationKind> {
        let email = email.trim();
        if email.is_empty() {
            Err(ViolationKind::Required)
        } else if has_email_shape(email) {
            Ok(Self(email.to_lowercase()))
        } else {
            Err(ViolationKind::Invalid)
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Syntactic `local@domain.tld` check: exactly one `@`, no whitespace, and a
/// domain part holding a `.` with at least one character on each side
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
