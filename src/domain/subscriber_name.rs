use crate::domain::ViolationKind;

/// Minimum length of a first or last name, in characters, after trimming
pub const NAME_MIN_LEN: usize = 2;

/// Subscriber first or last name, trimmed with its case preserved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberName(String);

impl SubscriberName {
    /// Parse subscriber name
    pub fn parse(name: String) -> Result<Self, ViolationKind> {
        let name = name.trim();
        if name.is_empty() {
            Err(ViolationKind::Required)
        } else if name.chars().count() < NAME_MIN_LEN {
            Err(ViolationKind::TooShort(NAME_MIN_LEN))
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
