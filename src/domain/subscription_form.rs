/// Raw sign-up payload as submitted by the form.
///
/// Every field is optional: missing and `null` values are accepted here and
/// rejected later by validation. The French field names used by the legacy
/// form are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "prenom")]
    pub first_name: Option<String>,
    #[serde(default, alias = "nom")]
    pub last_name: Option<String>,
}

/// Sanitized sign-up data: trimmed fields and a lowercased email
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl SubscriptionForm {
    /// Normalize formatting without judging validity
    pub fn sanitize(&self) -> SubscriberDetails {
        let clean = |field: &Option<String>| field.as_deref().map_or("", str::trim).to_string();
        SubscriberDetails {
            email: clean(&self.email).to_lowercase(),
            first_name: clean(&self.first_name),
            last_name: clean(&self.last_name),
        }
    }
}

impl From<SubscriberDetails> for SubscriptionForm {
    fn from(details: SubscriberDetails) -> Self {
        Self {
            email: Some(details.email),
            first_name: Some(details.first_name),
            last_name: Some(details.last_name),
        }
    }
}
