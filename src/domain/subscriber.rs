use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored subscriber record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub subscription_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a freshly created subscriber
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Subscriber> for SubscriberSummary {
    fn from(s: Subscriber) -> Self {
        Self {
            id: s.id,
            email: s.email,
            first_name: s.first_name,
            last_name: s.last_name,
        }
    }
}
