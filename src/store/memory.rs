use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{NewSubscriber, Subscriber, SubscriberEmail};
use crate::store::{StoreError, SubscriberStore, DUPLICATE_EMAIL};

/// Volatile subscriber store, for local runs and tests.
///
/// The duplicate check and the insert happen under the same write lock.
#[derive(Debug, Default)]
pub struct InMemorySubscriberStore {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl InMemorySubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriberStore for InMemorySubscriberStore {
    async fn find_by_email(&self, email: &SubscriberEmail) -> Result<Option<Subscriber>, StoreError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers
            .iter()
            .find(|s| s.email == email.as_ref())
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subscriber>, StoreError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers.iter().find(|s| s.id == id).cloned())
    }

    #[tracing::instrument(name = "Saving new subscriber in memory", skip_all)]
    async fn insert(&self, new_subscriber: &NewSubscriber) -> Result<Subscriber, StoreError> {
        let mut subscribers = self.subscribers.write().await;
        if subscribers
            .iter()
            .any(|s| s.email == new_subscriber.email.as_ref())
        {
            return Err(StoreError::Rejected(vec![DUPLICATE_EMAIL.into()]));
        }

        let now = Utc::now();
        let subscriber = Subscriber {
            id: Uuid::new_v4(),
            email: new_subscriber.email.as_ref().to_owned(),
            first_name: new_subscriber.first_name.as_ref().to_owned(),
            last_name: new_subscriber.last_name.as_ref().to_owned(),
            subscription_date: now,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut subscribers = self.subscribers.write().await;
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        Ok(subscribers.len() != before)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers.len() as u64)
    }

    async fn list(&self) -> Result<Vec<Subscriber>, StoreError> {
        let mut subscribers = self.subscribers.read().await.clone();
        // Ties on the timestamp keep the latest insertion first
        subscribers.reverse();
        subscribers.sort_by(|a, b| b.subscription_date.cmp(&a.subscription_date));
        Ok(subscribers)
    }
}
