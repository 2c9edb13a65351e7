use uuid::Uuid;

use crate::domain::{NewSubscriber, Subscriber, SubscriberSummary, SubscriptionForm};
use crate::store::{StoreError, SubscriberStore, DUPLICATE_EMAIL};

/// Error reported to the client when the store fails unexpectedly
pub const GENERIC_SUBSCRIPTION_ERROR: &str =
    "An error occurred during subscription. Please try again.";

/// Result of a subscription attempt, serialized as-is in the API response
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubscriptionOutcome {
    pub success: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<SubscriberSummary>,
}

impl SubscriptionOutcome {
    fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            message: None,
            subscriber: None,
        }
    }

    fn welcomed(subscriber: Subscriber) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            message: Some(format!(
                "Welcome {} {}! Thank you for subscribing.",
                subscriber.first_name, subscriber.last_name
            )),
            subscriber: Some(subscriber.into()),
        }
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

/// Subscription workflow and admin pass-throughs over an injected store
#[derive(Debug)]
pub struct SubscriptionService<S> {
    store: S,
}

impl<S: SubscriberStore> SubscriptionService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Sanitize, validate, check for duplicates, then persist a new subscriber.
    ///
    /// Validation and duplicate outcomes are returned as values; store
    /// failures are logged and reported with a generic message.
    #[tracing::instrument(
        name = "Adding a new subscriber",
        skip(self, form),
        fields(subscriber_email = tracing::field::Empty)
    )]
    pub async fn create_subscription(&self, form: &SubscriptionForm) -> SubscriptionOutcome {
        let details = form.sanitize();
        tracing::Span::current().record("subscriber_email", tracing::field::display(&details.email));

        let new_subscriber = match NewSubscriber::try_from(details) {
            Ok(new_subscriber) => new_subscriber,
            Err(validation) => return SubscriptionOutcome::rejected(validation.messages()),
        };

        match self.persist(&new_subscriber).await {
            Ok(subscriber) => SubscriptionOutcome::welcomed(subscriber),
            Err(StoreError::Rejected(errors)) => SubscriptionOutcome::rejected(errors),
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to create a subscription"
                );
                SubscriptionOutcome::rejected(vec![GENERIC_SUBSCRIPTION_ERROR.into()])
            }
        }
    }

    /// Duplicate check followed by the store's own insert-if-absent
    async fn persist(&self, new_subscriber: &NewSubscriber) -> Result<Subscriber, StoreError> {
        if self
            .store
            .find_by_email(&new_subscriber.email)
            .await?
            .is_some()
        {
            return Err(StoreError::Rejected(vec![DUPLICATE_EMAIL.into()]));
        }
        self.store.insert(new_subscriber).await
    }

    /// All subscribers, newest subscription first
    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>, StoreError> {
        self.store.list().await
    }

    pub async fn get_subscriber(&self, id: Uuid) -> Result<Option<Subscriber>, StoreError> {
        self.store.find_by_id(id).await
    }

    #[tracing::instrument(name = "Deleting a subscriber", skip(self))]
    pub async fn delete_subscriber(&self, id: Uuid) -> Result<DeleteOutcome, StoreError> {
        let outcome = if self.store.delete(id).await? {
            DeleteOutcome {
                success: true,
                message: "Subscriber deleted".into(),
            }
        } else {
            DeleteOutcome {
                success: false,
                message: "Subscriber not found".into(),
            }
        };
        Ok(outcome)
    }

    pub async fn count_subscribers(&self) -> Result<u64, StoreError> {
        self.store.count().await
    }
}
