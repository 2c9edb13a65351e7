use std::fmt;
use std::future::Future;

use uuid::Uuid;

use crate::domain::{NewSubscriber, Subscriber, SubscriberEmail};
use crate::utils::error_chain_fmt;

mod memory;
mod postgres;

pub use memory::*;
pub use postgres::*;

/// Message reported when the store refuses a second record for an email
pub const DUPLICATE_EMAIL: &str = "This email is already subscribed";

/// Store error type
#[derive(thiserror::Error)]
pub enum StoreError {
    /// The store refused the record, one message per offending field
    #[error("The subscriber record was rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Persistence handle for subscriber records, keyed by id and by unique email.
///
/// `insert` must be an atomic insert-if-absent on the email: when a record
/// with the same email already exists it fails with [`StoreError::Rejected`].
pub trait SubscriberStore: Send + Sync + 'static {
    fn find_by_email(
        &self,
        email: &SubscriberEmail,
    ) -> impl Future<Output = Result<Option<Subscriber>, StoreError>> + Send;

    fn find_by_id(&self, id: Uuid)
        -> impl Future<Output = Result<Option<Subscriber>, StoreError>> + Send;

    /// Persist a new subscriber, assigning its id and timestamps
    fn insert(
        &self,
        new_subscriber: &NewSubscriber,
    ) -> impl Future<Output = Result<Subscriber, StoreError>> + Send;

    /// Hard delete, returning whether a record existed
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool, StoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// All subscribers, newest subscription first
    fn list(&self) -> impl Future<Output = Result<Vec<Subscriber>, StoreError>> + Send;
}
