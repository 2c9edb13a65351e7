use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    Field, NewSubscriber, Subscriber, SubscriberEmail, Violation, ViolationKind, NAME_MIN_LEN,
};
use crate::store::{StoreError, SubscriberStore, DUPLICATE_EMAIL};

/// Subscriber store backed by the `subscribers` table
#[derive(Debug, Clone)]
pub struct PgSubscriberStore {
    db_pool: PgPool,
}

impl PgSubscriberStore {
    pub const fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

impl SubscriberStore for PgSubscriberStore {
    #[tracing::instrument(name = "Find subscriber by email", skip_all)]
    async fn find_by_email(&self, email: &SubscriberEmail) -> Result<Option<Subscriber>, StoreError> {
        let row = sqlx::query_as::<_, Subscriber>(
            r"
            SELECT id, email, first_name, last_name, subscription_date, is_active, created_at, updated_at
            FROM subscribers
            WHERE email = $1
            ",
        )
        .bind(email.as_ref())
        .fetch_optional(&self.db_pool)
        .await
        .context("Failed to perform a query to fetch a subscriber by email")?;

        Ok(row)
    }

    #[tracing::instrument(name = "Find subscriber by id", skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subscriber>, StoreError> {
        let row = sqlx::query_as::<_, Subscriber>(
            r"
            SELECT id, email, first_name, last_name, subscription_date, is_active, created_at, updated_at
            FROM subscribers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .context("Failed to perform a query to fetch a subscriber by id")?;

        Ok(row)
    }

    /// Insert a subscriber unless its email is already taken.
    ///
    /// `id`, `subscription_date` and the bookkeeping timestamps come from the
    /// column defaults.
    #[tracing::instrument(name = "Saving new subscriber details in the database", skip_all)]
    async fn insert(&self, new_subscriber: &NewSubscriber) -> Result<Subscriber, StoreError> {
        let result = sqlx::query_as::<_, Subscriber>(
            r"
            INSERT INTO subscribers (email, first_name, last_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, first_name, last_name, subscription_date, is_active, created_at, updated_at
            ",
        )
        .bind(new_subscriber.email.as_ref())
        .bind(new_subscriber.first_name.as_ref())
        .bind(new_subscriber.last_name.as_ref())
        .fetch_optional(&self.db_pool)
        .await;

        match result {
            Ok(Some(subscriber)) => Ok(subscriber),
            // The conflict clause swallowed the insert
            Ok(None) => Err(StoreError::Rejected(vec![DUPLICATE_EMAIL.into()])),
            Err(e) => match rejection_message(&e) {
                Some(message) => Err(StoreError::Rejected(vec![message])),
                None => Err(anyhow::Error::new(e)
                    .context("Failed to insert a new subscriber")
                    .into()),
            },
        }
    }

    #[tracing::instrument(name = "Delete subscriber", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r"
            DELETE FROM subscribers
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.db_pool)
        .await
        .context("Failed to delete a subscriber")?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(name = "Count subscribers", skip(self))]
    async fn count(&self) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM subscribers")
            .fetch_one(&self.db_pool)
            .await
            .context("Failed to count subscribers")?;

        Ok(u64::try_from(count).context("Negative subscriber count")?)
    }

    #[tracing::instrument(name = "List subscribers", skip(self))]
    async fn list(&self) -> Result<Vec<Subscriber>, StoreError> {
        let rows = sqlx::query_as::<_, Subscriber>(
            r"
            SELECT id, email, first_name, last_name, subscription_date, is_active, created_at, updated_at
            FROM subscribers
            ORDER BY subscription_date DESC
            ",
        )
        .fetch_all(&self.db_pool)
        .await
        .context("Failed to list subscribers")?;

        Ok(rows)
    }
}

/// Map constraint violations raised by the schema to the field message the
/// validator would have produced
fn rejection_message(e: &sqlx::Error) -> Option<String> {
    let db_error = e.as_database_error()?;
    if db_error.is_unique_violation() {
        return Some(DUPLICATE_EMAIL.into());
    }
    if !db_error.is_check_violation() {
        return None;
    }
    let violation = match db_error.constraint()? {
        "subscribers_email_format" => Violation::new(Field::Email, ViolationKind::Invalid),
        "subscribers_first_name_length" => {
            Violation::new(Field::FirstName, ViolationKind::TooShort(NAME_MIN_LEN))
        }
        "subscribers_last_name_length" => {
            Violation::new(Field::LastName, ViolationKind::TooShort(NAME_MIN_LEN))
        }
        _ => return None,
    };
    Some(violation.to_string())
}
