use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::routes::helpers::{parse_subscriber_id, ApiData, ApiError};
use crate::service::{DeleteOutcome, SubscriptionService};
use crate::store::SubscriberStore;

/// List every subscriber, newest first
#[tracing::instrument(name = "Listing subscribers", skip(service))]
pub async fn list_subscribers<S: SubscriberStore>(
    service: web::Data<SubscriptionService<S>>,
) -> Result<HttpResponse, ApiError> {
    let subscribers = service
        .list_subscribers()
        .await
        .context("Failed to list subscribers")?;

    Ok(HttpResponse::Ok().json(ApiData::new(subscribers)))
}

/// Fetch a single subscriber
#[tracing::instrument(name = "Fetching a subscriber", skip(service))]
pub async fn get_subscriber<S: SubscriberStore>(
    path: web::Path<String>,
    service: web::Data<SubscriptionService<S>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_subscriber_id(&path).ok_or(ApiError::SubscriberNotFound)?;
    let subscriber = service
        .get_subscriber(id)
        .await
        .context("Failed to fetch a subscriber")?
        .ok_or(ApiError::SubscriberNotFound)?;

    Ok(HttpResponse::Ok().json(ApiData::new(subscriber)))
}

/// Delete a subscriber; an unknown id is reported, not treated as an error
#[tracing::instrument(name = "Removing a subscriber", skip(service))]
pub async fn delete_subscriber<S: SubscriberStore>(
    path: web::Path<String>,
    service: web::Data<SubscriptionService<S>>,
) -> Result<HttpResponse, ApiError> {
    let outcome = match parse_subscriber_id(&path) {
        Some(id) => service
            .delete_subscriber(id)
            .await
            .context("Failed to delete a subscriber")?,
        None => DeleteOutcome {
            success: false,
            message: ApiError::SubscriberNotFound.to_string(),
        },
    };

    Ok(HttpResponse::Ok().json(outcome))
}
