use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::routes::helpers::{ApiData, ApiError};
use crate::service::SubscriptionService;
use crate::store::SubscriberStore;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    total_subscribers: u64,
}

/// Subscriber statistics handler
pub async fn stats<S: SubscriberStore>(
    service: web::Data<SubscriptionService<S>>,
) -> Result<HttpResponse, ApiError> {
    let total_subscribers = service
        .count_subscribers()
        .await
        .context("Failed to count subscribers")?;

    Ok(HttpResponse::Ok().json(ApiData::new(Stats { total_subscribers })))
}
