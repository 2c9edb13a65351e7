use actix_web::{web, Either, HttpResponse};

use crate::domain::SubscriptionForm;
use crate::service::SubscriptionService;
use crate::store::SubscriberStore;

/// Subscribe handler: 200 on success, 400 with the list of errors otherwise.
///
/// The body is either JSON or an urlencoded HTML form post.
pub async fn subscribe<S: SubscriberStore>(
    body: Either<web::Json<SubscriptionForm>, web::Form<SubscriptionForm>>,
    service: web::Data<SubscriptionService<S>>,
) -> HttpResponse {
    let form = match body {
        Either::Left(web::Json(form)) | Either::Right(web::Form(form)) => form,
    };
    let outcome = service.create_subscription(&form).await;
    if outcome.success {
        HttpResponse::Ok().json(outcome)
    } else {
        HttpResponse::BadRequest().json(outcome)
    }
}
