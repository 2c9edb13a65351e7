mod subscribers;
mod subscriptions;
