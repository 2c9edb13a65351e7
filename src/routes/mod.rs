mod health_check;
mod helpers;
mod stats;
mod subscribers;
mod subscriptions;

pub use health_check::*;
pub use helpers::*;
pub use stats::*;
pub use subscribers::*;
pub use subscriptions::*;
