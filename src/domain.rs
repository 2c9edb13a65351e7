mod new_subscriber;
mod subscriber;
mod subscriber_email;
mod subscriber_name;
mod subscription_form;
mod validation;

pub use new_subscriber::*;
pub use subscriber::*;
pub use subscriber_email::*;
pub use subscriber_name::*;
pub use subscription_form::*;
pub use validation::*;
