use std::io;

use newsletter_form::configuration::Settings;
use newsletter_form::startup::Application;
use newsletter_form::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("newsletter-form".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config()?;

    // Prepare the application and run it
    let application = Application::build(config)?;
    tracing::info!("Listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
