use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer, Resource};
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::configuration::{Settings, StoreBackend};
use crate::routes::{
    delete_subscriber, form_error_handler, get_subscriber, health_check, json_error_handler,
    list_subscribers, route_not_found, stats, subscribe,
};
use crate::service::SubscriptionService;
use crate::store::{InMemorySubscriberStore, PgSubscriberStore, SubscriberStore};

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings, using the configured store
    pub fn build(config: Settings) -> anyhow::Result<Self> {
        match config.store {
            StoreBackend::Postgres => {
                // Connect to the database
                let db_pool = PgPoolOptions::new()
                    .acquire_timeout(config.database.acquire_timeout())
                    .connect_lazy_with(config.database.db_options());
                Self::build_with_store(&config, PgSubscriberStore::new(db_pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Subscribers are kept in memory and will be lost on shutdown");
                Self::build_with_store(&config, InMemorySubscriberStore::new())
            }
        }
    }

    /// Build an application based on settings and an explicit subscriber store
    pub fn build_with_store<S: SubscriberStore>(config: &Settings, store: S) -> anyhow::Result<Self> {
        // Run the HTTP server and return its data
        let listener = net::TcpListener::bind(config.application.address())?;
        let port = listener.local_addr()?.port();
        let server = run_server(listener, SubscriptionService::new(store))?;
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server<S: SubscriberStore>(
    listener: net::TcpListener,
    service: SubscriptionService<S>,
) -> io::Result<Server> {
    // Prepare data to be added the application context
    let service = web::Data::new(service);

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::FormConfig::default().error_handler(form_error_handler))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .service(api_resource("/subscribe").route(web::post().to(subscribe::<S>)))
                    .service(
                        api_resource("/subscribers").route(web::get().to(list_subscribers::<S>)),
                    )
                    .service(
                        api_resource("/subscribers/{id}")
                            .route(web::get().to(get_subscriber::<S>))
                            .route(web::delete().to(delete_subscriber::<S>)),
                    )
                    .service(api_resource("/stats").route(web::get().to(stats::<S>))),
            )
            .default_service(web::route().to(route_not_found))
            .app_data(service.clone())
    })
    .listen(listener)?
    .run())
}

/// API resource answering unsupported methods like unmatched routes
fn api_resource(path: &str) -> Resource {
    web::resource(path).default_service(web::route().to(route_not_found))
}
