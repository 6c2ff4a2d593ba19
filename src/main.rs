use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locslug::config::Settings;
use locslug::controller::{LocationController, health_check};
use locslug::domain::{CITY_EXCEPTIONS, COUNTRY_EXCEPTIONS};
use locslug::middleware::RequestId;
use locslug::repository::StaticLocationDirectory;
use locslug::service::LocationService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Settings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.filter_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "falling back to default settings");
    }

    for (category, table) in [("country", &*COUNTRY_EXCEPTIONS), ("city", &*CITY_EXCEPTIONS)] {
        for (slug, name) in table.audit() {
            tracing::warn!(category, slug, name, "exception entry is unreachable from generated links");
        }
        tracing::debug!(category, entries = table.len(), "exception table loaded");
    }

    let base_path = settings.routes.normalized_base_path();
    let directory = StaticLocationDirectory::from_settings(&settings.directory);
    let controller = LocationController::new(LocationService::new(directory, &settings.routes));
    let address = format!("{}:{}", settings.application.host, settings.application.port);

    tracing::info!(%address, %base_path, "starting location page server");

    HttpServer::new(move || {
        let controller = controller.clone();
        let base_path = base_path.clone();
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .configure(move |cfg| LocationController::configure(cfg, controller, &base_path))
    })
    .bind(&address)
    .with_context(|| format!("failed to bind {address}"))?
    .run()
    .await
    .context("server terminated with an error")?;

    Ok(())
}
