use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::Category;
use crate::dto::location::LinksRequest;
use crate::repository::LocationDirectory;
use crate::service::location::LocationService;
use crate::util::error::LocationError;
use crate::util::{AppError, ResponseBuilder};

pub struct LocationController<D>
where
    D: LocationDirectory + Send + Sync + 'static,
{
    service: Arc<LocationService<D>>,
}

impl<D> Clone for LocationController<D>
where
    D: LocationDirectory + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<D> LocationController<D>
where
    D: LocationDirectory + Send + Sync + 'static,
{
    pub fn new(service: LocationService<D>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Mount the location routes under `base_path` (e.g. `/research-jobs`).
    pub fn configure(cfg: &mut web::ServiceConfig, controller: LocationController<D>, base_path: &str) {
        let controller = web::Data::new(controller);
        cfg.service(
            web::scope(base_path)
                .app_data(controller)
                .route("/links/{category}", web::post().to(Self::links))
                .route("/{category}", web::get().to(Self::index))
                .route("/{category}/{slug}", web::get().to(Self::show)),
        );
    }

    async fn index(
        controller: web::Data<LocationController<D>>,
        path: web::Path<String>,
    ) -> Result<HttpResponse, AppError> {
        let category = parse_category(&path)?;
        let index = controller.service.page_index(category).await?;
        ResponseBuilder::ok(index)
    }

    async fn show(
        controller: web::Data<LocationController<D>>,
        path: web::Path<(String, String)>,
    ) -> Result<HttpResponse, AppError> {
        let (category, slug) = path.into_inner();
        let category = parse_category(&category)?;
        let resolved = controller.service.resolve(category, &slug).await?;
        ResponseBuilder::ok(resolved)
    }

    async fn links(
        controller: web::Data<LocationController<D>>,
        path: web::Path<String>,
        payload: web::Json<LinksRequest>,
    ) -> Result<HttpResponse, AppError> {
        let category = parse_category(&path)?;
        let batch = controller.service.links(category, payload.into_inner())?;
        ResponseBuilder::ok(batch)
    }
}

fn parse_category(segment: &str) -> Result<Category, AppError> {
    segment
        .parse::<Category>()
        .map_err(|err| AppError::from(LocationError::from(err)))
}
