use std::sync::Arc;

use tracing::instrument;
use validator::{Validate, ValidationErrors};

use crate::config::settings::RouteSettings;
use crate::domain::Category;
use crate::dto::location::{
    LinkBatch, LinksRequest, LocationLink, LocationPage, PageIndex, ResolvedLocation,
};
use crate::repository::LocationDirectory;
use crate::service::canonicalizer::Canonicalizer;
use crate::util::error::{BusinessError, LocationError, ValidationField};
use crate::util::AppError;

/// Link construction and slug resolution for the location pages.
#[derive(Clone)]
pub struct LocationService<D: LocationDirectory + Send + Sync + 'static> {
    directory: Arc<D>,
    base_path: String,
}

impl<D> LocationService<D>
where
    D: LocationDirectory + Send + Sync + 'static,
{
    pub fn new(directory: D, routes: &RouteSettings) -> Self {
        Self {
            directory: Arc::new(directory),
            base_path: routes.normalized_base_path(),
        }
    }

    pub fn canonicalizer(&self, category: Category) -> Canonicalizer<'static> {
        Canonicalizer::for_category(category)
    }

    fn page_path(&self, category: Category, slug: &str) -> String {
        format!("{}/{}/{}", self.base_path, category, slug)
    }

    /// Build the page link for one name. An empty slug is refused rather
    /// than producing a degenerate path.
    pub fn path_for(&self, category: Category, name: &str) -> Result<LocationLink, AppError> {
        let slug = self.canonicalizer(category).normalize(name);
        if slug.is_empty() {
            return Err(LocationError::Unrepresentable(name.to_string()).into());
        }
        Ok(LocationLink {
            name: name.to_string(),
            path: self.page_path(category, &slug),
            slug,
        })
    }

    #[instrument(skip(self, payload), fields(count = payload.names.len()))]
    pub fn links(&self, category: Category, payload: LinksRequest) -> Result<LinkBatch, AppError> {
        payload
            .validate()
            .map_err(|err| AppError::from(BusinessError::Validation(validation_errors(err))))?;

        let mut links = Vec::with_capacity(payload.names.len());
        let mut rejected = Vec::new();
        for name in payload.names {
            match self.path_for(category, &name) {
                Ok(link) => links.push(link),
                Err(_) => {
                    tracing::debug!(%category, name = %name, "name has no slug, skipping link");
                    rejected.push(name);
                }
            }
        }

        Ok(LinkBatch {
            category,
            links,
            rejected,
        })
    }

    /// Resolve an incoming path segment to a display name. Malformed
    /// segments are rejected before any lookup.
    #[instrument(skip(self))]
    pub async fn resolve(&self, category: Category, slug: &str) -> Result<ResolvedLocation, AppError> {
        let canonicalizer = self.canonicalizer(category);
        if !canonicalizer.is_valid_slug(slug) {
            tracing::debug!("rejecting malformed slug");
            return Err(LocationError::InvalidSlug(slug.to_string()).into());
        }

        let names = self.directory.list_names(category).await?;
        let batch = canonicalizer.build_slug_map(names);
        let name = canonicalizer.denormalize_with(slug, &batch);

        Ok(ResolvedLocation {
            category,
            slug: slug.to_string(),
            path: self.page_path(category, slug),
            known: batch.contains(slug),
            name,
        })
    }

    /// Enumerate one page per slug in the current directory batch.
    #[instrument(skip(self))]
    pub async fn page_index(&self, category: Category) -> Result<PageIndex, AppError> {
        let canonicalizer = self.canonicalizer(category);
        let names = self.directory.list_names(category).await?;
        let batch = canonicalizer.build_slug_map(names.iter().cloned());

        for collision in batch.collisions(&names) {
            // last-write-wins is kept as is; surface it for operators
            tracing::warn!(
                %category,
                slug = %collision.slug,
                names = ?collision.names,
                winner = %collision.winner,
                "several names share one slug"
            );
        }

        let pages = batch
            .into_iter()
            .filter_map(|(slug, name)| {
                if slug.is_empty() {
                    tracing::warn!(%category, name = %name, "skipping unrepresentable name");
                    return None;
                }
                Some(LocationPage {
                    path: self.page_path(category, &slug),
                    slug,
                    name,
                })
            })
            .collect();

        Ok(PageIndex { category, pages })
    }
}

fn validation_errors(err: ValidationErrors) -> Vec<ValidationField> {
    let mut fields = Vec::new();
    for (field, errors) in err.field_errors() {
        for error in errors {
            let message = error
                .message
                .clone()
                .unwrap_or_else(|| "invalid value".into());
            fields.push(ValidationField {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }
    fields
}
