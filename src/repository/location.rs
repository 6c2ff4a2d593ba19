use async_trait::async_trait;
use thiserror::Error;

use crate::config::settings::DirectorySettings;
use crate::domain::Category;

/// Source of the geographic names currently known to the backend. Each call
/// returns one fresh batch.
#[async_trait]
pub trait LocationDirectory {
    async fn list_names(&self, category: Category) -> Result<Vec<String>, DirectoryError>;
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("location directory unavailable: {0}")]
    Unavailable(String),
}

/// Directory backed by name lists held in memory, typically the
/// `directory` section of the settings.
#[derive(Debug, Clone, Default)]
pub struct StaticLocationDirectory {
    countries: Vec<String>,
    cities: Vec<String>,
}

impl StaticLocationDirectory {
    pub fn new(countries: Vec<String>, cities: Vec<String>) -> Self {
        Self { countries, cities }
    }

    pub fn from_settings(settings: &DirectorySettings) -> Self {
        Self::new(settings.countries.clone(), settings.cities.clone())
    }
}

#[async_trait]
impl LocationDirectory for StaticLocationDirectory {
    async fn list_names(&self, category: Category) -> Result<Vec<String>, DirectoryError> {
        let names = match category {
            Category::Country => &self.countries,
            Category::City => &self.cities,
        };
        Ok(names.clone())
    }
}
