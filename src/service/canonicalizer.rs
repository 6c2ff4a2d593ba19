use crate::domain::{CITY_EXCEPTIONS, COUNTRY_EXCEPTIONS, Category, ExceptionMap, SlugMap, build_slug_map};
use crate::util::canonical::{is_valid_slug, normalize, title_case};

/// Name ↔ slug conversion for a single category, bound to that category's
/// exception table. Country and city each get their own instance.
#[derive(Debug, Clone, Copy)]
pub struct Canonicalizer<'a> {
    category: Category,
    exceptions: &'a ExceptionMap,
}

impl Canonicalizer<'static> {
    pub fn country() -> Self {
        Self::new(Category::Country, &COUNTRY_EXCEPTIONS)
    }

    pub fn city() -> Self {
        Self::new(Category::City, &CITY_EXCEPTIONS)
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Country => Self::country(),
            Category::City => Self::city(),
        }
    }
}

impl<'a> Canonicalizer<'a> {
    pub fn new(category: Category, exceptions: &'a ExceptionMap) -> Self {
        Self {
            category,
            exceptions,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn exceptions(&self) -> &'a ExceptionMap {
        self.exceptions
    }

    pub fn normalize(&self, name: &str) -> String {
        normalize(name)
    }

    /// Best-effort display name for a slug. Curated entries win; everything
    /// else goes through generic title-casing and may not match the original
    /// name exactly.
    pub fn denormalize(&self, slug: &str) -> String {
        match self.exceptions.get(slug) {
            Some(name) => name.to_string(),
            None => title_case(slug),
        }
    }

    /// Like [`Canonicalizer::denormalize`], but names from the current data
    /// batch take precedence over the static table.
    pub fn denormalize_with(&self, slug: &str, runtime: &SlugMap) -> String {
        match runtime.get(slug) {
            Some(name) => name.to_string(),
            None => self.denormalize(slug),
        }
    }

    pub fn is_valid_slug(&self, candidate: &str) -> bool {
        is_valid_slug(candidate)
    }

    pub fn build_slug_map<I, S>(&self, names: I) -> SlugMap
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        build_slug_map(names)
    }
}
