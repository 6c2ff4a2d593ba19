pub mod canonicalizer;
pub mod location;

pub use canonicalizer::Canonicalizer;
pub use location::LocationService;
