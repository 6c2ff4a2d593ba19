pub mod location;

pub use location::{DirectoryError, LocationDirectory, StaticLocationDirectory};
