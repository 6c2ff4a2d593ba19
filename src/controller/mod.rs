pub mod health;
pub mod location;

pub use health::health_check;
pub use location::LocationController;
