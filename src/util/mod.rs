pub mod canonical;
pub mod error;
pub mod response;

pub use canonical::{is_canonical_slug, is_valid_slug, normalize, title_case};
pub use error::{AppError, BusinessError, ExternalError, LocationError, ValidationField};
pub use response::{ApiResponse, ResponseBuilder};
