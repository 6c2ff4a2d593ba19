pub mod category;
pub mod exceptions;
pub mod slug_map;

pub use category::{Category, UnknownCategory};
pub use exceptions::{CITY_EXCEPTIONS, COUNTRY_EXCEPTIONS, ExceptionMap};
pub use slug_map::{SlugCollision, SlugMap, build_slug_map};
