pub mod api;
pub mod request;

pub use api::{JSearchClient, JSearchConfig, ListingError, DEFAULT_HOST};
pub use request::{build_request, ListingRequest};
