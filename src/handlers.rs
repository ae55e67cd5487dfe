mod ai_search;
mod common;
mod search_page;

pub use ai_search::{ai_search, ai_search_redirect};
pub use common::health;
pub use search_page::{search_page, LISTINGS_NOT_CONFIGURED, LISTINGS_UNAVAILABLE};
