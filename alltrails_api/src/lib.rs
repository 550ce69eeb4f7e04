mod client;
mod errors;
pub mod types;
mod user_agent;
pub use self::client::{FetchConfig, Fetcher, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{FetchError, FetchErrorKind};
pub use self::types::{ParkSlug, SlugError, TrailDetail, TrailSlug, TrailSummary};
pub use self::user_agent::get_user_agent;
