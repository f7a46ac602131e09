// Core pipeline exports
pub mod categorize;
pub mod directory;
pub mod distance;
pub mod locator;
pub mod ranking;
pub mod session;

pub use categorize::{classify, CATEGORY_RULES};
pub use directory::national_resources;
pub use distance::{haversine_miles, miles_to_meters};
pub use locator::{ResourceLocator, SearchError, SearchOutcome};
pub use ranking::{compose_address, filter_by_category, rank_resources};
pub use session::{SearchSession, SearchState, SearchToken};
