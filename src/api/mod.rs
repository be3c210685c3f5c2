pub mod client;
pub mod traits;
pub mod types;

pub use client::{ApiClient, FormField, RequestBody};
pub use traits::RoomApi;
pub use types::{FilterState, SortOrder};
