pub mod detail;
pub mod listing;

pub use detail::{DetailState, DetailView, ShareOutcome};
pub use listing::{FetchOutcome, ListingRender, ListingView, RoomCard};
