//! Client for the ApnaRoom room-rental marketplace: listing and detail
//! views, tenant booking forms and the landlord lead form.

pub mod api;
pub mod config;
pub mod error;
pub mod inquiry;
pub mod landlord;
pub mod links;
pub mod models;
pub mod platform;
pub mod views;

pub use api::{ApiClient, FilterState, RoomApi, SortOrder};
pub use config::AppConfig;
pub use error::{ApiError, InquiryError, ValidationError};
pub use platform::{Platform, TerminalPlatform};
