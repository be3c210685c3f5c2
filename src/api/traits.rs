use crate::api::types::FilterState;
use crate::error::ApiError;
use crate::models::{Colony, LandlordInquiry, Room, TenantInquiry};
use async_trait::async_trait;

/// Typed view of the listing backend.
/// Views and forms only talk to this trait, so any transport (or an
/// in-memory double) can stand behind them.
#[async_trait]
pub trait RoomApi: Send + Sync {
    /// `GET /api/colonies/`
    async fn list_colonies(&self) -> Result<Vec<Colony>, ApiError>;

    /// `GET /api/rooms/` with the filter state as query parameters
    async fn list_rooms(&self, filters: &FilterState) -> Result<Vec<Room>, ApiError>;

    /// `GET /api/rooms/{id}/`, `None` when the backend answers 404
    async fn get_room(&self, id: i64) -> Result<Option<Room>, ApiError>;

    /// `POST /api/inquire/tenant/`, multipart when a screenshot is attached
    async fn submit_tenant_inquiry(&self, inquiry: &TenantInquiry) -> Result<(), ApiError>;

    /// `POST /api/inquire/landlord/`
    async fn submit_landlord_inquiry(&self, inquiry: &LandlordInquiry) -> Result<(), ApiError>;
}
