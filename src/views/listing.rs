use crate::api::{FilterState, RoomApi, SortOrder};
use crate::links::{format_inr, optimized_image_url, CARD_IMAGE_WIDTH, PLACEHOLDER_IMAGE};
use crate::models::{Colony, Room, RoomType, TenantType};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error, info};

/// Skeleton cards rendered while a fetch is pending
pub const PLACEHOLDER_COUNT: usize = 6;

/// Summary card for one room in the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomCard {
    pub id: i64,
    pub title: String,
    pub colony_name: String,
    pub price: String,
    pub room_type: String,
    pub tenant_badge: &'static str,
    pub image_url: String,
    pub verified: bool,
}

impl From<&Room> for RoomCard {
    fn from(room: &Room) -> Self {
        let image_url = room
            .images
            .first()
            .map(|img| optimized_image_url(&img.url, CARD_IMAGE_WIDTH))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Self {
            id: room.id,
            title: room.title.clone(),
            colony_name: room.colony_name.clone(),
            price: format_inr(room.price),
            room_type: room.room_type.label(),
            tenant_badge: room.tenant_type.badge(),
            image_url,
            verified: room.is_available,
        }
    }
}

/// What the room grid shows right now
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ListingRender {
    Loading { placeholders: usize },
    Empty,
    Cards(Vec<RoomCard>),
}

/// Result of one filter change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// This fetch was the latest and its rooms are now shown
    Applied(usize),
    /// A newer filter change arrived; result (if any) was dropped
    Superseded,
    /// The fetch failed; the previous rooms stay on screen
    Failed,
}

#[derive(Debug, Default)]
struct ListingState {
    filters: FilterState,
    rooms: Vec<Room>,
    colonies: Vec<Colony>,
    colonies_loaded: bool,
    loading: bool,
}

/// Filterable room grid.
///
/// Each filter change is debounced; only the most recent change's response is
/// ever applied, so a slow earlier fetch cannot overwrite a newer result.
pub struct ListingView {
    api: Arc<dyn RoomApi>,
    debounce: Duration,
    generation: AtomicU64,
    state: Mutex<ListingState>,
}

impl ListingView {
    pub fn new(api: Arc<dyn RoomApi>, debounce: Duration) -> Self {
        Self {
            api,
            debounce,
            generation: AtomicU64::new(0),
            state: Mutex::new(ListingState {
                loading: true,
                ..ListingState::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Colonies once, then the unfiltered room list
    pub async fn mount(&self) -> FetchOutcome {
        self.load_colonies().await;
        self.set_filters(FilterState::default()).await
    }

    /// Fetch the colony list for the location filter. Only the first call hits the API.
    pub async fn load_colonies(&self) {
        if self.state().colonies_loaded {
            return;
        }

        match self.api.list_colonies().await {
            Ok(colonies) => {
                debug!("Loaded {} colonies", colonies.len());
                let mut state = self.state();
                state.colonies = colonies;
                state.colonies_loaded = true;
            }
            Err(e) => error!("Error fetching colonies: {}", e),
        }
    }

    /// Replace the filter state and refetch after the debounce delay
    pub async fn set_filters(&self, filters: FilterState) -> FetchOutcome {
        let generation = {
            let mut state = self.state();
            state.filters = filters.clone();
            state.loading = true;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(generation) {
            debug!("Filter change {} superseded before fetching", generation);
            return FetchOutcome::Superseded;
        }

        let result = self.api.list_rooms(&filters).await;

        // generation only moves while the state lock is held, so checking it
        // under the lock makes the check and the write one step
        let mut state = self.state();
        if !self.is_current(generation) {
            debug!("Discarding stale room list from request {}", generation);
            return FetchOutcome::Superseded;
        }
        state.loading = false;
        match result {
            Ok(rooms) => {
                info!("Showing {} rooms", rooms.len());
                let count = rooms.len();
                state.rooms = rooms;
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                error!("Error fetching rooms: {}", e);
                FetchOutcome::Failed
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn update<F>(&self, change: F) -> FetchOutcome
    where
        F: FnOnce(&mut FilterState),
    {
        let mut filters = self.filters();
        change(&mut filters);
        self.set_filters(filters).await
    }

    pub async fn set_search(&self, text: impl Into<String>) -> FetchOutcome {
        let text = text.into();
        self.update(|f| f.search = text).await
    }

    pub async fn set_colony(&self, colony_name: impl Into<String>) -> FetchOutcome {
        let colony_name = colony_name.into();
        self.update(|f| f.colony_name = colony_name).await
    }

    pub async fn set_room_type(&self, room_type: Option<RoomType>) -> FetchOutcome {
        self.update(|f| f.room_type = room_type).await
    }

    pub async fn set_tenant_type(&self, tenant_type: Option<TenantType>) -> FetchOutcome {
        self.update(|f| f.tenant_type = tenant_type).await
    }

    pub async fn set_ordering(&self, ordering: SortOrder) -> FetchOutcome {
        self.update(|f| f.ordering = ordering).await
    }

    pub async fn set_available_only(&self, available_only: bool) -> FetchOutcome {
        self.update(|f| f.available_only = available_only).await
    }

    /// "Reset Filters"
    pub async fn clear_filters(&self) -> FetchOutcome {
        self.set_filters(FilterState::default()).await
    }

    pub fn filters(&self) -> FilterState {
        self.state().filters.clone()
    }

    pub fn colonies(&self) -> Vec<Colony> {
        self.state().colonies.clone()
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.state().rooms.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn render(&self) -> ListingRender {
        let state = self.state();
        if state.loading {
            ListingRender::Loading {
                placeholders: PLACEHOLDER_COUNT,
            }
        } else if state.rooms.is_empty() {
            ListingRender::Empty
        } else {
            ListingRender::Cards(state.rooms.iter().map(RoomCard::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomImage;

    #[test]
    fn card_uses_first_image_and_labels() {
        let room = Room {
            id: 3,
            title: "Corner Room".into(),
            description: None,
            price: 125000,
            address: String::new(),
            colony_name: "Civil Lines".into(),
            room_type: RoomType::DoubleRoom,
            tenant_type: TenantType::Family,
            is_available: false,
            images: vec![RoomImage {
                id: 1,
                url: "https://res.cloudinary.com/d/image/upload/a.jpg".into(),
            }],
            video: None,
            place_name: None,
            distance_km: None,
        };

        let card = RoomCard::from(&room);
        assert_eq!(card.price, "₹1,25,000");
        assert_eq!(card.room_type, "2 Room Set");
        assert_eq!(card.tenant_badge, "Family");
        assert!(!card.verified);
        assert_eq!(
            card.image_url,
            "https://res.cloudinary.com/d/image/upload/f_auto,q_auto,w_600/a.jpg"
        );

        let bare = RoomCard::from(&Room { images: vec![], ..room });
        assert_eq!(bare.image_url, PLACEHOLDER_IMAGE);
    }
}
