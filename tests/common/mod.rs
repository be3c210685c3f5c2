#![allow(dead_code)]

use anyhow::Result;
use apnaroom::api::{FilterState, RoomApi, SortOrder};
use apnaroom::error::ApiError;
use apnaroom::models::{
    Colony, LandlordInquiry, Room, RoomImage, RoomType, TenantInquiry, TenantType,
};
use apnaroom::platform::{Platform, ShareData};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn room(id: i64, title: &str, price: i64, colony: &str, tenant_type: TenantType) -> Room {
    Room {
        id,
        title: title.to_string(),
        description: Some(format!("{} in {}", title, colony)),
        price,
        address: format!("House {}, {}", id, colony),
        colony_name: colony.to_string(),
        room_type: RoomType::SingleRoom,
        tenant_type,
        is_available: true,
        images: vec![
            RoomImage {
                id: id * 10 + 1,
                url: format!("https://res.cloudinary.com/demo/image/upload/room{}a.jpg", id),
            },
            RoomImage {
                id: id * 10 + 2,
                url: format!("https://res.cloudinary.com/demo/image/upload/room{}b.jpg", id),
            },
        ],
        video: None,
        place_name: None,
        distance_km: None,
    }
}

pub fn sunny_room() -> Room {
    room(7, "Sunny Room", 8000, "Vikas Colony", TenantType::Girls)
}

pub fn sample_rooms() -> Vec<Room> {
    vec![
        sunny_room(),
        room(8, "Corner Room", 5500, "Civil Lines", TenantType::Boys),
        Room {
            room_type: RoomType::OneBedroom,
            ..room(9, "Family Flat", 12000, "Vikas Colony", TenantType::Family)
        },
        room(10, "Budget Room", 3500, "Shastri Nagar", TenantType::Any),
        room(11, "Quiet Room", 6000, "Civil Lines", TenantType::Girls),
    ]
}

/// In-memory backend that filters like the real one and records submissions
#[derive(Default)]
pub struct FakeApi {
    pub rooms: Vec<Room>,
    pub colonies: Vec<Colony>,
    pub tenant_inquiries: Mutex<Vec<TenantInquiry>>,
    pub landlord_inquiries: Mutex<Vec<LandlordInquiry>>,
    pub colony_calls: AtomicUsize,
    pub room_calls: AtomicUsize,
    pub post_calls: AtomicUsize,
    pub fail_rooms: AtomicBool,
    pub fail_posts: AtomicBool,
    delays: Mutex<Vec<(FilterState, Duration)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            rooms: sample_rooms(),
            colonies: vec![
                Colony { id: 1, name: "Civil Lines".into() },
                Colony { id: 2, name: "Shastri Nagar".into() },
                Colony { id: 3, name: "Vikas Colony".into() },
            ],
            ..Self::default()
        }
    }

    /// Make the room fetch for `filters` take `delay`
    pub fn delay_for(&self, filters: FilterState, delay: Duration) {
        self.delays.lock().unwrap().push((filters, delay));
    }

    pub fn posts(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }

    fn matches(room: &Room, filters: &FilterState) -> bool {
        let search = filters.search.trim().to_lowercase();
        if !search.is_empty() {
            let haystack = format!(
                "{} {} {} {}",
                room.title,
                room.description.clone().unwrap_or_default(),
                room.colony_name,
                room.address
            )
            .to_lowercase();
            if !haystack.contains(&search) {
                return false;
            }
        }
        if !filters.colony_name.is_empty() && room.colony_name != filters.colony_name {
            return false;
        }
        if let Some(room_type) = &filters.room_type {
            if &room.room_type != room_type {
                return false;
            }
        }
        if let Some(tenant_type) = filters.tenant_type {
            if room.tenant_type != tenant_type {
                return false;
            }
        }
        !(filters.available_only && !room.is_available)
    }
}

#[async_trait]
impl RoomApi for FakeApi {
    async fn list_colonies(&self) -> Result<Vec<Colony>, ApiError> {
        self.colony_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.colonies.clone())
    }

    async fn list_rooms(&self, filters: &FilterState) -> Result<Vec<Room>, ApiError> {
        self.room_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self
            .delays
            .lock()
            .unwrap()
            .iter()
            .find(|(f, _)| f == filters)
            .map(|(_, d)| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_rooms.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                body: "boom".into(),
            });
        }

        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|room| Self::matches(room, filters))
            .cloned()
            .collect();
        match filters.ordering {
            SortOrder::Newest => rooms.sort_by_key(|r| std::cmp::Reverse(r.id)),
            SortOrder::PriceLowToHigh => rooms.sort_by_key(|r| r.price),
            SortOrder::PriceHighToLow => rooms.sort_by_key(|r| std::cmp::Reverse(r.price)),
        }
        Ok(rooms)
    }

    async fn get_room(&self, id: i64) -> Result<Option<Room>, ApiError> {
        Ok(self.rooms.iter().find(|room| room.id == id).cloned())
    }

    async fn submit_tenant_inquiry(&self, inquiry: &TenantInquiry) -> Result<(), ApiError> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 400,
                body: "{\"phone_number\": [\"invalid\"]}".into(),
            });
        }
        self.tenant_inquiries.lock().unwrap().push(inquiry.clone());
        Ok(())
    }

    async fn submit_landlord_inquiry(&self, inquiry: &LandlordInquiry) -> Result<(), ApiError> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                body: String::new(),
            });
        }
        self.landlord_inquiries.lock().unwrap().push(inquiry.clone());
        Ok(())
    }
}

/// Host double that records every external effect
#[derive(Default)]
pub struct RecordingPlatform {
    pub native_share: bool,
    pub fail_clipboard: bool,
    pub opened: Mutex<Vec<String>>,
    pub copied: Mutex<Vec<String>>,
    pub shared: Mutex<Vec<ShareData>>,
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingPlatform {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for RecordingPlatform {
    fn can_share(&self) -> bool {
        self.native_share
    }

    async fn share(&self, data: &ShareData) -> Result<()> {
        self.shared.lock().unwrap().push(data.clone());
        Ok(())
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        if self.fail_clipboard {
            anyhow::bail!("clipboard permission denied");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
