use crate::api::RoomApi;
use crate::config::AppConfig;
use crate::inquiry::{detail_breakdown, BookingModal, RentBreakdown, VisitRequestModal};
use crate::links::{optimized_image_url, room_url, share_text, GALLERY_IMAGE_WIDTH};
use crate::models::{Room, RoomImage};
use crate::platform::{Platform, ShareData};
use std::sync::Arc;
use tracing::{error, info, warn};

/// What the detail page currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    NotFound,
    Loaded {
        room: Room,
        /// Id of the image shown large; the first image after loading
        active_image: Option<i64>,
    },
}

/// How a share action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet was used
    Shared,
    /// Link went to the clipboard instead
    Copied,
    Failed,
}

/// Single-room page with gallery, pricing and the inquiry entry points
pub struct DetailView {
    api: Arc<dyn RoomApi>,
    config: AppConfig,
    state: DetailState,
}

impl DetailView {
    pub fn new(api: Arc<dyn RoomApi>, config: AppConfig) -> Self {
        Self {
            api,
            config,
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn room(&self) -> Option<&Room> {
        match &self.state {
            DetailState::Loaded { room, .. } => Some(room),
            _ => None,
        }
    }

    /// Fetch the room; any failure ends on the "not found" page.
    /// Called again whenever the identifier changes.
    pub async fn load(&mut self, id: i64) -> &DetailState {
        self.state = DetailState::Loading;

        self.state = match self.api.get_room(id).await {
            Ok(Some(room)) => {
                info!("Loaded room {} ({})", room.id, room.title);
                let active_image = room.images.first().map(|img| img.id);
                DetailState::Loaded { room, active_image }
            }
            Ok(None) => {
                warn!("Room {} not found", id);
                DetailState::NotFound
            }
            Err(e) => {
                error!("Error loading room {}: {}", id, e);
                DetailState::NotFound
            }
        };
        &self.state
    }

    /// Make a thumbnail the large image. Unknown ids are ignored.
    pub fn select_image(&mut self, image_id: i64) -> bool {
        if let DetailState::Loaded { room, active_image } = &mut self.state {
            if room.images.iter().any(|img| img.id == image_id) {
                *active_image = Some(image_id);
                return true;
            }
        }
        false
    }

    pub fn active_image(&self) -> Option<&RoomImage> {
        match &self.state {
            DetailState::Loaded {
                room,
                active_image: Some(id),
            } => room.images.iter().find(|img| img.id == *id),
            _ => None,
        }
    }

    /// CDN URL for the large image
    pub fn active_image_url(&self) -> Option<String> {
        self.active_image()
            .map(|img| optimized_image_url(&img.url, GALLERY_IMAGE_WIDTH))
    }

    pub fn page_url(&self) -> Option<String> {
        self.room().map(|room| room_url(&self.config.site_url, room.id))
    }

    /// 25% now / 75% on move-in, as advertised on the page
    pub fn rent_breakdown(&self) -> Option<RentBreakdown> {
        self.room().map(|room| detail_breakdown(room.price))
    }

    /// Native share when available, clipboard otherwise. Failures are only logged.
    pub async fn share(&self, platform: &dyn Platform) -> ShareOutcome {
        let (room, url) = match (self.room(), self.page_url()) {
            (Some(room), Some(url)) => (room, url),
            _ => return ShareOutcome::Failed,
        };

        if platform.can_share() {
            let data = ShareData {
                title: room.title.clone(),
                text: share_text(room),
                url,
            };
            return match platform.share(&data).await {
                Ok(()) => ShareOutcome::Shared,
                Err(e) => {
                    error!("Error sharing: {:#}", e);
                    ShareOutcome::Failed
                }
            };
        }

        match platform.copy_to_clipboard(&url).await {
            Ok(()) => {
                platform.alert("Link copied to clipboard! 📋");
                ShareOutcome::Copied
            }
            Err(e) => {
                error!("Error sharing: {:#}", e);
                ShareOutcome::Failed
            }
        }
    }

    /// "Book a Visit": the free visit-request form, already open
    pub fn open_visit_request(&self) -> Option<VisitRequestModal> {
        self.room().map(|room| {
            let mut modal = VisitRequestModal::new(room.clone(), &self.config);
            modal.open();
            modal
        })
    }

    /// "Book Now": the 50% deposit form, already open
    pub fn open_deposit_booking(&self) -> Option<BookingModal> {
        self.room().map(|room| {
            let mut modal = BookingModal::deposit(room.clone(), &self.config);
            modal.open();
            modal
        })
    }

    /// Paid visit: the flat-fee form, already open
    pub fn open_visit_booking(&self) -> Option<BookingModal> {
        self.room().map(|room| {
            let mut modal = BookingModal::visit_fee(room.clone(), &self.config);
            modal.open();
            modal
        })
    }
}
