use crate::api::RoomApi;
use crate::config::AppConfig;
use crate::error::InquiryError;
use crate::inquiry::{ContactForm, SubmitStatus};
use crate::links::{room_url, visit_request_message, whatsapp_link};
use crate::models::{Room, SubmissionReceipt, TenantInquiry};
use crate::platform::Platform;
use chrono::Utc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Confirmation stays up this long before the form closes itself
pub const VISIT_REQUEST_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// Free "book a visit" form: name and phone, then a WhatsApp handoff
#[derive(Debug, Clone)]
pub struct VisitRequestModal {
    room: Room,
    site_url: String,
    operator_phone: String,
    is_open: bool,
    pub form: ContactForm,
    status: SubmitStatus,
    last_error: Option<String>,
}

impl VisitRequestModal {
    pub fn new(room: Room, config: &AppConfig) -> Self {
        Self {
            room,
            site_url: config.site_url.clone(),
            operator_phone: config.operator_phone.clone(),
            is_open: false,
            form: ContactForm::default(),
            status: SubmitStatus::Idle,
            last_error: None,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close and discard everything entered so far
    pub fn close(&mut self) {
        self.is_open = false;
        self.form = ContactForm::default();
        self.status = SubmitStatus::Idle;
        self.last_error = None;
    }

    pub fn auto_close_delay(&self) -> Duration {
        VISIT_REQUEST_CLOSE_DELAY
    }

    /// WhatsApp link the operator receives for the current form contents
    pub fn whatsapp_url(&self) -> String {
        let link = room_url(&self.site_url, self.room.id);
        let message =
            visit_request_message(&self.form.name, &self.form.phone_number, &self.room, &link);
        whatsapp_link(&self.operator_phone, &message)
    }

    /// Post the inquiry, then open the WhatsApp handoff.
    /// Nothing is sent when a field is missing.
    pub async fn submit(
        &mut self,
        api: &dyn RoomApi,
        platform: &dyn Platform,
    ) -> Result<SubmissionReceipt, InquiryError> {
        if !self.is_open {
            return Err(InquiryError::NotOpen);
        }
        if !self.status.accepts_submit() {
            return Err(InquiryError::InFlight);
        }
        self.form.validate()?;

        let inquiry = TenantInquiry {
            name: self.form.name.trim().to_string(),
            phone_number: self.form.phone_number.trim().to_string(),
            room: self.room.id,
            payment_screenshot: None,
        };

        self.status = SubmitStatus::Submitting;
        self.last_error = None;

        if let Err(e) = api.submit_tenant_inquiry(&inquiry).await {
            error!("Error submitting visit request for room {}: {}", self.room.id, e);
            self.status = SubmitStatus::Error;
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }

        let handoff = self.whatsapp_url();
        if let Err(e) = platform.open_url(&handoff).await {
            warn!("Could not open WhatsApp link: {:#}", e);
        }

        info!("Visit request sent for room {}", self.room.id);
        self.status = SubmitStatus::Success;

        Ok(SubmissionReceipt {
            room: Some(self.room.id),
            name: inquiry.name,
            submitted_at: Utc::now(),
            handoff_url: Some(handoff),
        })
    }

    /// Wait out the confirmation, then close. No-op unless the last submit succeeded.
    pub async fn finish(&mut self) {
        if self.status != SubmitStatus::Success {
            return;
        }
        tokio::time::sleep(self.auto_close_delay()).await;
        self.close();
    }
}
