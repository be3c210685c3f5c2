use crate::api::RoomApi;
use crate::error::{InquiryError, ValidationError};
use crate::inquiry::SubmitStatus;
use crate::models::{LandlordInquiry, SubmissionReceipt};
use chrono::Utc;
use std::time::Duration;
use tracing::{error, info};

/// Success message stays up this long before the form resets and closes
pub const LANDLORD_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// "List your property" lead form, independent of any room
#[derive(Debug, Clone, Default)]
pub struct LandlordForm {
    is_open: bool,
    pub name: String,
    pub phone_number: String,
    pub address: String,
    status: SubmitStatus,
}

impl LandlordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::MissingField("phone_number"));
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address"));
        }
        Ok(())
    }

    pub async fn submit(&mut self, api: &dyn RoomApi) -> Result<SubmissionReceipt, InquiryError> {
        if !self.is_open {
            return Err(InquiryError::NotOpen);
        }
        if !self.status.accepts_submit() {
            return Err(InquiryError::InFlight);
        }
        self.validate()?;

        let inquiry = LandlordInquiry {
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            address: self.address.trim().to_string(),
        };

        self.status = SubmitStatus::Submitting;
        match api.submit_landlord_inquiry(&inquiry).await {
            Ok(()) => {
                info!("Landlord lead sent for {}", inquiry.name);
                self.status = SubmitStatus::Success;
                Ok(SubmissionReceipt {
                    room: None,
                    name: inquiry.name,
                    submitted_at: Utc::now(),
                    handoff_url: None,
                })
            }
            Err(e) => {
                error!("Error submitting landlord lead: {}", e);
                self.status = SubmitStatus::Error;
                Err(e.into())
            }
        }
    }

    /// After a success, wait, then reset and close
    pub async fn finish(&mut self) {
        if self.status != SubmitStatus::Success {
            return;
        }
        tokio::time::sleep(LANDLORD_CLOSE_DELAY).await;
        self.close();
    }
}
