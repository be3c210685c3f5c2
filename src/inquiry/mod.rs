//! Tenant inquiry and booking forms.
//!
//! Every form owns its own state and starts closed. Opening shows the first
//! step, closing (at any point) throws away whatever was entered.

pub mod booking;
pub mod pricing;
pub mod visit;

pub use booking::{BookingModal, BookingPlan};
pub use pricing::{deposit_breakdown, detail_breakdown, RentBreakdown, VISIT_FEE};
pub use visit::VisitRequestModal;

use crate::error::{InquiryError, ValidationError};
use crate::models::ProofImage;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;

/// How long the "copied" acknowledgement stays visible
pub const COPY_ACK: Duration = Duration::from_secs(2);

/// Steps of the paid booking flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Step {
    /// Breakdown plus QR / UPI instructions
    #[default]
    PaymentInstructions,
    /// Contact details and screenshot upload
    ProofUpload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PaymentTab {
    #[default]
    Qr,
    UpiId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Submit control is disabled while a request is in flight or after success
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmitStatus::Idle | SubmitStatus::Error)
    }
}

/// Name and phone captured by every tenant form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub phone_number: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::MissingField("phone_number"));
        }
        Ok(())
    }
}

/// Transient "copied" badge next to the UPI id
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyAck {
    until: Option<Instant>,
}

impl CopyAck {
    pub fn mark(&mut self) {
        self.until = Some(Instant::now() + COPY_ACK);
    }

    pub fn is_visible(&self) -> bool {
        self.until.is_some_and(|until| Instant::now() < until)
    }

    pub fn clear(&mut self) {
        self.until = None;
    }
}

impl ProofImage {
    /// Wrap uploaded bytes, rejecting anything that is not an image
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first()
            .filter(|m| m.type_() == mime_guess::mime::IMAGE)
            .ok_or_else(|| ValidationError::NotAnImage(file_name.clone()))?;

        Ok(Self {
            file_name,
            mime: mime.essence_str().to_string(),
            bytes,
        })
    }

    /// Read a screenshot from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, InquiryError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "payment_screenshot".to_string());

        // check the extension before reading the whole file
        Self::from_bytes(file_name.clone(), Vec::new())?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(file_name, bytes)?)
    }
}
