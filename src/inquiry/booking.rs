use crate::api::RoomApi;
use crate::config::{AppConfig, PaymentConfig};
use crate::error::{InquiryError, ValidationError};
use crate::inquiry::pricing::{deposit_breakdown, RentBreakdown, VISIT_FEE};
use crate::inquiry::{ContactForm, CopyAck, PaymentTab, Step, SubmitStatus};
use crate::links::{room_url, upi_link, visit_booking_message, whatsapp_link};
use crate::models::{ProofImage, Room, SubmissionReceipt, TenantInquiry};
use crate::platform::Platform;
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// What the tenant is paying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingPlan {
    /// Half the first month's rent reserves the room
    Deposit,
    /// Flat fee to unlock a visit
    VisitFee,
}

impl BookingPlan {
    /// Amount to pay through UPI for a room renting at `rent`
    pub fn amount_due(&self, rent: i64) -> i64 {
        match self {
            BookingPlan::Deposit => deposit_breakdown(rent).pay_now,
            BookingPlan::VisitFee => VISIT_FEE,
        }
    }

    /// Prefix folded into the submitted name so the backend can tell leads apart
    pub fn name_prefix(&self) -> &'static str {
        match self {
            BookingPlan::Deposit => "BOOKING: ",
            BookingPlan::VisitFee => "VISIT BOOKING: ",
        }
    }

    pub fn close_delay(&self) -> Duration {
        match self {
            BookingPlan::Deposit => Duration::from_secs(5),
            BookingPlan::VisitFee => Duration::from_secs(4),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingPlan::Deposit => "Book this Room",
            BookingPlan::VisitFee => "Book a Visit",
        }
    }
}

/// Paid booking form: payment instructions, then proof upload.
#[derive(Debug, Clone)]
pub struct BookingModal {
    room: Room,
    plan: BookingPlan,
    payment: PaymentConfig,
    site_url: String,
    operator_phone: String,
    is_open: bool,
    step: Step,
    tab: PaymentTab,
    pub form: ContactForm,
    proof: Option<ProofImage>,
    status: SubmitStatus,
    copied: CopyAck,
    last_error: Option<String>,
}

impl BookingModal {
    pub fn new(room: Room, plan: BookingPlan, config: &AppConfig) -> Self {
        Self {
            room,
            plan,
            payment: config.payment.clone(),
            site_url: config.site_url.clone(),
            operator_phone: config.operator_phone.clone(),
            is_open: false,
            step: Step::default(),
            tab: PaymentTab::default(),
            form: ContactForm::default(),
            proof: None,
            status: SubmitStatus::Idle,
            copied: CopyAck::default(),
            last_error: None,
        }
    }

    pub fn deposit(room: Room, config: &AppConfig) -> Self {
        Self::new(room, BookingPlan::Deposit, config)
    }

    pub fn visit_fee(room: Room, config: &AppConfig) -> Self {
        Self::new(room, BookingPlan::VisitFee, config)
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn plan(&self) -> BookingPlan {
        self.plan
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn tab(&self) -> PaymentTab {
        self.tab
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn proof(&self) -> Option<&ProofImage> {
        self.proof.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close and discard step, fields, upload and status
    pub fn close(&mut self) {
        self.is_open = false;
        self.step = Step::default();
        self.tab = PaymentTab::default();
        self.form = ContactForm::default();
        self.proof = None;
        self.status = SubmitStatus::Idle;
        self.copied.clear();
        self.last_error = None;
    }

    /// Rent split shown on the deposit flow; the visit fee has none
    pub fn breakdown(&self) -> Option<RentBreakdown> {
        match self.plan {
            BookingPlan::Deposit => Some(deposit_breakdown(self.room.price)),
            BookingPlan::VisitFee => None,
        }
    }

    pub fn amount_due(&self) -> i64 {
        self.plan.amount_due(self.room.price)
    }

    pub fn qr_image(&self) -> &str {
        &self.payment.qr_image
    }

    pub fn upi_id(&self) -> &str {
        &self.payment.upi_id
    }

    /// Deep link into a UPI app with the amount filled in
    pub fn upi_link(&self) -> String {
        upi_link(&self.payment, self.amount_due())
    }

    pub fn select_tab(&mut self, tab: PaymentTab) {
        self.tab = tab;
    }

    /// "I have made the payment"
    pub fn confirm_payment(&mut self) {
        self.step = Step::ProofUpload;
    }

    /// Back to the instructions; entered fields and upload are kept
    pub fn back(&mut self) {
        self.step = Step::PaymentInstructions;
    }

    pub fn attach_proof(&mut self, proof: ProofImage) {
        debug!("Attached proof {:?}", proof);
        self.proof = Some(proof);
    }

    pub fn clear_proof(&mut self) {
        self.proof = None;
    }

    /// Copy the UPI id; the acknowledgement shows whether or not the copy worked
    pub async fn copy_upi_id(&mut self, platform: &dyn Platform) {
        if let Err(e) = platform.copy_to_clipboard(&self.payment.upi_id).await {
            debug!("Clipboard copy failed: {:#}", e);
        }
        self.copied.mark();
    }

    pub fn copied_visible(&self) -> bool {
        self.copied.is_visible()
    }

    pub fn auto_close_delay(&self) -> Duration {
        self.plan.close_delay()
    }

    /// Upload contact details and the screenshot as one multipart request.
    /// Only accepted on the proof step. Blocks (and alerts) before any request
    /// when the screenshot is missing.
    pub async fn submit(
        &mut self,
        api: &dyn RoomApi,
        platform: &dyn Platform,
    ) -> Result<SubmissionReceipt, InquiryError> {
        if !self.is_open {
            return Err(InquiryError::NotOpen);
        }
        if self.step != Step::ProofUpload {
            return Err(InquiryError::WrongStep);
        }
        if !self.status.accepts_submit() {
            return Err(InquiryError::InFlight);
        }
        self.form.validate()?;

        let proof = match &self.proof {
            Some(proof) => proof.clone(),
            None => {
                let err = ValidationError::MissingProof;
                platform.alert(&err.to_string());
                return Err(err.into());
            }
        };

        let name = format!("{}{}", self.plan.name_prefix(), self.form.name.trim());
        let inquiry = TenantInquiry {
            name: name.clone(),
            phone_number: self.form.phone_number.trim().to_string(),
            room: self.room.id,
            payment_screenshot: Some(proof),
        };

        self.status = SubmitStatus::Submitting;
        self.last_error = None;

        if let Err(e) = api.submit_tenant_inquiry(&inquiry).await {
            error!("Error submitting {:?} for room {}: {}", self.plan, self.room.id, e);
            self.status = SubmitStatus::Error;
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }

        let handoff = match self.plan {
            BookingPlan::Deposit => None,
            BookingPlan::VisitFee => {
                let link = room_url(&self.site_url, self.room.id);
                let message = visit_booking_message(
                    &self.form.name,
                    &self.form.phone_number,
                    &self.room,
                    &link,
                    VISIT_FEE,
                );
                let url = whatsapp_link(&self.operator_phone, &message);
                if let Err(e) = platform.open_url(&url).await {
                    warn!("Could not open WhatsApp link: {:#}", e);
                }
                Some(url)
            }
        };

        info!("{:?} proof uploaded for room {}", self.plan, self.room.id);
        self.status = SubmitStatus::Success;

        Ok(SubmissionReceipt {
            room: Some(self.room.id),
            name,
            submitted_at: Utc::now(),
            handoff_url: handoff,
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
