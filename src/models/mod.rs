use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of accommodation a room is listed as
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomType {
    /// `1_RK`
    SingleRoom,
    /// `2_RK`
    DoubleRoom,
    /// `1_BHK`
    OneBedroom,
    /// `2_BHK`
    TwoBedroom,
    /// Any code the backend adds later; kept verbatim
    Other(String),
}

impl RoomType {
    /// Wire code used by the rooms endpoint
    pub fn code(&self) -> &str {
        match self {
            RoomType::SingleRoom => "1_RK",
            RoomType::DoubleRoom => "2_RK",
            RoomType::OneBedroom => "1_BHK",
            RoomType::TwoBedroom => "2_BHK",
            RoomType::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "1_RK" => RoomType::SingleRoom,
            "2_RK" => RoomType::DoubleRoom,
            "1_BHK" => RoomType::OneBedroom,
            "2_BHK" => RoomType::TwoBedroom,
            other => RoomType::Other(other.to_string()),
        }
    }

    /// Human readable label shown on filter chips and cards
    pub fn label(&self) -> String {
        match self {
            RoomType::SingleRoom => "1 Room Set".to_string(),
            RoomType::DoubleRoom => "2 Room Set".to_string(),
            RoomType::OneBedroom => "1 BHK".to_string(),
            RoomType::TwoBedroom => "2 BHK".to_string(),
            RoomType::Other(code) => code.replacen('_', " ", 1),
        }
    }
}

impl Serialize for RoomType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for RoomType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(RoomType::from_code(&code))
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Who a room may be rented to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TenantType {
    #[serde(rename = "BOYS")]
    Boys,
    #[serde(rename = "GIRLS")]
    Girls,
    #[serde(rename = "FAMILY")]
    Family,
    #[default]
    #[serde(rename = "ANY")]
    Any,
}

impl TenantType {
    pub fn code(&self) -> &'static str {
        match self {
            TenantType::Boys => "BOYS",
            TenantType::Girls => "GIRLS",
            TenantType::Family => "FAMILY",
            TenantType::Any => "ANY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "BOYS" => Some(TenantType::Boys),
            "GIRLS" => Some(TenantType::Girls),
            "FAMILY" => Some(TenantType::Family),
            "ANY" => Some(TenantType::Any),
            _ => None,
        }
    }

    /// Badge text for cards and the detail header
    pub fn badge(&self) -> &'static str {
        match self {
            TenantType::Boys => "Boys Only",
            TenantType::Girls => "Girls Only",
            TenantType::Family => "Family",
            TenantType::Any => "Anyone",
        }
    }
}

/// Neighbourhood used to populate the location filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Colony {
    pub id: i64,
    pub name: String,
}

/// One photo of a room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomImage {
    pub id: i64,
    #[serde(rename = "image")]
    pub url: String,
}

/// Room listing as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Monthly rent in whole rupees
    pub price: i64,
    #[serde(default)]
    pub address: String,
    pub colony_name: String,
    pub room_type: RoomType,
    #[serde(default)]
    pub tenant_type: TenantType,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub images: Vec<RoomImage>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

fn default_available() -> bool {
    true
}

impl Room {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "No description provided.",
        }
    }
}

/// Body of `POST /api/inquire/tenant/`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TenantInquiry {
    pub name: String,
    pub phone_number: String,
    pub room: i64,
    #[serde(skip)]
    pub payment_screenshot: Option<ProofImage>,
}

/// Body of `POST /api/inquire/landlord/`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LandlordInquiry {
    pub name: String,
    pub phone_number: String,
    pub address: String,
}

/// Screenshot evidencing an out-of-band payment
#[derive(Clone, PartialEq, Eq)]
pub struct ProofImage {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ProofImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProofImage")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Local record of an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub room: Option<i64>,
    pub name: String,
    pub submitted_at: DateTime<Utc>,
    /// WhatsApp link opened after submission, if any
    pub handoff_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn room_deserializes_backend_payload() {
        let room: Room = serde_json::from_value(json!({
            "id": 7,
            "title": "Sunny Room",
            "price": 8000,
            "description": null,
            "address": "12 Civil Lines",
            "colony_name": "Vikas Colony",
            "images": [{"id": 1, "image": "https://res.cloudinary.com/x/image/upload/a.jpg"}],
            "video": null,
            "room_type": "1_BHK",
            "is_available": true,
            "tenant_type": "GIRLS",
            "place_name": null,
            "distance_km": 1.5
        }))
        .unwrap();

        assert_eq!(room.room_type, RoomType::OneBedroom);
        assert_eq!(room.tenant_type, TenantType::Girls);
        assert_eq!(room.images[0].id, 1);
        assert_eq!(room.description_or_default(), "No description provided.");
    }

    #[test]
    fn unknown_room_type_is_kept() {
        let kind: RoomType = serde_json::from_value(json!("3_BHK")).unwrap();
        assert_eq!(kind, RoomType::Other("3_BHK".to_string()));
        assert_eq!(kind.label(), "3 BHK");
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("3_BHK"));
    }

    #[test]
    fn tenant_inquiry_json_omits_screenshot() {
        let inquiry = TenantInquiry {
            name: "Amit".into(),
            phone_number: "9876543210".into(),
            room: 7,
            payment_screenshot: None,
        };
        assert_eq!(
            serde_json::to_value(&inquiry).unwrap(),
            json!({"name": "Amit", "phone_number": "9876543210", "room": 7})
        );
    }
}
