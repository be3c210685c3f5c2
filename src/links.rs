//! Deep links and display formatting shared by the views and forms.

use crate::config::PaymentConfig;
use crate::models::Room;
use url::{form_urlencoded, Url};

const CDN_MARKER: &str = "cloudinary.com";
const CDN_UPLOAD_SEGMENT: &str = "/upload/";

/// Card and gallery widths requested from the image CDN
pub const CARD_IMAGE_WIDTH: u32 = 600;
pub const GALLERY_IMAGE_WIDTH: u32 = 800;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// Public detail page of a room
pub fn room_url(site_url: &str, room_id: i64) -> String {
    format!("{}/rooms/{}", site_url.trim_end_matches('/'), room_id)
}

/// `https://wa.me/{phone}?text=...` with the message form-encoded
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let base = format!("https://wa.me/{}", digits);
    match Url::parse_with_params(&base, &[("text", message)]) {
        Ok(url) => url.to_string(),
        Err(_) => base,
    }
}

/// `upi://pay` link pre-filled with the merchant and the amount in rupees.
/// Spaces are sent as `%20`; UPI apps do not all read `+` as a space.
pub fn upi_link(payment: &PaymentConfig, amount: i64) -> String {
    let amount = amount.to_string();
    let query = [
        ("pa", payment.upi_id.as_str()),
        ("pn", payment.payee_name.as_str()),
        ("am", amount.as_str()),
        ("cu", "INR"),
    ]
    .iter()
    .map(|(key, value)| format!("{}={}", key, encode_component(value)))
    .collect::<Vec<_>>()
    .join("&");

    format!("upi://pay?{}", query)
}

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Inject `f_auto,q_auto,w_{width}` into CDN-hosted image URLs; other URLs pass through
pub fn optimized_image_url(url: &str, width: u32) -> String {
    if !url.contains(CDN_MARKER) {
        return url.to_string();
    }
    match url.split_once(CDN_UPLOAD_SEGMENT) {
        Some((head, tail)) => format!(
            "{}{}f_auto,q_auto,w_{}/{}",
            head, CDN_UPLOAD_SEGMENT, width, tail
        ),
        None => url.to_string(),
    }
}

/// Rupees in the en-IN style: `₹8,000`, `₹1,25,000`
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{}₹{}", sign, digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{}₹{},{}", sign, groups.join(","), last_three)
}

/// Message the tenant sends the operator after a visit request
pub fn visit_request_message(name: &str, phone: &str, room: &Room, link: &str) -> String {
    format!(
        "Hi, I want to visit this room.\n\nName: {}\nPhone: {}\nRoom: {}\nColony: {}\nLink: {}",
        name.trim(),
        phone.trim(),
        room.title,
        room.colony_name,
        link
    )
}

/// Lead summary sent to the operator after a paid visit booking
pub fn visit_booking_message(
    name: &str,
    phone: &str,
    room: &Room,
    link: &str,
    fee: i64,
) -> String {
    format!(
        "New visit booking ({} paid, screenshot uploaded)\n\nName: {}\nPhone: {}\nRoom: {} (ID: {})\nColony: {}\nLink: {}",
        format_inr(fee),
        name.trim(),
        phone.trim(),
        room.title,
        room.id,
        room.colony_name,
        link
    )
}

/// Body of the native share sheet
pub fn share_text(room: &Room) -> String {
    format!("Check out this room in {} on ApnaRoom!", room.colony_name)
}
