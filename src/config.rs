//! Runtime configuration, read from the environment.
//!
//! | Variable                  | Default                  |
//! |---------------------------|--------------------------|
//! | `APNAROOM_API_URL`        | `http://127.0.0.1:8000`  |
//! | `APNAROOM_SITE_URL`       | `http://localhost:5173`  |
//! | `APNAROOM_OPERATOR_PHONE` | `919000000000`           |
//! | `APNAROOM_UPI_ID`         | `apnaroom@okicici`       |
//! | `APNAROOM_UPI_NAME`       | `ApnaRoom Business`      |
//! | `APNAROOM_QR_IMAGE`       | `/my-qr-code.jpg`        |
//! | `APNAROOM_DEBOUNCE_MS`    | `500`                    |

use std::time::Duration;
use tracing::warn;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SITE_URL: &str = "http://localhost:5173";
const DEFAULT_OPERATOR_PHONE: &str = "919000000000";
const DEFAULT_UPI_ID: &str = "apnaroom@okicici";
const DEFAULT_UPI_NAME: &str = "ApnaRoom Business";
const DEFAULT_QR_IMAGE: &str = "/my-qr-code.jpg";
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Merchant details shown on the payment step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub upi_id: String,
    pub payee_name: String,
    pub qr_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Public site root; room links are `{site_url}/rooms/{id}`
    pub site_url: String,
    /// WhatsApp recipient, digits only with country code
    pub operator_phone: String,
    pub payment: PaymentConfig,
    pub listing_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            operator_phone: DEFAULT_OPERATOR_PHONE.to_string(),
            payment: PaymentConfig {
                upi_id: DEFAULT_UPI_ID.to_string(),
                payee_name: DEFAULT_UPI_NAME.to_string(),
                qr_image: DEFAULT_QR_IMAGE.to_string(),
            },
            listing_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl AppConfig {
    /// Build from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str, fallback: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        let debounce_ms = match lookup("APNAROOM_DEBOUNCE_MS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!(value = %raw, "APNAROOM_DEBOUNCE_MS is not a number, using default");
                DEFAULT_DEBOUNCE_MS
            }),
            None => DEFAULT_DEBOUNCE_MS,
        };

        Self {
            api_base_url: get("APNAROOM_API_URL", defaults.api_base_url)
                .trim_end_matches('/')
                .to_string(),
            site_url: get("APNAROOM_SITE_URL", defaults.site_url)
                .trim_end_matches('/')
                .to_string(),
            operator_phone: get("APNAROOM_OPERATOR_PHONE", defaults.operator_phone),
            payment: PaymentConfig {
                upi_id: get("APNAROOM_UPI_ID", defaults.payment.upi_id),
                payee_name: get("APNAROOM_UPI_NAME", defaults.payment.payee_name),
                qr_image: get("APNAROOM_QR_IMAGE", defaults.payment.qr_image),
            },
            listing_debounce: Duration::from_millis(debounce_ms),
        }
    }
}
