use crate::api::traits::RoomApi;
use crate::api::types::FilterState;
use crate::error::ApiError;
use crate::models::{Colony, LandlordInquiry, ProofImage, Room, TenantInquiry};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// One field of a multipart upload
#[derive(Debug, Clone)]
pub enum FormField {
    Text(&'static str, String),
    File(&'static str, ProofImage),
}

/// Body of a POST, either JSON or `multipart/form-data`
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Multipart(Vec<FormField>),
}

/// Thin HTTP wrapper around the listing backend.
/// No retries, no caching and no request timeout: errors reach the caller as-is.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("apnaroom/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET {path}?{params}` and return the decoded JSON body
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;
        Self::parse_json(response).await
    }

    /// `POST {path}` with a JSON or multipart body
    pub async fn post(&self, path: &str, body: RequestBody) -> Result<Value, ApiError> {
        let url = self.url(path);
        let request = self.client.post(&url);

        let request = match body {
            RequestBody::Json(json) => {
                debug!("POST {} (json)", url);
                request.json(&json)
            }
            RequestBody::Multipart(fields) => {
                debug!("POST {} (multipart, {} fields)", url, fields.len());
                request.multipart(build_form(fields)?)
            }
        };

        let response = request.send().await?;
        Self::parse_json(response).await
    }

    async fn get_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let value = self.get(path, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn parse_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!("Backend returned status: {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn build_form(fields: Vec<FormField>) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            FormField::Text(name, value) => form.text(name, value),
            FormField::File(name, proof) => {
                let part = Part::bytes(proof.bytes)
                    .file_name(proof.file_name)
                    .mime_str(&proof.mime)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Request body for a tenant inquiry: JSON, or multipart once a screenshot is attached
pub fn tenant_inquiry_body(inquiry: &TenantInquiry) -> Result<RequestBody, ApiError> {
    match &inquiry.payment_screenshot {
        None => Ok(RequestBody::Json(serde_json::to_value(inquiry)?)),
        Some(proof) => Ok(RequestBody::Multipart(vec![
            FormField::Text("name", inquiry.name.clone()),
            FormField::Text("phone_number", inquiry.phone_number.clone()),
            FormField::Text("room", inquiry.room.to_string()),
            FormField::File("payment_screenshot", proof.clone()),
        ])),
    }
}

#[async_trait]
impl RoomApi for ApiClient {
    async fn list_colonies(&self) -> Result<Vec<Colony>, ApiError> {
        self.get_typed("/api/colonies/", &[]).await
    }

    async fn list_rooms(&self, filters: &FilterState) -> Result<Vec<Room>, ApiError> {
        self.get_typed("/api/rooms/", &filters.to_query()).await
    }

    async fn get_room(&self, id: i64) -> Result<Option<Room>, ApiError> {
        match self.get_typed(&format!("/api/rooms/{}/", id), &[]).await {
            Ok(room) => Ok(Some(room)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn submit_tenant_inquiry(&self, inquiry: &TenantInquiry) -> Result<(), ApiError> {
        self.post("/api/inquire/tenant/", tenant_inquiry_body(inquiry)?)
            .await
            .map(|_| ())
    }

    async fn submit_landlord_inquiry(&self, inquiry: &LandlordInquiry) -> Result<(), ApiError> {
        let body = RequestBody::Json(serde_json::to_value(inquiry)?);
        self.post("/api/inquire/landlord/", body).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn joins_paths_without_double_slashes() {
        let api = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/api/rooms/"), "http://localhost:8000/api/rooms/");
        assert_eq!(api.url("api/colonies/"), "http://localhost:8000/api/colonies/");
    }

    #[test]
    fn plain_inquiry_is_json() {
        let inquiry = TenantInquiry {
            name: "Amit".into(),
            phone_number: "9876543210".into(),
            room: 7,
            payment_screenshot: None,
        };
        assert_matches!(
            tenant_inquiry_body(&inquiry).unwrap(),
            RequestBody::Json(v) if v["room"] == 7
        );
    }

    #[test]
    fn inquiry_with_proof_is_multipart() {
        let inquiry = TenantInquiry {
            name: "BOOKING: Amit".into(),
            phone_number: "9876543210".into(),
            room: 7,
            payment_screenshot: Some(ProofImage {
                file_name: "paid.png".into(),
                mime: "image/png".into(),
                bytes: vec![0x89, 0x50],
            }),
        };

        let fields = match tenant_inquiry_body(&inquiry).unwrap() {
            RequestBody::Multipart(fields) => fields,
            other => panic!("expected multipart, got {:?}", other),
        };
        assert_eq!(fields.len(), 4);
        assert_matches!(&fields[2], FormField::Text("room", v) if v == "7");
        assert_matches!(&fields[3], FormField::File("payment_screenshot", p) if p.file_name == "paid.png");
        assert!(build_form(fields).is_ok());
    }
}
