use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

/// Payload for a native share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Capabilities of the host the front end runs in
#[async_trait]
pub trait Platform: Send + Sync {
    /// Whether a native share sheet exists
    fn can_share(&self) -> bool;

    async fn share(&self, data: &ShareData) -> Result<()>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    /// Hand a URL (WhatsApp, UPI app) to the operating system
    async fn open_url(&self, url: &str) -> Result<()>;

    /// Blocking notice shown to the user
    fn alert(&self, message: &str);
}

/// Terminal host: no share sheet or clipboard, so links and copied text are printed
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPlatform;

#[async_trait]
impl Platform for TerminalPlatform {
    fn can_share(&self) -> bool {
        false
    }

    async fn share(&self, data: &ShareData) -> Result<()> {
        anyhow::bail!("native share is not available in a terminal ({})", data.url)
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        println!("📋 {}", text);
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        info!("Opening external link");
        println!("🔗 {}", url);
        Ok(())
    }

    fn alert(&self, message: &str) {
        println!("⚠️  {}", message);
    }
}
