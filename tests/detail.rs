mod common;

use apnaroom::config::AppConfig;
use apnaroom::views::{DetailState, DetailView, ShareOutcome};
use assert_matches::assert_matches;
use common::{FakeApi, RecordingPlatform};
use std::sync::Arc;

fn config() -> AppConfig {
    AppConfig {
        site_url: "https://apnaroom.test".into(),
        ..AppConfig::default()
    }
}

async fn loaded(id: i64) -> DetailView {
    let mut detail = DetailView::new(Arc::new(FakeApi::new()), config());
    detail.load(id).await;
    detail
}

#[tokio::test]
async fn starts_loading_then_shows_first_image() {
    let mut detail = DetailView::new(Arc::new(FakeApi::new()), config());
    assert_eq!(detail.state(), &DetailState::Loading);

    assert_matches!(
        detail.load(7).await,
        DetailState::Loaded { active_image: Some(71), .. }
    );
    assert_eq!(
        detail.active_image_url().as_deref(),
        Some("https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_800/room7a.jpg")
    );
    assert_eq!(detail.page_url().as_deref(), Some("https://apnaroom.test/rooms/7"));
}

#[tokio::test]
async fn unknown_room_is_not_found() {
    let detail = loaded(404).await;
    assert_eq!(detail.state(), &DetailState::NotFound);
    assert!(detail.open_visit_request().is_none());
    assert!(detail.rent_breakdown().is_none());
}

#[tokio::test]
async fn reload_on_identifier_change() {
    let mut detail = loaded(7).await;
    detail.load(8).await;
    assert_eq!(detail.room().map(|r| r.id), Some(8));
    assert_eq!(detail.active_image().map(|i| i.id), Some(81));
}

#[tokio::test]
async fn thumbnail_selection() {
    let mut detail = loaded(7).await;
    assert!(detail.select_image(72));
    assert_eq!(detail.active_image().map(|i| i.id), Some(72));

    assert!(!detail.select_image(999));
    assert_eq!(detail.active_image().map(|i| i.id), Some(72));
}

#[tokio::test]
async fn detail_breakdown_is_a_quarter() {
    let detail = loaded(7).await;
    let b = detail.rent_breakdown().unwrap();
    assert_eq!((b.pay_now, b.pay_later, b.percent_now), (2000, 6000, 25));
}

#[tokio::test]
async fn native_share_used_when_available() {
    let detail = loaded(7).await;
    let platform = RecordingPlatform {
        native_share: true,
        ..RecordingPlatform::default()
    };

    assert_eq!(detail.share(&platform).await, ShareOutcome::Shared);
    let shared = platform.shared.lock().unwrap().clone();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].title, "Sunny Room");
    assert!(shared[0].text.contains("Vikas Colony"));
    assert_eq!(shared[0].url, "https://apnaroom.test/rooms/7");
}

#[tokio::test]
async fn share_falls_back_to_clipboard() {
    let detail = loaded(7).await;
    let platform = RecordingPlatform::default();

    assert_eq!(detail.share(&platform).await, ShareOutcome::Copied);
    assert_eq!(
        platform.copied.lock().unwrap().clone(),
        vec!["https://apnaroom.test/rooms/7".to_string()]
    );
    assert_eq!(platform.alerts().len(), 1);
}

#[tokio::test]
async fn share_failure_is_swallowed() {
    let detail = loaded(7).await;
    let platform = RecordingPlatform {
        fail_clipboard: true,
        ..RecordingPlatform::default()
    };
    assert_eq!(detail.share(&platform).await, ShareOutcome::Failed);
    assert!(platform.alerts().is_empty());
}
