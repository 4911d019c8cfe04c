use super::*;

fn piece(raw: u8) -> PieceId {
    PieceId::new(raw).unwrap()
}

// =============================================================================
// CHIME
// =============================================================================

#[tokio::test]
async fn chime_records_sounds_in_order() {
    let mut chime = Chime::new().unwrap();
    chime.on_placed(piece(3), 1).unwrap();
    chime.on_placed(piece(5), 2).unwrap();
    chime.on_completed().unwrap();
    assert_eq!(chime.played(), &[Sound::Splat, Sound::Splat, Sound::Claps]);
}

#[tokio::test]
async fn chime_unlocks_once_on_first_touch() {
    let mut chime = Chime::new().unwrap();
    chime.on_interaction_start(InputSource::Pointer).unwrap();
    assert!(chime.played().is_empty());

    chime.on_interaction_start(InputSource::Touch).unwrap();
    chime.on_interaction_start(InputSource::Touch).unwrap();
    assert_eq!(chime.played(), &[Sound::Unlock]);
}

#[test]
fn chime_needs_a_runtime() {
    let err = Chime::new().err().unwrap();
    assert!(matches!(err, FeedbackError::Unavailable(_)));
}

// =============================================================================
// WIN BANNER
// =============================================================================

#[tokio::test]
async fn banner_shows_after_delay() {
    let mut banner = WinBanner::new(Duration::from_millis(20)).unwrap();
    banner.on_completed().unwrap();
    assert!(!banner.is_shown());

    banner.wait().await;
    assert!(banner.is_shown());
}

#[tokio::test]
async fn reset_cancels_pending_banner() {
    let mut banner = WinBanner::new(Duration::from_millis(20)).unwrap();
    banner.on_completed().unwrap();
    banner.on_reset().unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!banner.is_shown());
    banner.wait().await;
    assert!(!banner.is_shown());
}

#[tokio::test]
async fn reset_hides_shown_banner() {
    let mut banner = WinBanner::new(Duration::from_millis(1)).unwrap();
    banner.on_completed().unwrap();
    banner.wait().await;
    assert!(banner.is_shown());

    banner.on_reset().unwrap();
    assert!(!banner.is_shown());
}

#[tokio::test]
async fn wait_without_pending_returns() {
    let mut banner = WinBanner::new(Duration::from_secs(60)).unwrap();
    banner.wait().await;
    assert!(!banner.is_shown());
}
