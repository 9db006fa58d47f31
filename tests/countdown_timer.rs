//! The countdown is a real timer task; these run against the tokio clock.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use matchday_lib::app::AsyncAction;
use matchday_lib::params::WatchRequest;
use matchday_lib::session::WatchSession;

fn request() -> WatchRequest {
    WatchRequest::parse(
        "https://x.tv/watch.html?id=abc&stream=https://s/a",
        "https://x.tv/watch.html",
    )
    .unwrap()
}

#[tokio::test]
async fn an_expired_deadline_fires_the_reload_signal() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut session = WatchSession::new(request());
    session.start_countdown(chrono::Utc::now().timestamp() - 1, tx);

    let action = timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("timer never fired")
        .expect("channel closed");
    assert!(matches!(action, AsyncAction::CountdownExpired));
    session.teardown();
}

#[tokio::test]
async fn a_future_deadline_ticks_and_restarts_cleanly() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut session = WatchSession::new(request());

    let deadline = chrono::Utc::now().timestamp() + 60;
    session.start_countdown(deadline, tx.clone());
    assert_eq!(session.countdown_deadline(), Some(deadline));

    let action = timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("no tick arrived")
        .expect("channel closed");
    assert!(matches!(action, AsyncAction::CountdownTick));

    // Restarting replaces the timer instead of stacking a second one.
    session.start_countdown(deadline + 30, tx.clone());
    assert_eq!(session.countdown_deadline(), Some(deadline + 30));
    session.teardown();
}

#[tokio::test]
async fn teardown_cancels_the_timer() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut session = WatchSession::new(request());
    session.start_countdown(chrono::Utc::now().timestamp() + 60, tx.clone());

    let _ = timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("no tick arrived");

    session.teardown();
    assert_eq!(session.countdown_deadline(), None);

    // Drain anything already in flight, then confirm silence.
    tokio::time::sleep(Duration::from_millis(300)).await;
    while rx.try_recv().is_ok() {}
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(rx.try_recv().is_err());
}
