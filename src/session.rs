//! Per-page-load context. Everything the old page kept in module globals
//! (the chosen offer, the countdown handle, the floating-player flags) lives
//! here and dies with the session; `teardown` is the explicit exit step.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AsyncAction;
use crate::params::WatchRequest;

/// Pointer-drag bookkeeping for the floating player box.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Where the pointer went down.
    pub origin: (u16, u16),
    /// Where the box was at that moment.
    pub start_pos: (u16, u16),
    /// A move is only applied once the gesture reads as horizontal-first.
    pub committed: bool,
}

#[derive(Debug, Clone)]
pub struct FloatingPlayer {
    /// Set by the user's close control; floating stays off until the next
    /// page load.
    pub dismissed: bool,
    pub pos: (u16, u16),
    pub drag: Option<DragState>,
}

impl Default for FloatingPlayer {
    fn default() -> Self {
        Self {
            dismissed: false,
            pos: (2, 1),
            drag: None,
        }
    }
}

struct Countdown {
    deadline_secs: i64,
    task: JoinHandle<()>,
}

pub struct WatchSession {
    pub request: WatchRequest,
    /// Written once after geo detection settles; read by every ad slot.
    pub affiliate_link: Option<String>,
    pub floating: FloatingPlayer,
    pub sticky_ad_visible: bool,
    pub overlay_ad_visible: bool,
    countdown: Option<Countdown>,
}

impl WatchSession {
    pub fn new(request: WatchRequest) -> Self {
        Self {
            request,
            affiliate_link: None,
            floating: FloatingPlayer::default(),
            sticky_ad_visible: true,
            overlay_ad_visible: true,
            countdown: None,
        }
    }

    /// Start (or restart) the one-second countdown toward `deadline_secs`.
    /// Any previously running timer is cancelled first.
    pub fn start_countdown(&mut self, deadline_secs: i64, tx: mpsc::Sender<AsyncAction>) {
        self.stop_countdown();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            loop {
                ticker.tick().await;
                let now = chrono::Utc::now().timestamp();
                if deadline_secs - now <= 0 {
                    let _ = tx.send(AsyncAction::CountdownExpired).await;
                    break;
                }
                if tx.send(AsyncAction::CountdownTick).await.is_err() {
                    break;
                }
            }
        });

        self.countdown = Some(Countdown {
            deadline_secs,
            task,
        });
    }

    pub fn stop_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.task.abort();
        }
    }

    pub fn countdown_deadline(&self) -> Option<i64> {
        self.countdown.as_ref().map(|c| c.deadline_secs)
    }

    /// Seconds left, clamped at zero.
    pub fn countdown_remaining(&self, now_secs: i64) -> Option<i64> {
        self.countdown_deadline().map(|d| (d - now_secs).max(0))
    }

    /// Exit step: cancel the timer, drop any in-flight drag.
    pub fn teardown(&mut self) {
        self.stop_countdown();
        self.floating.drag = None;
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
