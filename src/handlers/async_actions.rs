use tokio::sync::mpsc;

use crate::affiliate;
use crate::app::{launch_page_load, App, AsyncAction};
use crate::errors::WatchError;
use crate::player::Player;
use crate::resolver;
use crate::status::{classify, MatchStatus};

pub async fn handle_async_action(
    app: &mut App,
    action: AsyncAction,
    tx: &mpsc::Sender<AsyncAction>,
    player: &Player,
) {
    match action {
        AsyncAction::ScheduleLoaded(schedule, from_cache) => {
            app.loading = false;
            app.from_cache = from_cache;

            let Some(session) = app.session.as_ref() else {
                return;
            };
            let match_id = session.request.match_id.clone();
            let stream_url = session.request.stream_url.clone();

            let found = resolver::find_match(&schedule, &match_id).cloned();
            app.schedule = Some(schedule);

            match found {
                Some(event) => {
                    let _ = crossterm::execute!(
                        std::io::stdout(),
                        crossterm::terminal::SetTitle(format!("{} - Live Stream", event.match_name))
                    );

                    let now = chrono::Utc::now().timestamp();
                    let start = event.start_seconds();
                    if let Err(e) = &start {
                        tracing::debug!("status badge degraded: {e}");
                    }
                    let status = classify(now, start.as_ref().ok().copied());
                    app.status = Some(status);

                    if status == MatchStatus::Upcoming {
                        if let (Ok(start_secs), Some(session)) = (&start, app.session.as_mut()) {
                            session.start_countdown(*start_secs, tx.clone());
                        }
                    }

                    app.event = Some(event);
                    app.refresh_channels();

                    match player.play(&stream_url) {
                        Ok(()) => {
                            let player = player.clone();
                            let tx_play = tx.clone();
                            tokio::spawn(async move {
                                match player.wait_for_playback(8000).await {
                                    Ok(true) => {
                                        let _ = tx_play
                                            .send(AsyncAction::PlayerStarted(stream_url))
                                            .await;
                                    }
                                    Ok(false) => {
                                        let _ = tx_play
                                            .send(AsyncAction::PlayerFailed(
                                                "player exited before playback".to_string(),
                                            ))
                                            .await;
                                    }
                                    Err(e) => {
                                        let _ = tx_play
                                            .send(AsyncAction::PlayerFailed(e.to_string()))
                                            .await;
                                    }
                                }
                            });
                        }
                        Err(e) => {
                            app.player_error = Some(e.to_string());
                            app.switching_to = None;
                            app.refresh_channels();
                        }
                    }
                }
                None => app.full_page_error(WatchError::NotFound(match_id)),
            }
        }

        AsyncAction::ScheduleFailed(e) => app.full_page_error(e),

        AsyncAction::WidgetLoaded(widget) => {
            app.widget = Some(widget);
            app.widget_hidden = false;
        }

        AsyncAction::WidgetFailed(reason) => {
            // Component-local: the sidebar pane just disappears.
            tracing::debug!("widget hidden: {reason}");
            app.widget = None;
            app.widget_hidden = true;
        }

        AsyncAction::CountryDetected(country) => {
            app.country = Some(country.clone());
            let link = affiliate::pick_offer(&country, &mut rand::thread_rng());
            if let Some(session) = app.session.as_mut() {
                // One write per page load; every ad slot reads it.
                if session.affiliate_link.is_none() {
                    session.affiliate_link = Some(link.to_string());
                }
            }
        }

        AsyncAction::CountdownTick => {
            app.loading_tick = app.loading_tick.wrapping_add(1);
        }

        AsyncAction::CountdownExpired => {
            // Kick-off. The page reloads wholesale from its own link.
            if let Some(session) = app.session.as_ref() {
                let request = session.request.clone();
                launch_page_load(app, request, tx, false);
            }
        }

        AsyncAction::PlayerStarted(_url) => {
            app.player_error = None;
            app.switching_to = None;
            app.refresh_channels();
        }

        AsyncAction::PlayerFailed(reason) => {
            app.player_error = Some(reason);
            app.switching_to = None;
            app.refresh_channels();
        }
    }
}
