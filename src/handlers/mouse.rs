use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::app::{clamp_float_pos, App, AsyncAction, CurrentScreen};
use crate::handlers::input::{activate_selected_channel, open_offer};
use crate::session::DragState;

fn hit(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, tx: &mpsc::Sender<AsyncAction>) {
    if app.current_screen != CurrentScreen::Watch {
        return;
    }

    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.floating_visible() && hit(app.area_floating, x, y) {
                let close = close_area(app.area_floating);
                let Some(session) = app.session.as_mut() else {
                    return;
                };
                if hit(close, x, y) {
                    session.floating.dismissed = true;
                    session.floating.drag = None;
                } else {
                    // Pointer down arms a drag; it only commits once the
                    // gesture reads as horizontal-first.
                    session.floating.drag = Some(DragState {
                        origin: (x, y),
                        start_pos: session.floating.pos,
                        committed: false,
                    });
                }
                return;
            }

            if hit(app.area_sticky_close, x, y) {
                if let Some(session) = app.session.as_mut() {
                    session.sticky_ad_visible = false;
                }
                return;
            }

            let overlay_up = app
                .session
                .as_ref()
                .map_or(false, |s| s.overlay_ad_visible && s.affiliate_link.is_some());
            if overlay_up && hit(app.area_player, x, y) && !app.player_scrolled_out() {
                open_offer(app);
                return;
            }

            if hit(app.area_infeed_ad, x, y) {
                open_offer(app);
                return;
            }

            if hit(app.area_channels, x, y) {
                let row = (y - app.area_channels.y) as usize + app.channel_list_state.offset();
                if row < app.channels.len() {
                    app.selected_channel_index = row;
                    app.channel_list_state.select(Some(row));
                    activate_selected_channel(app, tx);
                }
            }
        }

        MouseEventKind::Drag(MouseButton::Left) => {
            let frame = app.frame_area;
            let Some(session) = app.session.as_mut() else {
                return;
            };
            let Some(mut drag) = session.floating.drag else {
                return;
            };

            let dx = x as i32 - drag.origin.0 as i32;
            let dy = y as i32 - drag.origin.1 as i32;

            if !drag.committed {
                if dx.abs() < 2 && dy.abs() < 2 {
                    return;
                }
                if dy.abs() > dx.abs() {
                    // Vertical-first gesture: that's a scroll, not a move.
                    session.floating.drag = None;
                    if dy > 0 {
                        app.scroll_down();
                    } else {
                        app.scroll_up();
                    }
                    return;
                }
                drag.committed = true;
            }

            session.floating.pos = clamp_float_pos(
                drag.start_pos.0 as i32 + dx,
                drag.start_pos.1 as i32 + dy,
                frame,
            );
            session.floating.drag = Some(drag);
        }

        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(session) = app.session.as_mut() {
                session.floating.drag = None;
            }
        }

        MouseEventKind::ScrollDown => {
            if hit(app.area_channels, x, y) {
                app.next_channel();
            } else {
                app.scroll_down();
            }
        }

        MouseEventKind::ScrollUp => {
            if hit(app.area_channels, x, y) {
                app.previous_channel();
            } else {
                app.scroll_up();
            }
        }

        _ => {}
    }
}

/// The [x] close control sits in the top border of the floating box, matching
/// where `ui::player_pane` draws it.
fn close_area(area: Rect) -> Rect {
    Rect::new(area.x + area.width.saturating_sub(4), area.y, 3, 1)
}
