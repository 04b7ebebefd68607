//! Schedule entry card with swipe-to-dismiss.

use schedule_types::{DismissalAction, DismissalRequest, ScheduleEntry};
use swipe::{DragToken, ReleaseOutcome, SwipeSession, TouchPoint, TrackResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;

/// Properties for ScheduleCard component.
#[derive(Properties, PartialEq)]
pub struct ScheduleCardProps {
    pub entry: ScheduleEntry,
    pub api: ApiClient,
    /// Raised while this card tracks a horizontal swipe, so the page can
    /// hold off its own pull gesture.
    pub drag_token: DragToken,
    /// Invoked once the backend has confirmed the dismissal.
    pub on_dismissed: Callback<ScheduleEntry>,
    /// In the hidden-subjects view a swipe restores the entry instead of
    /// hiding it.
    #[prop_or_default]
    pub hidden_view: bool,
}

fn touch_point(event: &TouchEvent) -> Option<TouchPoint> {
    let touch = event.touches().get(0)?;
    Some(TouchPoint::new(
        touch.client_x() as f64,
        touch.client_y() as f64,
    ))
}

fn notify_failure(action: DismissalAction) {
    let message = match action {
        DismissalAction::Hide => "Не вдалося приховати предмет",
        DismissalAction::Unhide => "Не вдалося відновити предмет",
    };
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Card for one schedule entry. A leftward swipe past the threshold asks
/// the backend to hide (or restore) the subject; anything short of that
/// snaps the card back with no request sent.
#[function_component(ScheduleCard)]
pub fn schedule_card(props: &ScheduleCardProps) -> Html {
    let drag_x = use_state(|| 0.0_f64);
    let dragging = use_state(|| false);
    // One swipe session per touch interaction; `None` is the idle state.
    let session = use_mut_ref(|| None::<SwipeSession>);

    let action = if props.hidden_view {
        DismissalAction::Unhide
    } else {
        DismissalAction::Hide
    };

    let on_touch_start = {
        let session = session.clone();
        let dragging = dragging.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(point) = touch_point(&event) {
                *session.borrow_mut() = Some(SwipeSession::begin(point));
                dragging.set(true);
            }
        })
    };

    let on_touch_move = {
        let session = session.clone();
        let drag_x = drag_x.clone();
        let drag_token = props.drag_token.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(point) = touch_point(&event) else {
                return;
            };
            let mut session = session.borrow_mut();
            let Some(active) = session.as_mut() else {
                return;
            };
            match active.track(point) {
                TrackResponse::Dragged(offset) => {
                    // Keep the page from scrolling under a horizontal swipe.
                    event.prevent_default();
                    drag_token.raise();
                    drag_x.set(offset);
                }
                TrackResponse::Scrolling => drag_x.set(0.0),
                TrackResponse::Pending => {}
            }
        })
    };

    let on_touch_end = {
        let session = session.clone();
        let drag_x = drag_x.clone();
        let dragging = dragging.clone();
        let drag_token = props.drag_token.clone();
        let api = props.api.clone();
        let entry = props.entry.clone();
        let on_dismissed = props.on_dismissed.clone();
        Callback::from(move |_: TouchEvent| {
            // Taking the session out makes a duplicate touch-end a no-op.
            if let Some(mut active) = session.borrow_mut().take() {
                if active.finish() == ReleaseOutcome::Commit {
                    let request = DismissalRequest::for_entry(&entry);
                    let api = api.clone();
                    let entry = entry.clone();
                    let on_dismissed = on_dismissed.clone();
                    spawn_local(async move {
                        match api.dismiss(action, &request).await {
                            Ok(()) => on_dismissed.emit(entry),
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("Failed to update subject: {err}").into(),
                                );
                                notify_failure(action);
                            }
                        }
                    });
                }
            }
            drag_x.set(0.0);
            dragging.set(false);
            drag_token.lower();
        })
    };

    let entry = &props.entry;
    let teacher = entry
        .employee_short
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Викладач невідомий".to_string());
    let time_line = entry.study_time.as_ref().map(|time| {
        match (&entry.study_time_begin, &entry.study_time_end) {
            (Some(begin), Some(end)) => format!("🕑 {time} ({begin} – {end})"),
            _ => format!("🕑 {time}"),
        }
    });

    let style = format!(
        "transform: translateX({:.1}px); transition: {};",
        *drag_x,
        // No easing while the finger is down: the card tracks 1:1.
        if *dragging { "none" } else { "transform 0.3s ease" }
    );

    let reveal = if props.hidden_view {
        html! { <div class="card-reveal restore"><span>{"↪️"}</span></div> }
    } else {
        html! { <div class="card-reveal remove"><span>{"🗑️"}</span></div> }
    };

    html! {
        <div class="card-slot">
            { reveal }
            <div
                class="schedule-card"
                style={style}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                <h2 class="card-title">{ &entry.discipline }</h2>
                <p class="card-subtitle">{ teacher }</p>
                if let Some(line) = time_line {
                    <p class="card-subtitle">{ line }</p>
                }
                if let Some(cabinet) = &entry.cabinet {
                    <p class="card-subtitle">{ format!("📍 {cabinet}") }</p>
                }
                <p class="card-subtitle">{ format!("📘 {}", entry.study_type) }</p>
                if let Some(subgroup) = entry.subgroup {
                    <p class="card-subtitle">{ format!("👥 Підгрупа {subgroup}") }</p>
                }
            </div>
        </div>
    }
}
