//! Weekly schedule page component.

use schedule_types::{group_by_date, remove_by_key, EntryKey, ScheduleEntry};
use swipe::DragToken;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::{Loading, ScheduleCard};

/// Downward pull distance that refetches the schedule.
const PULL_REFRESH_THRESHOLD: f64 = 90.0;

/// Schedule page component.
#[function_component(SchedulePage)]
pub fn schedule_page() -> Html {
    let entries = use_state(Vec::<ScheduleEntry>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<&'static str>);
    let refresh_tick = use_state(|| 0_u32);
    let drag_token = use_state(DragToken::new);
    let pull_start = use_mut_ref(|| None::<f64>);
    let navigator = use_navigator();
    let api = ApiClient::from_host();

    // Authenticate, then fetch the week. An account without a group is
    // sent through the group-selection onboarding instead.
    {
        let entries = entries.clone();
        let loading = loading.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let api = api.clone();

        use_effect_with(*refresh_tick, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api.authorize().await {
                    Ok(auth) if auth.ok => {
                        if auth.group.is_none() {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::SelectGroup);
                            }
                            return;
                        }
                        match api.schedule().await {
                            Ok(fetched) => {
                                entries.set(fetched);
                                error.set(None);
                            }
                            Err(e) => {
                                gloo_timers::callback::Timeout::new(0, move || {
                                    web_sys::console::error_1(
                                        &format!("Failed to fetch schedule: {}", e).into(),
                                    );
                                })
                                .forget();
                                error.set(Some("Не вдалося завантажити розклад."));
                            }
                        }
                    }
                    Ok(_) => {
                        error.set(Some("Не вдалося авторизуватися."));
                    }
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Auth request failed: {}", e).into(),
                            );
                        })
                        .forget();
                        error.set(Some("Не вдалося авторизуватися."));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_dismissed = {
        let entries = entries.clone();
        Callback::from(move |entry: ScheduleEntry| {
            let mut updated = (*entries).clone();
            if remove_by_key(&mut updated, &EntryKey::from(&entry)) {
                entries.set(updated);
            }
        })
    };

    // Pull-to-refresh, armed only at the top of the page and only while no
    // card swipe holds the drag token.
    let on_touch_start = {
        let pull_start = pull_start.clone();
        let drag_token = (*drag_token).clone();
        Callback::from(move |event: TouchEvent| {
            let at_top = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .map(|y| y <= 0.0)
                .unwrap_or(false);
            if at_top && !drag_token.is_raised() {
                if let Some(touch) = event.touches().get(0) {
                    *pull_start.borrow_mut() = Some(touch.client_y() as f64);
                }
            } else {
                *pull_start.borrow_mut() = None;
            }
        })
    };

    let on_touch_end = {
        let pull_start = pull_start.clone();
        let drag_token = (*drag_token).clone();
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(start) = pull_start.borrow_mut().take() else {
                return;
            };
            if drag_token.is_raised() {
                return;
            }
            let Some(touch) = event.changed_touches().get(0) else {
                return;
            };
            if touch.client_y() as f64 - start > PULL_REFRESH_THRESHOLD {
                refresh_tick.set(*refresh_tick + 1);
            }
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    if let Some(message) = *error {
        return html! {
            <div class="empty-state">
                <p>{ message }</p>
            </div>
        };
    }

    if entries.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{"Занять не знайдено."}</p>
            </div>
        };
    }

    let days = group_by_date(&entries);

    html! {
        <div class="schedule" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
            { for days.iter().map(|day| {
                html! {
                    <div class="day-group" key={day.date.clone()}>
                        <h2 class="day-header">{ format!("{}, {}", day.week_day, day.date) }</h2>
                        { for day.entries.iter().map(|entry| {
                            html! {
                                <ScheduleCard
                                    entry={entry.clone()}
                                    api={api.clone()}
                                    drag_token={(*drag_token).clone()}
                                    on_dismissed={on_dismissed.clone()}
                                />
                            }
                        }) }
                    </div>
                }
            }) }
        </div>
    }
}
