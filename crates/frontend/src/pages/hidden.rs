//! Hidden subjects page component.

use schedule_types::{remove_by_id, HiddenSubject, ScheduleEntry};
use swipe::DragToken;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{Loading, ScheduleCard};

/// Hidden subjects page component. A leftward swipe restores an entry to
/// the schedule.
#[function_component(HiddenPage)]
pub fn hidden_page() -> Html {
    let subjects = use_state(Vec::<HiddenSubject>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<&'static str>);
    let drag_token = use_state(DragToken::new);
    let api = ApiClient::from_host();

    {
        let subjects = subjects.clone();
        let loading = loading.clone();
        let error = error.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.hidden_subjects().await {
                    Ok(fetched) => {
                        subjects.set(fetched);
                        error.set(None);
                    }
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to fetch hidden subjects: {}", e).into(),
                            );
                        })
                        .forget();
                        error.set(Some("Не вдалося завантажити приховані предмети."));
                    }
                }
                loading.set(false);
            });
        });
    }

    // Hidden rows carry a backend id, so removal matches on it rather than
    // on the composite fields.
    let on_dismissed = {
        let subjects = subjects.clone();
        Callback::from(move |entry: ScheduleEntry| {
            let Some(id) = entry.id else {
                return;
            };
            let mut updated = (*subjects).clone();
            if remove_by_id(&mut updated, id) {
                subjects.set(updated);
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

    if subjects.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{"Немає прихованих предметів."}</p>
            </div>
        };
    }

    html! {
        <div class="hidden-list">
            <h2 class="day-header">{"Приховані предмети"}</h2>
            { for subjects.iter().map(|subject| {
                html! {
                    <ScheduleCard
                        entry={ScheduleEntry::from(subject.clone())}
                        api={api.clone()}
                        drag_token={(*drag_token).clone()}
                        on_dismissed={on_dismissed.clone()}
                        hidden_view={true}
                    />
                }
            }) }
        </div>
    }
}
