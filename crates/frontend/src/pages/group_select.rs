//! Group selection onboarding page component.

use schedule_types::GroupInfo;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::Loading;

/// Group selection page component. Shown until the account is bound to a
/// study group.
#[function_component(GroupSelectPage)]
pub fn group_select_page() -> Html {
    let groups = use_state(Vec::<GroupInfo>::new);
    let loading = use_state(|| true);
    let search = use_state(String::new);
    let submitting = use_state(|| false);
    let navigator = use_navigator();
    let api = ApiClient::from_host();

    {
        let groups = groups.clone();
        let loading = loading.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.groups().await {
                    Ok(fetched) => groups.set(fetched),
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to fetch groups: {}", e).into(),
                            );
                        })
                        .forget();
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_pick = {
        let submitting = submitting.clone();
        let navigator = navigator.clone();
        let api = api.clone();
        Callback::from(move |site_id: String| {
            if *submitting {
                return;
            }
            submitting.set(true);
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.set_group(&site_id).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Schedule);
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to set group: {}", e).into(),
                        );
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message("Не вдалося обрати групу");
                        }
                        submitting.set(false);
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    // Filter groups by search
    let filtered: Vec<&GroupInfo> = groups
        .iter()
        .filter(|group| {
            if search.is_empty() {
                true
            } else {
                group
                    .name
                    .to_lowercase()
                    .contains(&search.to_lowercase())
            }
        })
        .collect();

    html! {
        <div class="group-select">
            <h1>{"Оберіть групу"}</h1>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Пошук групи..."
                    oninput={on_search_input}
                />
            </div>

            if filtered.is_empty() {
                <div class="empty-state">
                    <p>{"Груп не знайдено."}</p>
                </div>
            } else {
                <div class="group-list">
                    { for filtered.iter().map(|group| {
                        let site_id = group.site_id.clone();
                        let on_click = {
                            let on_pick = on_pick.clone();
                            Callback::from(move |_| on_pick.emit(site_id.clone()))
                        };
                        html! {
                            <button
                                class="group-button"
                                key={group.site_id.clone()}
                                disabled={*submitting}
                                onclick={on_click}
                            >
                                <span class="group-name">{ &group.name }</span>
                                <span class="group-meta">
                                    { format!("{} · {} семестр", group.faculty, group.semester) }
                                </span>
                            </button>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
