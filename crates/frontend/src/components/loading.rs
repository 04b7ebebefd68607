//! Loading splash component.

use yew::prelude::*;

/// Full-screen pulsing logo shown while a view is fetching.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading-overlay">
            <img class="loading-logo" src="logo.svg" alt="Logo" />
        </div>
    }
}
