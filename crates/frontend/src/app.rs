//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{GroupSelectPage, HiddenPage, SchedulePage};
use crate::telegram;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Schedule,
    #[at("/hidden")]
    Hidden,
    #[at("/select-group")]
    SelectGroup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Schedule => html! { <SchedulePage /> },
        Route::Hidden => html! { <HiddenPage /> },
        Route::SelectGroup => html! { <GroupSelectPage /> },
        Route::NotFound => html! {
            <div class="empty-state">
                <p>{"Сторінку не знайдено."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    // Let the host drop its splash once the first frame is up.
    use_effect_with((), |_| telegram::ready());

    html! {
        <BrowserRouter>
            <div class="app-container">
                <TopNav />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation between the schedule and the hidden-subjects view.
#[function_component(TopNav)]
fn top_nav() -> Html {
    html! {
        <header class="top-nav">
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Schedule}>
                            {"Розклад"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Hidden}>
                            {"Приховані"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
