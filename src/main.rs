use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod state {
    pub mod carousel;
    pub mod favorites;
    pub mod section;
    pub mod viewport;
}
mod auth {
    pub mod api;
    pub mod session;
    pub mod validate;
}
mod components {
    pub mod carousel;
    pub mod faq;
    pub mod login_modal;
    pub mod map_view;
}
mod pages {
    pub mod dashboard;
    pub mod guide;
}

use pages::{dashboard::Dashboard, guide::Guide};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering guide page");
            html! { <Guide /> }
        }
        Route::Dashboard => {
            info!("Rendering dashboard page");
            html! { <Dashboard /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Panic messages end up in the browser console instead of vanishing
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
