use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod inquiry;
mod pages {
    pub mod landing;
    pub mod styles;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod faq;
    pub mod footer;
    pub mod nav;
}

use components::nav::Nav;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {err}"));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
