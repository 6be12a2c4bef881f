use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod countdown;
mod hooks;
mod media;
mod ticker;
mod components {
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod faq;
    pub mod hero;
    pub mod landing;
    pub mod not_found;
}

use components::nav::Nav;
use config::SiteConfig;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, config: &SiteConfig) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing config={config.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let config = props.config.clone();
        Callback::from(move |route: Route| switch(route, &config))
    };

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid site configuration, not starting: {}", e);
            return;
        }
    };

    info!("Starting application, applications close at {}", config.deadline);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
