use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod lifecycle;
mod navigation;
mod reveal;
mod timer;
mod contact {
    pub mod form;
    pub mod mailto;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod splash;
    pub mod whatsapp_button;
}
mod pages {
    pub mod contact;
    pub mod gallery;
    pub mod hero;
    pub mod home;
    pub mod story;
    pub mod testimonials;
}

use components::splash::Splash;
use lifecycle::{AppPhase, LifecycleAction};
use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    let phase = use_reducer(AppPhase::default);

    {
        let phase = phase.dispatcher();
        use_effect_with_deps(
            move |_| {
                let splash = Timeout::new(config::SPLASH_DURATION_MS, move || {
                    phase.dispatch(LifecycleAction::SplashElapsed);
                });
                // Dropping the handle cancels the pending timeout on unmount
                move || drop(splash)
            },
            (),
        );
    }

    if phase.is_loading() {
        return html! { <Splash /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
