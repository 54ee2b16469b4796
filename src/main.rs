use yew::prelude::*;
use log::{info, Level};
use web_sys::window;

mod config;
mod dom;
mod error;
mod storage;
mod submit;
mod state {
    pub mod counter;
    pub mod faq;
    pub mod form;
    pub mod lightbox;
    pub mod nav;
    pub mod reveal;
}
mod components {
    pub mod booking;
    pub mod counter;
    pub mod faq;
    pub mod gallery;
    pub mod hero;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use dom::{BrowserPage, Listener, Page};
use pages::landing::Landing;

fn visibility_message(hidden: bool) -> &'static str {
    if hidden {
        "User left the page"
    } else {
        "User returned to the page"
    }
}

#[function_component]
fn App() -> Html {
    // Body fades in once the app is mounted.
    use_effect_with_deps(move |_| {
        BrowserPage.set_body_style("opacity", "1");
        || ()
    }, ());

    use_effect_with_deps(move |_| {
        let listener = window().and_then(|w| w.document()).map(|document| {
            let target = document.clone();
            Listener::new(&target, "visibilitychange", move || {
                info!("{}", visibility_message(document.hidden()));
            })
        });
        move || drop(listener)
    }, ());

    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn welcome_banner() {
    gloo_console::log!("%c🌟 Becoming YOU Retreat 🌟", "font-size: 20px; font-weight: bold; color: #d4a574;");
    gloo_console::log!("%cBereit für deine Transformation? 8.-11. Oktober 2026 auf Zypern", "font-size: 14px; color: #8b7355;");
    gloo_console::log!("%cWebsite entwickelt mit ❤️", "font-size: 12px; color: #999;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    welcome_banner();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_changes_are_described() {
        assert_eq!(visibility_message(true), "User left the page");
        assert_eq!(visibility_message(false), "User returned to the page");
    }
}
