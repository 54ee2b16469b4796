use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{BrowserPage, Listener, Page};
use crate::state::nav::{anchor_scroll_top, fragment_id, NavAction, NavState};

struct NavModel(NavState);

impl Reducible for NavModel {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = self.0.apply(action, &SiteConfig::default());
        if next == self.0 {
            self
        } else {
            Rc::new(NavModel(next))
        }
    }
}

/// Smooth-scrolls to the anchor's target below the fixed header. Unknown targets are ignored.
pub fn scroll_to_anchor(page: &impl Page, href: &str, config: &SiteConfig) -> bool {
    let Some(top) = fragment_id(href).and_then(|id| page.element_top(id)) else {
        return false;
    };
    page.scroll_to(anchor_scroll_top(top, config));
    true
}

/// Click handler for any in-page `#id` link.
pub fn anchor_callback(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(&BrowserPage, href, &SiteConfig::default());
    })
}

const LINKS: [(&str, &str); 5] = [
    ("#about", "Über uns"),
    ("#program", "Programm"),
    ("#gallery", "Galerie"),
    ("#faq", "FAQ"),
    ("#booking", "Anmeldung"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(|| {
        NavModel(NavState::at_offset(BrowserPage.scroll_y(), &SiteConfig::default()))
    });

    {
        let state = state.dispatcher();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                Listener::new(&window, "scroll", move || {
                    state.dispatch(NavAction::Scrolled(BrowserPage.scroll_y()));
                })
            });
            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let state = state.dispatcher();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };

    let nav = state.0;

    html! {
        <nav id="navbar" class={nav.navbar_class()}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={anchor_callback("#home")}>
                    {"Becoming YOU"}
                </a>
                <ul class={classes!("nav-menu", nav.active_class())}>
                    { for LINKS.iter().map(|&(href, label)| {
                        let scroll = anchor_callback(href);
                        let state = state.dispatcher();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            state.dispatch(NavAction::LinkClicked);
                            scroll.emit(e);
                        });
                        html! {
                            <li><a {href} class="nav-link" {onclick}>{label}</a></li>
                        }
                    }) }
                </ul>
                <button class={classes!("hamburger", nav.active_class())} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
