use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::nav::anchor_callback;
use crate::config::SiteConfig;
use crate::dom::{BrowserPage, Listener, Page};
use crate::state::nav::parallax_offset;

/// Brings the intro into view; silently does nothing if the page has none.
pub fn scroll_to_intro(page: &impl Page) -> bool {
    page.scroll_into_view(".intro-section", false)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let image_ref = use_node_ref();

    {
        let image_ref = image_ref.clone();
        use_effect_with_deps(move |_| {
            let config = SiteConfig::default();
            let listener = web_sys::window().map(|window| {
                Listener::new(&window, "scroll", move || {
                    let Some(image) = image_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let offset = parallax_offset(BrowserPage.scroll_y(), &config);
                    let _ = image
                        .style()
                        .set_property("transform", &format!("translateY({}px)", offset));
                })
            });
            move || drop(listener)
        }, ());
    }

    let on_indicator = Callback::from(|_: MouseEvent| {
        scroll_to_intro(&BrowserPage);
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-image" ref={image_ref}></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <p class="hero-dates">{"8. – 11. Oktober 2026 · Zypern"}</p>
                <h1>{"Becoming YOU"}</h1>
                <p class="hero-subtitle">{"Vier Tage Retreat für Klarheit, Mut und echte Verbindung zu dir selbst."}</p>
                <a href="#booking" class="btn btn-primary" onclick={anchor_callback("#booking")}>
                    {"Platz sichern"}
                </a>
            </div>
            <div class="scroll-indicator" onclick={on_indicator}>
                <span></span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakePage;

    #[test]
    fn indicator_scrolls_to_intro_when_present() {
        let page = FakePage::default().with_selector(".intro-section");
        assert!(scroll_to_intro(&page));
        assert_eq!(
            *page.scrolled_into_view.borrow(),
            vec![(".intro-section".to_string(), false)]
        );
    }

    #[test]
    fn indicator_without_intro_is_a_no_op() {
        let page = FakePage::default();
        assert!(!scroll_to_intro(&page));
        assert!(page.scrolled_into_view.borrow().is_empty());
    }
}
