use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::{Reveal, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD, REVEAL_TRANSITION};

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn apply(element: &HtmlElement, state: Reveal) {
    let (opacity, transform) = state.style();
    let style = element.style();
    let _ = style.set_property("opacity", opacity);
    let _ = style.set_property("transform", transform);
}

fn observe_reveal_targets() -> Option<RevealObserver> {
    let document = window()?.document()?;
    let targets = document.query_selector_all(REVEAL_SELECTORS).ok()?;

    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if Reveal::default().on_intersection(entry.is_intersecting()) != Reveal::Revealed {
                continue;
            }
            if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                apply(&element, Reveal::Revealed);
            }
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable, content stays visible: {:?}", e);
            return None;
        }
    };

    for index in 0..targets.length() {
        let Some(element) = targets.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        apply(&element, Reveal::Hidden);
        let _ = element.style().set_property("transition", REVEAL_TRANSITION);
        observer.observe(&element);
    }

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Fades in the page's content blocks as they enter the viewport. Call once
/// from the component that renders them.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = observe_reveal_targets();
            move || drop(observer)
        },
        (),
    );
}
