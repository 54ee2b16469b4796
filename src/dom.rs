use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

/// Event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(target: &EventTarget, event: &'static str, f: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// The slice of the browser document the page behaviors touch.
pub trait Page {
    fn scroll_y(&self) -> f64;
    /// Smooth scroll of the window to an absolute document offset.
    fn scroll_to(&self, top: f64);
    /// `offsetTop` of the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Smoothly brings the first `selector` match into view. Returns false if nothing matched.
    fn scroll_into_view(&self, selector: &str, centered: bool) -> bool;
    fn set_body_style(&self, property: &str, value: &str);
    fn alert(&self, message: &str);
}

#[derive(Clone, Copy, Default)]
pub struct BrowserPage;

impl BrowserPage {
    fn body(&self) -> Option<HtmlElement> {
        window()?.document()?.body()
    }
}

impl Page for BrowserPage {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = window()?.document()?.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn scroll_into_view(&self, selector: &str, centered: bool) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(selector).ok().flatten())
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        if centered {
            options.set_block(ScrollLogicalPosition::Center);
        }
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_body_style(&self, property: &str, value: &str) {
        if let Some(body) = self.body() {
            let _ = body.style().set_property(property, value);
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::Page;

    /// Records what the behaviors did to the page.
    #[derive(Default)]
    pub struct FakePage {
        pub scroll: Cell<f64>,
        pub elements: HashMap<String, f64>,
        pub selectors: Vec<String>,
        pub scrolled_to: RefCell<Vec<f64>>,
        pub scrolled_into_view: RefCell<Vec<(String, bool)>>,
        pub body_style: RefCell<HashMap<String, String>>,
        pub alerts: RefCell<Vec<String>>,
    }

    impl FakePage {
        pub fn with_element(mut self, id: &str, top: f64) -> Self {
            self.elements.insert(id.to_string(), top);
            self
        }

        pub fn with_selector(mut self, selector: &str) -> Self {
            self.selectors.push(selector.to_string());
            self
        }

        pub fn body(&self, property: &str) -> Option<String> {
            self.body_style.borrow().get(property).cloned()
        }
    }

    impl Page for FakePage {
        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.elements.get(id).copied()
        }

        fn scroll_into_view(&self, selector: &str, centered: bool) -> bool {
            if !self.selectors.iter().any(|s| s == selector) {
                return false;
            }
            self.scrolled_into_view
                .borrow_mut()
                .push((selector.to_string(), centered));
            true
        }

        fn set_body_style(&self, property: &str, value: &str) {
            self.body_style
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }
}
