use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{BrowserPage, Page};
use crate::state::lightbox::{GalleryImage, Lightbox, OverlayClick};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

pub enum GalleryMsg {
    Open(GalleryImage),
    FadedIn,
    Click(OverlayClick),
    Removed,
}

pub struct Gallery {
    lightbox: Lightbox,
    // Fade-in tick or pending removal. Replacing it cancels the old one.
    pending: Option<Timeout>,
    config: SiteConfig,
}

/// Body scrolling follows whether an overlay exists.
pub fn sync_scroll_lock(page: &impl Page, lightbox: &Lightbox) {
    let overflow = if lightbox.locks_scroll() { "hidden" } else { "" };
    page.set_body_style("overflow", overflow);
}

impl Gallery {
    fn schedule(&mut self, ctx: &Context<Self>, millis: u32, msg: fn() -> GalleryMsg) {
        let link = ctx.link().clone();
        self.pending = Some(Timeout::new(millis, move || link.send_message(msg())));
    }
}

impl Component for Gallery {
    type Message = GalleryMsg;
    type Properties = GalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            lightbox: Lightbox::Closed,
            pending: None,
            config: SiteConfig::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let current = std::mem::take(&mut self.lightbox);
        match msg {
            GalleryMsg::Open(image) => {
                let (next, fade_in) = current.open(image);
                self.lightbox = next;
                if !fade_in {
                    debug!("Lightbox already open, ignoring");
                    return false;
                }
                self.schedule(ctx, self.config.lightbox_fade_in_ms, || GalleryMsg::FadedIn);
                sync_scroll_lock(&BrowserPage, &self.lightbox);
                true
            }
            GalleryMsg::FadedIn => {
                self.lightbox = current.faded_in();
                true
            }
            GalleryMsg::Click(click) => {
                if !click.closes() {
                    self.lightbox = current;
                    return false;
                }
                let (next, remove) = current.close();
                self.lightbox = next;
                if remove {
                    self.schedule(ctx, self.config.lightbox_fade_out_ms, || GalleryMsg::Removed);
                }
                remove
            }
            GalleryMsg::Removed => {
                self.lightbox = current.removed();
                sync_scroll_lock(&BrowserPage, &self.lightbox);
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        drop(self.pending.take());
        if self.lightbox.locks_scroll() {
            sync_scroll_lock(&BrowserPage, &Lightbox::Closed);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let overlay = match self.lightbox.image() {
            Some(image) => {
                let onclick = link.callback(|e: MouseEvent| {
                    let class_name = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .map(|el| el.class_name())
                        .unwrap_or_default();
                    GalleryMsg::Click(OverlayClick::from_class(&class_name))
                });
                html! {
                    <div class="lightbox" style={format!("opacity: {};", self.lightbox.opacity())} {onclick}>
                        <div class="lightbox-overlay"></div>
                        <div class="lightbox-content">
                            <img src={image.src.clone()} alt={image.alt.clone()} />
                            <button class="lightbox-close">{"×"}</button>
                        </div>
                    </div>
                }
            }
            None => html! {},
        };

        html! {
            <>
                <div class="gallery-grid">
                    { for ctx.props().images.iter().map(|image| {
                        let open = image.clone();
                        let onclick = link.callback(move |_: MouseEvent| GalleryMsg::Open(open.clone()));
                        html! {
                            <div class="gallery-item" {onclick}>
                                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                            </div>
                        }
                    }) }
                </div>
                { overlay }
                <style>
                    {r#"
                    .lightbox {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: opacity 0.3s ease;
                    }

                    .lightbox-overlay {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background: rgba(0, 0, 0, 0.95);
                        cursor: pointer;
                    }

                    .lightbox-content {
                        position: relative;
                        z-index: 2;
                        max-width: 90%;
                        max-height: 90%;
                        animation: zoomIn 0.3s ease;
                    }

                    .lightbox-content img {
                        max-width: 100%;
                        max-height: 90vh;
                        border-radius: 10px;
                        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
                    }

                    .lightbox-close {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        background: none;
                        border: none;
                        color: white;
                        font-size: 40px;
                        cursor: pointer;
                        padding: 0;
                        width: 40px;
                        height: 40px;
                        line-height: 1;
                        transition: transform 0.2s ease;
                    }

                    .lightbox-close:hover {
                        transform: scale(1.2);
                    }

                    @keyframes zoomIn {
                        from {
                            transform: scale(0.8);
                            opacity: 0;
                        }
                        to {
                            transform: scale(1);
                            opacity: 1;
                        }
                    }
                    "#}
                </style>
            </>
        }
    }
}
