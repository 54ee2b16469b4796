use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::counter::CounterAnimation;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    #[prop_or(SiteConfig::default().counter_duration_ms)]
    pub duration_ms: u32,
}

/// Counts from 0 to `target`, one step per frame.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &CounterProps) -> Html {
    let shown = use_state(|| 0u64);

    {
        let shown = shown.setter();
        let target = props.target;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |_| {
                let stopped = Rc::new(Cell::new(false));
                let frame_ms = SiteConfig::default().counter_frame_ms;
                {
                    let stopped = stopped.clone();
                    spawn_local(async move {
                        for value in CounterAnimation::new(target, duration_ms, frame_ms) {
                            if stopped.get() {
                                return;
                            }
                            shown.set(value);
                            TimeoutFuture::new(frame_ms).await;
                        }
                    });
                }
                move || stopped.set(true)
            },
            (target, duration_ms),
        );
    }

    html! {
        <span class="counter">{*shown}</span>
    }
}
