use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::faq::FaqState;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqProps) -> Html {
    let state = use_state(FaqState::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set(state.click(index));
                    })
                };
                html! {
                    <div class={state.item_class(index)}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if state.is_open(index) { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
