use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use web_sys::{FocusEvent, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{BrowserPage, Page};
use crate::error::SubmitError;
use crate::state::form::{BookingForm, Field};
use crate::storage::{restore_draft, DraftStore, LocalDraftStore};
use crate::submit::Submitter;

pub const SUBMIT_ERROR_MESSAGE: &str =
    "Es gab einen Fehler beim Absenden des Formulars. Bitte versuchen Sie es später erneut.";

pub enum BookingMsg {
    Input(Field, String),
    Blur(Field),
    Focus(Field),
    Submit,
    Submitted(Result<(), SubmitError>),
    ResetFields,
}

pub struct BookingSection {
    form: BookingForm,
    store: LocalDraftStore,
    submitter: Submitter,
    reset: Option<Timeout>,
    scroll_to_success: bool,
    config: SiteConfig,
}

/// Applies one keystroke and overwrites the saved draft with the whole form.
pub fn record_input(form: &mut BookingForm, store: &impl DraftStore, field: Field, value: String) {
    let draft = form.input(field, value);
    if let Err(e) = store.save(draft) {
        warn!("Could not save booking draft: {}", e);
    }
}

/// Settles an in-flight submission. Returns true on success, when the delayed
/// field reset should be armed.
pub fn finish_submission(
    form: &mut BookingForm,
    result: Result<(), SubmitError>,
    page: &impl Page,
    store: &impl DraftStore,
) -> bool {
    match result {
        Ok(()) => {
            form.submit_succeeded();
            if let Err(e) = store.remove() {
                warn!("Could not clear booking draft: {}", e);
            }
            info!("Booking submitted");
            true
        }
        Err(e) => {
            form.submit_failed();
            error!("Form submission error: {}", e);
            page.alert(SUBMIT_ERROR_MESSAGE);
            false
        }
    }
}

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

impl BookingSection {
    fn field_handlers(
        &self,
        ctx: &Context<Self>,
        field: Field,
    ) -> (Callback<InputEvent>, Callback<FocusEvent>, Callback<FocusEvent>) {
        let link = ctx.link();
        (
            link.callback(move |e: InputEvent| BookingMsg::Input(field, input_value(&e))),
            link.callback(move |_: FocusEvent| BookingMsg::Blur(field)),
            link.callback(move |_: FocusEvent| BookingMsg::Focus(field)),
        )
    }

    fn input_field(&self, ctx: &Context<Self>, field: Field, kind: &'static str, label: &'static str) -> Html {
        let (oninput, onblur, onfocus) = self.field_handlers(ctx, field);
        html! {
            <div class="form-group">
                <label for={field.id()}>{label}</label>
                <input
                    type={kind}
                    id={field.id()}
                    name={field.id()}
                    required={field.required()}
                    value={self.form.draft().get(field).to_string()}
                    style={self.form.field_style(field)}
                    {oninput}
                    {onblur}
                    {onfocus}
                />
            </div>
        }
    }
}

impl Component for BookingSection {
    type Message = BookingMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = SiteConfig::default();
        let store = LocalDraftStore::new(config.draft_key);
        let form = BookingForm::with_draft(restore_draft(&store));
        Self {
            form,
            store,
            submitter: crate::config::submitter(),
            reset: None,
            scroll_to_success: false,
            config,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingMsg::Input(field, value) => {
                record_input(&mut self.form, &self.store, field, value);
                true
            }
            BookingMsg::Blur(field) => {
                self.form.blur(field);
                true
            }
            BookingMsg::Focus(field) => {
                self.form.focus(field);
                true
            }
            BookingMsg::Submit => {
                let Some(booking) = self.form.begin_submit(Utc::now()) else {
                    warn!("Booking already in flight, ignoring submit");
                    return false;
                };
                let submitter = self.submitter.clone();
                ctx.link().send_future(async move {
                    BookingMsg::Submitted(submitter.submit(&booking).await)
                });
                true
            }
            BookingMsg::Submitted(result) => {
                if finish_submission(&mut self.form, result, &BrowserPage, &self.store) {
                    self.scroll_to_success = true;
                    let link = ctx.link().clone();
                    self.reset = Some(Timeout::new(self.config.form_reset_ms, move || {
                        link.send_message(BookingMsg::ResetFields)
                    }));
                }
                true
            }
            BookingMsg::ResetFields => {
                self.form.reset_fields();
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the handle clears the timer.
        drop(self.reset.take());
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The success box only has a layout once it is displayed.
        if std::mem::take(&mut self.scroll_to_success) {
            BrowserPage.scroll_into_view("#formSuccess", true);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingMsg::Submit
        });
        let (oninput, onblur, onfocus) = self.field_handlers(ctx, Field::Message);
        let form_display = if self.form.form_visible() { "" } else { "display: none;" };
        let success_display = if self.form.success_visible() { "display: block;" } else { "display: none;" };

        html! {
            <div class="booking-container">
                <form id="bookingForm" class="booking-form" style={form_display} {onsubmit}>
                    { self.input_field(ctx, Field::Name, "text", "Name") }
                    { self.input_field(ctx, Field::Email, "email", "E-Mail") }
                    { self.input_field(ctx, Field::Phone, "tel", "Telefon") }
                    <div class="form-group">
                        <label for="message">{"Nachricht"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            required={Field::Message.required()}
                            value={self.form.draft().message.clone()}
                            style={self.form.field_style(Field::Message)}
                            {oninput}
                            {onblur}
                            {onfocus}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={self.form.is_submitting()}>
                        { if self.form.is_submitting() { "Wird gesendet..." } else { "Jetzt anmelden" } }
                    </button>
                </form>
                <div id="formSuccess" class="form-success" style={success_display}>
                    <h3>{"Vielen Dank für deine Anmeldung!"}</h3>
                    <p>{"Wir melden uns in den nächsten Tagen persönlich bei dir."}</p>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakePage;
    use crate::state::form::{Draft, FormPhase};
    use crate::storage::memory::MemoryDraftStore;

    fn typed(store: &MemoryDraftStore) -> BookingForm {
        let mut form = BookingForm::default();
        record_input(&mut form, store, Field::Name, "A".into());
        record_input(&mut form, store, Field::Email, "a@b.com".into());
        record_input(&mut form, store, Field::Phone, "1".into());
        record_input(&mut form, store, Field::Message, "hi".into());
        form
    }

    #[test]
    fn every_keystroke_persists_the_full_draft() {
        let store = MemoryDraftStore::default();
        let form = typed(&store);
        assert_eq!(restore_draft(&store), *form.draft());

        let reloaded = BookingForm::with_draft(restore_draft(&store));
        assert_eq!(reloaded.draft().phone, "1");
    }

    #[test]
    fn successful_submission_hides_form_and_clears_draft() {
        let store = MemoryDraftStore::default();
        let page = FakePage::default();
        let mut form = typed(&store);

        assert!(form.begin_submit(Utc::now()).is_some());
        assert!(finish_submission(&mut form, Ok(()), &page, &store));
        assert!(!form.form_visible());
        assert!(form.success_visible());
        assert_eq!(store.load().unwrap(), None);
        assert!(page.alerts.borrow().is_empty());

        // delayed reset
        form.reset_fields();
        assert_eq!(*form.draft(), Draft::default());
    }

    #[test]
    fn failed_submission_keeps_everything_and_alerts() {
        let store = MemoryDraftStore::default();
        let page = FakePage::default();
        let mut form = typed(&store);
        let before = form.draft().clone();

        form.begin_submit(Utc::now());
        let armed = finish_submission(
            &mut form,
            Err(SubmitError::Network("connection refused".into())),
            &page,
            &store,
        );
        assert!(!armed);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.form_visible());
        assert_eq!(*form.draft(), before);
        assert_eq!(restore_draft(&store), before);
        assert_eq!(*page.alerts.borrow(), vec![SUBMIT_ERROR_MESSAGE.to_string()]);
    }
}
