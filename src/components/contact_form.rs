use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::inquiry::{EventType, Field, Inquiry};

fn field_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Captures an inquiry locally and shows a short thank-you notice.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let inquiry = use_state(Inquiry::default);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    // Clean up the notice timer on unmount
    {
        let notice_timer = notice_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    notice_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let update = |field: Field| {
        let inquiry = inquiry.clone();
        move |e: &Event| {
            let next = (*inquiry).clone().with_field(field, field_value(e));
            inquiry.set(next);
        }
    };
    let on_input = |field: Field| {
        let update = update(field);
        Callback::from(move |e: InputEvent| {
            let event: &Event = &e;
            update(event)
        })
    };
    let on_change = |field: Field| {
        let update = update(field);
        Callback::from(move |e: Event| update(&e))
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = inquiry.validate() {
                warn!("inquiry not accepted: {err}");
                error.set(Some(err.to_string()));
                return;
            }
            match inquiry.to_json() {
                Ok(json) => debug!("captured inquiry {json}"),
                Err(err) => warn!("failed to serialize inquiry: {err}"),
            }

            inquiry.set(Inquiry::default());
            error.set(None);
            submitted.set(true);

            let submitted = submitted.clone();
            // Replacing an older timer cancels it.
            *notice_timer.borrow_mut() = Some(Timeout::new(config::INQUIRY_NOTICE_MS, move || {
                submitted.set(false);
            }));
        })
    };

    let selected = inquiry.event_type.map(EventType::value).unwrap_or_default();

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            {
                if *submitted {
                    html! {
                        <div class="success-message">
                            <span class="check">{"✓"}</span>
                            {"Thank you! We will be in touch within 24 hours."}
                        </div>
                    }
                } else if let Some(error_message) = (*error).as_ref() {
                    html! {
                        <div class="error-message">{error_message.clone()}</div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-grid">
                <div>
                    <label for="name">{"Full Name"}</label>
                    <input id="name" type="text" required=true placeholder="Your name"
                        value={inquiry.name.clone()} oninput={on_input(Field::Name)} />
                </div>
                <div>
                    <label for="email">{"Email Address"}</label>
                    <input id="email" type="email" required=true placeholder="your@email.com"
                        value={inquiry.email.clone()} oninput={on_input(Field::Email)} />
                </div>
                <div>
                    <label for="phone">{"Phone Number"}</label>
                    <input id="phone" type="tel" placeholder="(555) 000-0000"
                        value={inquiry.phone.clone()} oninput={on_input(Field::Phone)} />
                </div>
                <div>
                    <label for="eventType">{"Event Type"}</label>
                    <select id="eventType" onchange={on_change(Field::EventType)}>
                        <option value="" selected={selected.is_empty()}>{"Select event type"}</option>
                        { for EventType::ALL.iter().map(|kind| html! {
                            <option key={kind.value()} value={kind.value()} selected={selected == kind.value()}>
                                {kind.label()}
                            </option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-message">
                <label for="message">{"Tell Us About Your Vision"}</label>
                <textarea id="message" rows="4"
                    placeholder="Share details about your event, preferred date, guest count, and any special requests..."
                    value={inquiry.message.clone()} oninput={on_input(Field::Message)} />
            </div>
            <button type="submit" class="submit-button">{"➤ Send Message"}</button>
        </form>
    }
}
