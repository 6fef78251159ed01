use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{ContactAction, ContactError, ContactForm, Field, SubmitStatus};
use crate::contact::mailto;
use crate::content::{ContactChannel, CONTACT_CHANNELS, OPENING_HOURS};
use crate::navigation::SectionId;
use crate::reveal::{Offset, Reveal, RevealPlan, Side};
use crate::timer::TimerSlot;

fn render_channel(channel: &ContactChannel) -> Html {
    let body = html! {
        <>
            <div class="channel-icon">{channel.icon()}</div>
            <div>
                <h4>{channel.title}</h4>
                <p>{channel.value}</p>
            </div>
        </>
    };
    match channel.link() {
        Some(link) => html! {
            <a key={channel.title} class="contact-channel" href={link}>{body}</a>
        },
        None => html! {
            <div key={channel.title} class="contact-channel">{body}</div>
        },
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let reset_timer = use_mut_ref(TimerSlot::<Timeout>::default);

    // Arm the auto-reset whenever a submit settles; a new submit disarms it.
    {
        let dispatcher = form.dispatcher();
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |(status, cycle): &(SubmitStatus, u32)| {
                let mut slot = reset_timer.borrow_mut();
                if status.is_settled() {
                    let cycle = *cycle;
                    slot.schedule(config::STATUS_RESET_MS, move || {
                        dispatcher.dispatch(ContactAction::ResetStatus { cycle });
                    });
                } else if *status == SubmitStatus::Submitting {
                    slot.cancel();
                }
                || ()
            },
            (form.status, form.cycle),
        );
    }

    // Nothing may fire after the section is gone
    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_timer.borrow_mut().cancel();
                }
            },
            (),
        );
    }

    let submitting = form.status == SubmitStatus::Submitting;

    let on_input = |field: Field| {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit { field, value: input.value() });
        })
    };

    let on_message = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit { field: Field::Message, value: input.value() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.status == SubmitStatus::Submitting {
                return;
            }
            let fields = form.fields.clone();
            form.dispatch(ContactAction::Submit);
            match mailto::send_inquiry(&fields) {
                Ok(()) => form.dispatch(ContactAction::HandOffAccepted),
                // Already flagged inline by the Submit action
                Err(ContactError::Validation(_)) => {}
                Err(ContactError::HandOff(err)) => {
                    warn!("Inquiry hand-off failed: {}", err);
                    gloo_console::error!(format!("Could not open mail client: {}", err));
                    form.dispatch(ContactAction::HandOffFailed);
                }
            }
        })
    };

    let field_class = |field: Field| {
        classes!("form-input", form.errors.contains(field).then(|| "invalid"))
    };

    let field_error = |field: Field| -> Html {
        if form.errors.contains(field) {
            html! { <span class="field-error">{format!("{} is required", field.label())}</span> }
        } else {
            html! {}
        }
    };

    let field_label = |field: Field| -> String {
        if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        }
    };

    let status_banner = match form.status {
        SubmitStatus::Success => html! {
            <div class="status-banner success">
                {"Your mail app should now open with your message ready to send."}
            </div>
        },
        SubmitStatus::Error => html! {
            <div class="status-banner error">
                {format!("We couldn't open your mail app. Please try again or email us at {}.", config::CONTACT_EMAIL)}
            </div>
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
    };

    html! {
        <section id={SectionId::Contact.anchor()} class="contact page-section">
            <style>
                {r#"
                    .contact {
                        background-color: #228B22;
                        color: white;
                    }
                    .contact .section-title, .contact .section-lead {
                        color: white;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
                        gap: 50px;
                    }
                    .form-card {
                        background: white;
                        color: #333;
                        padding: 40px;
                        border-radius: 20px;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                    }
                    .form-card h3 {
                        font-size: 2rem;
                        margin-bottom: 30px;
                        color: #228B22;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 20px;
                    }
                    .contact-form label {
                        display: block;
                        margin-bottom: 8px;
                        font-weight: bold;
                    }
                    .form-input {
                        width: 100%;
                        padding: 15px;
                        border: 2px solid #e0e0e0;
                        border-radius: 10px;
                        font-size: 16px;
                        box-sizing: border-box;
                        font-family: inherit;
                        transition: border-color 0.3s ease;
                    }
                    .form-input:focus {
                        outline: none;
                        border-color: #228B22;
                    }
                    .form-input.invalid {
                        border-color: #d32f2f;
                    }
                    .field-error {
                        display: block;
                        color: #d32f2f;
                        font-size: 0.85rem;
                        margin-top: 6px;
                    }
                    .submit-button {
                        background: #228B22;
                        color: white;
                        padding: 18px;
                        border: none;
                        border-radius: 10px;
                        font-size: 18px;
                        font-weight: bold;
                        cursor: pointer;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .submit-button:hover {
                        background: #1B5E20;
                        transform: scale(1.02);
                    }
                    .submit-button:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .status-banner {
                        padding: 15px;
                        border-radius: 10px;
                        font-weight: bold;
                    }
                    .status-banner.success {
                        background: #e8f5e9;
                        color: #1B5E20;
                    }
                    .status-banner.error {
                        background: #ffebee;
                        color: #c62828;
                    }
                    .contact-info h3 {
                        font-size: 2rem;
                        margin-bottom: 30px;
                    }
                    .contact-channel {
                        display: flex;
                        align-items: center;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(10px);
                        padding: 20px;
                        border-radius: 15px;
                        margin-bottom: 20px;
                        color: white;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    a.contact-channel:hover {
                        transform: translateX(10px) scale(1.02);
                    }
                    .channel-icon {
                        font-size: 24px;
                        margin-right: 15px;
                    }
                    .contact-channel h4 {
                        margin: 0 0 5px 0;
                    }
                    .contact-channel p {
                        margin: 0;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .info-panel {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(10px);
                        padding: 25px;
                        border-radius: 15px;
                        margin-bottom: 30px;
                    }
                    .hours-row {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 8px;
                    }
                    .social-icons {
                        display: flex;
                        justify-content: center;
                        gap: 20px;
                        margin-bottom: 20px;
                    }
                    .social-icons a {
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        background: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 24px;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .social-icons a:hover {
                        transform: scale(1.2) rotate(5deg);
                    }
                    .response-note {
                        text-align: center;
                        color: #FFD700;
                        font-weight: bold;
                        margin: 0;
                    }
                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                        .form-card {
                            padding: 25px;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <Reveal plan={RevealPlan::new(Offset::Up)}>
                    <h2 class="section-title">{"Get In Touch"}</h2>
                    <p class="section-lead">{"Ready to experience the finest Muhari coffee? We'd love to hear from you!"}</p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal plan={RevealPlan::new(Offset::FromSide(Side::Left))}>
                        <div class="form-card">
                            <h3>{"Send Us a Message"}</h3>
                            <form class="contact-form" {onsubmit}>
                                <div>
                                    <label for="contact-name">{field_label(Field::Name)}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        class={field_class(Field::Name)}
                                        placeholder="Your full name"
                                        value={form.fields.name.clone()}
                                        required=true
                                        disabled={submitting}
                                        oninput={on_input(Field::Name)}
                                    />
                                    { field_error(Field::Name) }
                                </div>
                                <div>
                                    <label for="contact-email">{field_label(Field::Email)}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        class={field_class(Field::Email)}
                                        placeholder="your.email@example.com"
                                        value={form.fields.email.clone()}
                                        required=true
                                        disabled={submitting}
                                        oninput={on_input(Field::Email)}
                                    />
                                    { field_error(Field::Email) }
                                </div>
                                <div>
                                    <label for="contact-phone">{field_label(Field::Phone)}</label>
                                    <input
                                        id="contact-phone"
                                        type="tel"
                                        class={field_class(Field::Phone)}
                                        placeholder="+250 xxx xxx xxx"
                                        value={form.fields.phone.clone()}
                                        disabled={submitting}
                                        oninput={on_input(Field::Phone)}
                                    />
                                </div>
                                <div>
                                    <label for="contact-message">{field_label(Field::Message)}</label>
                                    <textarea
                                        id="contact-message"
                                        rows="5"
                                        class={field_class(Field::Message)}
                                        placeholder="Tell us about your coffee needs..."
                                        value={form.fields.message.clone()}
                                        required=true
                                        disabled={submitting}
                                        oninput={on_message}
                                    />
                                    { field_error(Field::Message) }
                                </div>
                                { status_banner }
                                <button type="submit" class="submit-button" disabled={submitting}>
                                    if submitting {
                                        {"Opening mail app..."}
                                    } else {
                                        {"✉️ Send Message"}
                                    }
                                </button>
                            </form>
                        </div>
                    </Reveal>

                    <Reveal class={classes!("contact-info")} plan={RevealPlan::new(Offset::FromSide(Side::Right))}>
                        <h3>{"Contact Information"}</h3>
                        { for CONTACT_CHANNELS.iter().map(render_channel) }

                        <div class="info-panel">
                            <h4>{"🕒 Opening Hours"}</h4>
                            { for OPENING_HOURS.iter().map(|(day, hours)| html! {
                                <div key={*day} class="hours-row">
                                    <strong>{format!("{}:", day)}</strong>
                                    <span>{*hours}</span>
                                </div>
                            }) }
                        </div>

                        <div class="info-panel">
                            <h4 style="text-align: center;">{"Follow Us & Connect"}</h4>
                            <div class="social-icons">
                                <a href={format!("https://wa.me/{}", config::WHATSAPP_NUMBER)} target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">{"💬"}</a>
                                <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"📷"}</a>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)} aria-label="Email">{"✉️"}</a>
                            </div>
                            <p class="response-note">{"🚀 Fast Response Guarantee - We reply within 24 hours!"}</p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn browser_checks_required_fields_and_email_format() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<Contact>::with_root(root.clone()).render();
        TimeoutFuture::new(20).await;

        let form = root.query_selector("form.contact-form").unwrap().unwrap();
        assert!(!form.has_attribute("novalidate"));

        let email: HtmlInputElement = root
            .query_selector("#contact-email")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(email.required());
        email.set_value("abc");
        assert!(!email.check_validity());
        email.set_value("a@x.com");
        assert!(email.check_validity());

        let name: HtmlInputElement = root
            .query_selector("#contact-name")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(name.required());
        name.set_value(" ");
        assert!(name.check_validity());

        app.destroy();
        root.remove();
    }
}
