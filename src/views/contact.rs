use dioxus::events::FormData;
use dioxus::prelude::*;

use crate::configs::content::{ section, PROFILE };
use crate::error::FormError;
use crate::utils::validate_contact;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

const ACK_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut outcome = use_signal(|| None::<Result<&'static str, FormError>>);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match validate_contact(&name.read(), &email.read(), &message.read()) {
            Ok(accepted) => {
                // The message goes nowhere; the log line is all that remains of it.
                log::info!(
                    "contact message accepted: {}",
                    serde_json::to_string(&accepted).unwrap_or_default()
                );
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                outcome.set(Some(Ok(ACK_MESSAGE)));
            }
            Err(err) => outcome.set(Some(Err(err))),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section {
            id: section::CONTACT,
            class: "section dark-section",
            h2 { class: "section-title", "Get In Touch" }
            div {
                class: "contact-container",
                div {
                    class: "contact-info",
                    div {
                        class: "contact-item",
                        div {
                            h4 { "Email" }
                            p { {PROFILE.email} }
                        }
                    }
                    div {
                        class: "contact-item",
                        div {
                            h4 { "Phone" }
                            p { {PROFILE.phone} }
                        }
                    }
                    div {
                        class: "contact-item",
                        div {
                            h4 { "Location" }
                            p { {PROFILE.location} }
                        }
                    }
                }

                form {
                    class: "contact-form",
                    onsubmit: submit,
                    div {
                        class: "form-group",
                        label { r#for: "name", "Name" }
                        input {
                            r#type: "text",
                            id: "name",
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            r#type: "email",
                            id: "email",
                            placeholder: "Your email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            rows: "4",
                            placeholder: "Your message",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", class: "btn-primary", "Send Message" }

                    {outcome.read().as_ref().map(|result| match result {
                        Ok(ack) => rsx! {
                            p { class: "form-feedback ok", "{ack}" }
                        },
                        Err(err) => rsx! {
                            p { class: "form-feedback error", "{err}" }
                        },
                    })}
                }
            }
        }
    }
}
