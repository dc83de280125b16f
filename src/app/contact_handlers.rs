//! Contact handlers - input mirroring and submission.

use super::state::Photocraft;
use crate::constants::CONFIRMATION_TOAST_DURATION;
use crate::contact::{ContactField, DeliveryReceipt, SubmitError, TransportError};
use crate::content::Phrase;
use crate::notifications::Toast;
use gpui::*;
use gpui_component::input::{InputEvent, InputState};
use std::time::Instant;

impl Photocraft {
    /// Mirror every text input into the form so edits clear their field's error.
    pub(crate) fn subscribe_contact_inputs(&mut self, cx: &mut Context<Self>) {
        for field in ContactField::ALL {
            let Some(input) = self.contact.inputs.get(field).cloned() else {
                continue;
            };
            cx.subscribe(&input, move |this, input, event: &InputEvent, cx| {
                match event {
                    InputEvent::Change { .. } => {
                        let value = input.read(cx).value().to_string();
                        if value != this.contact.form.value(field) {
                            this.contact.form.set_value(field, value);
                            cx.notify();
                        }
                    }
                    InputEvent::PressEnter { .. } if field != ContactField::Message => {
                        this.submit_contact(cx);
                    }
                    _ => {}
                }
            })
            .detach();
        }
    }

    /// Subject is picked from a fixed list rather than typed.
    pub fn select_subject(&mut self, subject: &str, cx: &mut Context<Self>) {
        self.contact.form.set_value(ContactField::Subject, subject);
        cx.notify();
    }

    pub fn submit_contact(&mut self, cx: &mut Context<Self>) {
        let message = match self.contact.form.begin_submit() {
            Ok(message) => message,
            Err(SubmitError::Invalid(errors)) => {
                tracing::debug!(?errors, "contact form has errors");
                cx.notify();
                return;
            }
            Err(e) => {
                tracing::debug!("submit ignored: {}", e);
                return;
            }
        };

        let delivery = self.contact.transport.send(message);
        self.contact.submit_task = Some(cx.spawn(async move |this, cx| {
            let outcome = delivery.await;
            this.update(cx, |this, cx| this.finish_contact_submit(outcome, cx))
                .ok();
        }));
        cx.notify();
    }

    fn finish_contact_submit(
        &mut self,
        outcome: Result<DeliveryReceipt, TransportError>,
        cx: &mut Context<Self>,
    ) {
        let locale = self.page.locale;
        match self.contact.form.finish_submit(outcome, Instant::now()) {
            Ok(_) => {
                self.system.toasts.push(
                    Toast::success(Phrase::ToastSentTitle.get(locale))
                        .with_detail(Phrase::ToastSentBody.get(locale))
                        .with_duration(CONFIRMATION_TOAST_DURATION),
                );
                self.contact.clear_inputs_pending = true;
            }
            Err(e) => {
                self.system.toasts.push(
                    Toast::error(Phrase::ToastSendFailed.get(locale)).with_detail(e.to_string()),
                );
            }
        }
        cx.notify();
    }

    /// Bring the input widgets in line with the form: empty them after a
    /// successful send and rewrite placeholders after a locale change.
    pub(crate) fn sync_contact_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let locale = self.page.locale;
        let clear = std::mem::take(&mut self.contact.clear_inputs_pending);
        let relabel = self.contact.placeholder_locale != locale;
        if !clear && !relabel {
            return;
        }
        self.contact.placeholder_locale = locale;

        for field in ContactField::ALL {
            let Some(input) = self.contact.inputs.get(field).cloned() else {
                continue;
            };
            let placeholder = field.placeholder().map(|p| p.get(locale));
            input.update(cx, |state: &mut InputState, cx| {
                if clear {
                    state.set_value("", window, cx);
                }
                if let (true, Some(placeholder)) = (relabel, placeholder) {
                    state.set_placeholder(placeholder, window, cx);
                }
            });
        }
    }
}
