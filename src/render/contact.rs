//! Contact rendering - contact cards, social links and the message form

use super::widgets::{content_column, primary_button, section, section_heading};
use crate::app::Photocraft;
use crate::contact::ContactField;
use crate::content::{CONTACT_INFO, CONTACT_SUBJECTS, Phrase, SocialNetwork};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

fn render_info(this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let accent = cx.theme().primary;
    let muted = cx.theme().muted;

    let mut cards = v_flex().gap(px(20.0));
    for (ix, info) in CONTACT_INFO.iter().enumerate() {
        let link = info.link;
        cards = cards.child(
            h_flex()
                .id(("contact-info", ix))
                .gap(px(16.0))
                .items_center()
                .cursor_pointer()
                .on_click(cx.listener(move |this, _, _, _| this.open_link(link)))
                .child(
                    div()
                        .size(px(44.0))
                        .rounded_full()
                        .bg(accent.opacity(0.12))
                        .text_color(accent)
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(info.icon().glyph()),
                )
                .child(
                    v_flex()
                        .child(
                            div()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(fg)
                                .child(info.title.get(locale)),
                        )
                        .child(div().text_sm().text_color(muted_fg).child(info.value)),
                ),
        );
    }

    let mut socials = h_flex().gap(px(10.0));
    for network in SocialNetwork::ALL {
        socials = socials.child(
            div()
                .id(ElementId::Name(format!("social-{}", network.name()).into()))
                .px(px(12.0))
                .py(px(6.0))
                .rounded(px(4.0))
                .bg(muted)
                .cursor_pointer()
                .text_sm()
                .text_color(fg)
                .hover(move |s| s.text_color(accent))
                .on_click(cx.listener(move |this, _, _, _| this.open_link(&network.url())))
                .child(network.name()),
        );
    }

    v_flex()
        .flex_1()
        .min_w(px(280.0))
        .gap(px(28.0))
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child(Phrase::ContactInfoHeading.get(locale)),
        )
        .child(cards)
        .child(
            v_flex()
                .gap(px(10.0))
                .child(div().text_color(muted_fg).child(Phrase::FollowSocial.get(locale)))
                .child(socials),
        )
}

/// Label, widget and inline error for one field.
fn render_field(field: ContactField, widget: impl IntoElement, this: &Photocraft, cx: &App) -> Div {
    let locale = this.page.locale;
    let fg = cx.theme().foreground;
    let danger = cx.theme().danger;
    let error = this.contact.form.error(field);

    let label = if field.is_required() {
        format!("{} *", field.label().get(locale))
    } else {
        field.label().get(locale).to_string()
    };

    v_flex()
        .w_full()
        .gap(px(6.0))
        .child(div().text_sm().font_weight(FontWeight::MEDIUM).text_color(fg).child(label))
        .child(widget)
        .when_some(error, |d, error| {
            d.child(div().text_xs().text_color(danger).child(error.message(field, locale)))
        })
}

fn render_subject_picker(this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let selected = this.contact.form.value(ContactField::Subject);
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let muted = cx.theme().muted;
    let fg = cx.theme().foreground;

    let mut chips = h_flex().flex_wrap().gap(px(8.0));
    for (ix, subject) in CONTACT_SUBJECTS.iter().enumerate() {
        let text = subject.get(locale);
        let active = selected == text;
        chips = chips.child(
            div()
                .id(("contact-subject", ix))
                .px(px(12.0))
                .py(px(6.0))
                .rounded(px(14.0))
                .cursor_pointer()
                .text_sm()
                .bg(if active { primary } else { muted })
                .text_color(if active { primary_fg } else { fg })
                .on_click(cx.listener(move |this, _, _, cx| this.select_subject(text, cx)))
                .child(text),
        );
    }
    chips
}

fn render_thank_you(this: &Photocraft, cx: &App) -> Div {
    let locale = this.page.locale;
    let success = cx.theme().success;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    v_flex()
        .w_full()
        .py(px(48.0))
        .items_center()
        .gap(px(12.0))
        .child(div().text_3xl().text_color(success).child("✓"))
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child(Phrase::ThankYouTitle.get(locale)),
        )
        .child(
            div()
                .text_color(muted_fg)
                .text_center()
                .child(Phrase::ThankYouBody.get(locale)),
        )
}

fn render_form(this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let fg = cx.theme().foreground;
    let card_bg = cx.theme().background;
    let border = cx.theme().border;

    let heading = div()
        .text_xl()
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(fg)
        .child(Phrase::SendMessageHeading.get(locale));

    let card = v_flex()
        .flex_1()
        .min_w(px(320.0))
        .p(px(28.0))
        .gap(px(18.0))
        .rounded(px(8.0))
        .bg(card_bg)
        .border_1()
        .border_color(border)
        .shadow_md()
        .child(heading);

    if this.contact.form.is_submitted() {
        return card.child(render_thank_you(this, cx));
    }

    let inputs = &this.contact.inputs;
    let submitting = this.contact.form.is_submitting();
    let button_label = if submitting {
        Phrase::SendingButton.get(locale)
    } else {
        Phrase::SendButton.get(locale)
    };

    card.child(
        h_flex()
            .w_full()
            .gap(px(16.0))
            .child(render_field(ContactField::Name, Input::new(&inputs.name), this, cx))
            .child(render_field(ContactField::Email, Input::new(&inputs.email), this, cx)),
    )
    .child(
        h_flex()
            .w_full()
            .gap(px(16.0))
            .child(render_field(ContactField::Phone, Input::new(&inputs.phone), this, cx))
            .child(render_field(
                ContactField::Subject,
                render_subject_picker(this, cx),
                this,
                cx,
            )),
    )
    .child(render_field(
        ContactField::Message,
        Input::new(&inputs.message),
        this,
        cx,
    ))
    .child(
        primary_button("contact-submit", button_label, cx)
            .w_full()
            .flex()
            .justify_center()
            .when(submitting, |d| d.opacity(0.6).cursor_default())
            .on_click(cx.listener(|this, _, _, cx| this.submit_contact(cx))),
    )
}

pub fn render_contact(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let locale = this.page.locale;
    let bg = cx.theme().secondary.opacity(0.4);

    section("contact", bg).child(
        content_column()
            .child(section_heading(
                Phrase::ContactHeading.get(locale),
                Some(Phrase::ContactSubheading.get(locale)),
                cx,
            ))
            .child(
                h_flex()
                    .w_full()
                    .flex_wrap()
                    .items_start()
                    .gap(px(48.0))
                    .child(render_info(this, cx))
                    .child(render_form(this, cx)),
            ),
    )
}
