//! Footer rendering

use crate::app::Photocraft;
use crate::content::{BRAND, Phrase, SocialNetwork};
use crate::navigation::Section;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

pub fn render_footer(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let locale = this.page.locale;
    let bg = cx.theme().foreground;
    let fg = cx.theme().background;
    let muted_fg = fg.opacity(0.6);

    let mut links = h_flex().flex_wrap().gap(px(16.0));
    for section in Section::ALL {
        links = links.child(
            div()
                .id(ElementId::Name(format!("footer-{}", section.anchor()).into()))
                .cursor_pointer()
                .text_sm()
                .text_color(muted_fg)
                .hover(move |s| s.text_color(fg))
                .on_click(cx.listener(move |this, _, _, cx| this.navigate_to(section, cx)))
                .child(section.label().get(locale)),
        );
    }

    let mut socials = h_flex().gap(px(14.0));
    for network in SocialNetwork::ALL {
        socials = socials.child(
            div()
                .id(ElementId::Name(format!("footer-social-{}", network.name()).into()))
                .cursor_pointer()
                .text_sm()
                .text_color(muted_fg)
                .hover(move |s| s.text_color(fg))
                .on_click(cx.listener(move |this, _, _, _| this.open_link(&network.url())))
                .child(network.name()),
        );
    }

    div()
        .id("footer")
        .w_full()
        .px(px(24.0))
        .py(px(48.0))
        .bg(bg)
        .child(
            v_flex()
                .w_full()
                .items_center()
                .gap(px(20.0))
                .child(
                    div()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(fg)
                        .child(BRAND.get(locale)),
                )
                .child(div().text_sm().text_color(muted_fg).child(Phrase::FooterTagline.get(locale)))
                .child(links)
                .child(socials)
                .child(
                    div()
                        .text_xs()
                        .text_color(muted_fg)
                        .child(format!("© {} {}", BRAND.get(locale), Phrase::FooterRights.get(locale))),
                ),
        )
}
