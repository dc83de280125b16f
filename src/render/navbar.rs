//! Navigation bar rendering - brand, section links, locale toggle, mobile menu

use crate::app::Photocraft;
use crate::constants::NAVBAR_HEIGHT;
use crate::content::{BRAND, Phrase};
use crate::navigation::Section;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

fn render_nav_link(section: Section, label: &'static str, fg: Hsla, hover: Hsla, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    div()
        .id(ElementId::Name(format!("nav-{}", section.anchor()).into()))
        .px(px(10.0))
        .py(px(6.0))
        .cursor_pointer()
        .text_sm()
        .text_color(fg)
        .hover(move |s| s.text_color(hover))
        .on_click(cx.listener(move |this, _, _, cx| {
            this.navigate_to(section, cx);
        }))
        .child(label)
}

pub fn render_navbar(this: &mut Photocraft, narrow: bool, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let scrolled = this.page.nav.is_scrolled();
    let menu_open = this.page.nav.is_menu_open();

    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = if scrolled { cx.theme().foreground } else { white() };
    let accent = cx.theme().primary;

    let locale_toggle = div()
        .id("nav-locale")
        .px(px(10.0))
        .py(px(4.0))
        .rounded(px(4.0))
        .border_1()
        .border_color(fg.opacity(0.5))
        .cursor_pointer()
        .text_xs()
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(fg)
        .on_click(cx.listener(|this, _, _, cx| this.toggle_locale(cx)))
        .child(Phrase::LanguageToggle.get(locale));

    let mut bar = h_flex()
        .w_full()
        .h(px(NAVBAR_HEIGHT))
        .px(px(24.0))
        .items_center()
        .justify_between()
        .when(scrolled, |d| d.bg(bg).border_b_1().border_color(border).shadow_sm())
        .child(
            div()
                .id("nav-brand")
                .cursor_pointer()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(fg)
                .on_click(cx.listener(|this, _, _, cx| this.navigate_to(Section::Home, cx)))
                .child(BRAND.get(locale)),
        );

    if narrow {
        bar = bar.child(
            h_flex()
                .gap(px(12.0))
                .items_center()
                .child(locale_toggle)
                .child(
                    div()
                        .id("nav-menu-toggle")
                        .px(px(8.0))
                        .cursor_pointer()
                        .text_xl()
                        .text_color(fg)
                        .on_click(cx.listener(|this, _, _, cx| this.toggle_menu(cx)))
                        .child(if menu_open { "✕" } else { "☰" }),
                ),
        );
    } else {
        let mut links = h_flex().gap(px(4.0)).items_center();
        for section in Section::ALL {
            links = links.child(render_nav_link(section, section.label().get(locale), fg, accent, cx));
        }
        bar = bar.child(links.child(div().w(px(12.0))).child(locale_toggle));
    }

    let menu = (narrow && menu_open).then(|| {
        let menu_fg = cx.theme().foreground;
        let mut menu = v_flex()
            .w_full()
            .py(px(8.0))
            .bg(bg)
            .border_b_1()
            .border_color(border)
            .shadow_md();
        for section in Section::ALL {
            menu = menu.child(
                render_nav_link(section, section.label().get(locale), menu_fg, accent, cx).px(px(24.0)).py(px(10.0)),
            );
        }
        menu
    });

    div()
        .absolute()
        .top_0()
        .left_0()
        .w_full()
        .child(bar)
        .children(menu)
}
