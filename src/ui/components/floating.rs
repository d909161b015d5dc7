//! Floating controls in the bottom-right corner: back to top and the
//! mini call-to-action

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::animation::Fade;
use crate::ui::{icons, theme};

fn back_to_top<'a>(locale: Locale, interactive: bool) -> Element<'a, Message> {
    iced::widget::tooltip(
        button(
            svg(svg::Handle::from_memory(icons::ARROW_UP.as_bytes()))
                .width(20)
                .height(20)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        )
        .padding(12)
        .style(theme::icon_button)
        .on_press_maybe(interactive.then_some(Message::BackToTop)),
        text(locale.get(Key::BackToTop)).size(12),
        iced::widget::tooltip::Position::Left,
    )
    .into()
}

fn mini_cta<'a>(locale: Locale, opacity: f32, interactive: bool) -> Element<'a, Message> {
    let close = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(14)
            .height(14)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_muted(theme)),
            }),
    )
    .padding(6)
    .style(theme::bare_button)
    .on_press_maybe(interactive.then_some(Message::DismissMiniCta));

    let action = button(
        row![
            svg(svg::Handle::from_memory(icons::CHAT.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::color!(0x0b2614)),
                }),
            text(locale.get(Key::MiniCtaAction)).size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(8.0).left(16.0).right(16.0))
    .style(theme::contact_button)
    .on_press_maybe(interactive.then_some(Message::Track("whatsapp_mini_cta")));

    container(
        column![
            row![
                text(locale.get(Key::MiniCtaText)).size(14),
                Space::new().width(Fill),
                close
            ]
            .align_y(Alignment::Center),
            action,
        ]
        .spacing(10),
    )
    .width(280)
    .padding(16)
    .style(move |theme| theme::floating_card(theme, opacity))
    .into()
}

/// Bottom-right stack; hidden controls are not rendered and fading-out
/// ones no longer take presses
pub fn view<'a>(
    locale: Locale,
    back_to_top_fade: Option<&Fade>,
    mini_cta_fade: Option<&Fade>,
) -> Element<'a, Message> {
    let mut controls = column![].spacing(12).align_x(Alignment::End);

    if let Some(fade) = mini_cta_fade.filter(|f| f.is_visible()) {
        controls = controls.push(mini_cta(locale, fade.progress(), fade.is_shown()));
    }
    if let Some(fade) = back_to_top_fade.filter(|f| f.is_visible()) {
        controls = controls.push(back_to_top(locale, fade.is_shown()));
    }

    container(controls)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(24)
        .into()
}
