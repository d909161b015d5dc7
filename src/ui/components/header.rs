//! Sticky header and the mobile navigation menu

use iced::widget::{Space, button, column, container, mouse_area, opaque, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::Section;
use crate::features::layout::HEADER_HEIGHT;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const MENU_WIDTH: f32 = 260.0;

/// Label key of a navigation link
pub fn nav_label(section: Section) -> Key {
    match section {
        Section::Home => Key::NavHome,
        Section::About => Key::NavAbout,
        Section::Services => Key::NavServices,
        Section::Projects => Key::NavProjects,
        Section::Process => Key::NavProcess,
        Section::Contact => Key::NavContact,
    }
}

fn nav_link<'a>(locale: Locale, section: Section) -> Element<'a, Message> {
    button(text(locale.get(nav_label(section))).size(15))
        .padding(Padding::new(8.0).left(10.0).right(10.0))
        .style(theme::nav_link)
        .on_press(Message::NavigateTo(section))
        .into()
}

fn quote_button<'a>(locale: Locale) -> Element<'a, Message> {
    button(text(locale.get(Key::NavQuote)).size(14))
        .padding(Padding::new(10.0).left(18.0).right(18.0))
        .style(theme::primary_button)
        .on_press(Message::NavigateTo(Section::Contact))
        .into()
}

/// Header bar: logo, desktop links or the mobile menu toggle
pub fn view<'a>(
    locale: Locale,
    mobile: bool,
    scrolled: bool,
    opacity: f32,
    menu_open: bool,
) -> Element<'a, Message> {
    let logo = button(
        column![
            text(locale.get(Key::AppName)).size(20).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
            text(locale.get(Key::AppTagline))
                .size(11)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        ]
        .spacing(2),
    )
    .padding(0)
    .style(theme::bare_button)
    .on_press(Message::ScrollHome);

    let trailing: Element<'a, Message> = if mobile {
        let (icon, label) = if menu_open {
            (icons::CLOSE, Key::MenuClose)
        } else {
            (icons::MENU, Key::MenuOpen)
        };
        iced::widget::tooltip(
            button(
                svg(svg::Handle::from_memory(icon.as_bytes()))
                    .width(22)
                    .height(22)
                    .style(|theme, _status| svg::Style {
                        color: Some(theme::text_primary(theme)),
                    }),
            )
            .padding(10)
            .style(theme::icon_button)
            .on_press(Message::ToggleMenu),
            text(locale.get(label)).size(12),
            iced::widget::tooltip::Position::Bottom,
        )
        .into()
    } else {
        let mut links = row![].spacing(4).align_y(Alignment::Center);
        for section in Section::ALL.into_iter().skip(1) {
            links = links.push(nav_link(locale, section));
        }
        row![links, Space::new().width(12), quote_button(locale)]
            .align_y(Alignment::Center)
            .into()
    };

    let bar = row![logo, Space::new().width(Fill), trailing]
        .align_y(Alignment::Center)
        .padding(Padding::new(0.0).left(24.0).right(24.0));

    container(bar)
        .width(Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(Alignment::Center)
        .style(move |theme| theme::header(theme, scrolled, opacity))
        .into()
}

/// Open mobile menu: a backdrop that closes it and the link panel
pub fn menu_overlay<'a>(locale: Locale) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new().width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.35).into()),
                ..Default::default()
            }),
    )
    .on_press(Message::MenuBackdropPressed);

    let mut links = column![].spacing(4);
    for section in Section::ALL.into_iter().skip(1) {
        links = links.push(nav_link(locale, section));
    }
    let panel = container(
        column![links, quote_button(locale)]
            .spacing(12)
            .padding(16),
    )
    .width(Length::Fixed(MENU_WIDTH))
    .style(theme::menu_panel);

    let positioned = container(opaque(panel))
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::End)
        .padding(Padding::new(0.0).top(HEADER_HEIGHT).right(16.0));

    iced::widget::stack![backdrop, positioned].into()
}
