//! Landing page - the single scrolling column
//!
//! Section heights come from `PageLayout`, so the offsets used for anchor
//! scrolling and reveal checks match what is drawn.

use iced::time::Instant;
use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::{Message, PAGE_SCROLL_ID, UiState};
use crate::content::CarouselId;
use crate::features::layout::{FOOTER_HEIGHT, HEADER_HEIGHT, RevealTarget};
use crate::features::{PageLayout, Section};
use crate::i18n::{Key, Locale};
use crate::ui::components::{carousel, reveal};
use crate::ui::theme;

const SERVICES: [(Key, Key); 3] = [
    (Key::ServiceKitchensTitle, Key::ServiceKitchensBody),
    (Key::ServiceClosetsTitle, Key::ServiceClosetsBody),
    (Key::ServiceCommercialTitle, Key::ServiceCommercialBody),
];

const PROCESS: [(Key, Key); 4] = [
    (Key::ProcessBriefingTitle, Key::ProcessBriefingBody),
    (Key::ProcessDesignTitle, Key::ProcessDesignBody),
    (Key::ProcessBuildTitle, Key::ProcessBuildBody),
    (Key::ProcessInstallTitle, Key::ProcessInstallBody),
];

fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }
}

fn heading<'a>(label: &'static str, size: f32) -> Element<'a, Message> {
    text(label).size(size).font(bold()).into()
}

fn body<'a>(label: &'static str) -> Element<'a, Message> {
    text(label)
        .size(16)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

/// Fixed-height band with the content column centered in it
fn section<'a>(
    layout: &PageLayout,
    which: Section,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        container(content)
            .width(Length::Fixed(layout.content_width()))
            .height(Fill),
    )
    .center_x(Fill)
    .height(Length::Fixed(layout.section_height(which)))
    .clip(true)
    .into()
}

fn hero<'a>(layout: &PageLayout, locale: Locale) -> Element<'a, Message> {
    let ctas = row![
        button(text(locale.get(Key::HeroCta)).size(16))
            .padding(Padding::new(14.0).left(24.0).right(24.0))
            .style(theme::contact_button)
            .on_press(Message::Track("whatsapp_hero")),
        button(text(locale.get(Key::HeroSecondaryCta)).size(16))
            .padding(Padding::new(14.0).left(24.0).right(24.0))
            .style(theme::secondary_button)
            .on_press(Message::NavigateTo(Section::Projects)),
    ]
    .spacing(12);

    let size = if layout.is_mobile() { 34.0 } else { 52.0 };
    let content = column![
        text(locale.get(Key::HeroEyebrow))
            .size(14)
            .style(|_theme| text::Style {
                color: Some(theme::ACCENT),
            }),
        heading(locale.get(Key::HeroTitle), size),
        body(locale.get(Key::HeroSubtitle)),
        Space::new().height(8),
        ctas,
    ]
    .spacing(16)
    .max_width(720);

    section(
        layout,
        Section::Home,
        container(content)
            .height(Fill)
            .align_y(Alignment::Center)
            .padding(Padding::ZERO.top(HEADER_HEIGHT)),
    )
}

/// Cards laid out in a row on desktop, stacked on mobile
fn card_group<'a>(
    layout: &PageLayout,
    cards: impl Iterator<Item = Element<'a, Message>>,
) -> Element<'a, Message> {
    if layout.is_mobile() {
        Column::with_children(cards).spacing(0).into()
    } else {
        row(cards.map(|card| container(card).width(Fill).into()))
            .spacing(20)
            .into()
    }
}

fn card_content<'a>(locale: Locale, title: Key, text_key: Key) -> Element<'a, Message> {
    column![heading(locale.get(title), 20.0), body(locale.get(text_key))]
        .spacing(10)
        .into()
}

/// Build the landing page
pub fn view<'a>(ui: &'a UiState, locale: Locale, now: Instant) -> Element<'a, Message> {
    let layout = &ui.layout;
    // Without the tracker everything is shown as revealed
    let progress = |target: RevealTarget| {
        ui.reveal
            .as_ref()
            .map_or(1.0, |tracker| tracker.progress(target, now))
    };

    let about = section(
        layout,
        Section::About,
        container(reveal::block(
            column![
                heading(locale.get(Key::AboutTitle), 32.0),
                text(locale.get(Key::AboutBody)).size(17),
            ]
            .spacing(16)
            .max_width(760),
            progress(RevealTarget::AboutText),
        ))
        .padding(Padding::ZERO.top(80.0)),
    );

    let services = section(
        layout,
        Section::Services,
        column![
            heading(locale.get(Key::ServicesTitle), 32.0),
            card_group(
                layout,
                SERVICES.iter().zip(0u8..).map(|((title, text_key), i)| {
                    reveal::card(
                        card_content(locale, *title, *text_key),
                        progress(RevealTarget::ServiceCard(i)),
                    )
                }),
            ),
        ]
        .spacing(40)
        .padding(Padding::ZERO.top(60.0)),
    );

    let mut projects_column = column![reveal::block(
        column![
            heading(locale.get(Key::ProjectsTitle), 32.0),
            body(locale.get(Key::ProjectsSubtitle)),
        ]
        .spacing(8),
        progress(RevealTarget::ProjectsIntro),
    )]
    .spacing(24)
    .padding(Padding::ZERO.top(40.0));
    for id in CarouselId::ALL {
        if let Some(mounted) = ui.carousel(id) {
            projects_column = projects_column.push(carousel::view(
                mounted,
                locale,
                layout.content_width(),
                layout.carousel_height(),
                now,
            ));
        }
    }
    let projects = section(layout, Section::Projects, projects_column);

    let process = section(
        layout,
        Section::Process,
        column![
            heading(locale.get(Key::ProcessTitle), 32.0),
            card_group(
                layout,
                PROCESS.iter().zip(0u8..).map(|((title, text_key), i)| {
                    reveal::card(
                        card_content(locale, *title, *text_key),
                        progress(RevealTarget::ProcessStep(i)),
                    )
                }),
            ),
        ]
        .spacing(40)
        .padding(Padding::ZERO.top(60.0)),
    );

    let contact = section(
        layout,
        Section::Contact,
        container(reveal::card(
            column![
                heading(locale.get(Key::ContactTitle), 30.0),
                body(locale.get(Key::ContactBody)),
                text(locale.get(Key::ContactAddress))
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                button(text(locale.get(Key::ContactCta)).size(16))
                    .padding(Padding::new(14.0).left(24.0).right(24.0))
                    .style(theme::contact_button)
                    .on_press(Message::Track("whatsapp_contact")),
            ]
            .spacing(14),
            progress(RevealTarget::ContactCard),
        ))
        .padding(Padding::ZERO.top(80.0)),
    );

    let footer = container(
        text(locale.get(Key::FooterNote))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    )
    .center_x(Fill)
    .center_y(Length::Fixed(FOOTER_HEIGHT));

    scrollable(
        column![hero(layout, locale), about, services, projects, process, contact, footer]
            .width(Fill),
    )
    .width(Fill)
    .height(Fill)
    .id(iced::widget::Id::new(PAGE_SCROLL_ID))
    .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
    .style(theme::page_scrollable)
    .into()
}
