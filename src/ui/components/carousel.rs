//! Project carousel component
//!
//! The slide track is drawn on a canvas at the offset the carousel state
//! reports for this frame. Pressing on the slides starts a drag; moves and
//! releases come from the window-wide pointer stream.

use std::path::PathBuf;

use iced::time::Instant;
use iced::widget::{Space, button, canvas, column, container, row, stack, svg, text};
use iced::{
    Alignment, Color, Element, Fill, Length, Padding, Point, Rectangle, Renderer, Size, Theme,
    mouse, touch,
};

use crate::app::{CarouselMessage, Message, MountedCarousel};
use crate::content::CarouselId;
use crate::features::{PointerId, SlideItem};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_SPACING: f32 = 8.0;
const CAPTION_HEIGHT: f32 = 72.0;

struct SlideTrack<'a> {
    id: CarouselId,
    slides: &'a [SlideItem],
    images: &'a [Option<PathBuf>],
    offset: f32,
    missing_label: &'static str,
}

impl SlideTrack<'_> {
    fn draw_slide(
        &self,
        frame: &mut canvas::Frame,
        theme: &Theme,
        index: usize,
        x: f32,
        size: Size,
    ) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };

        match self.images.get(index).and_then(Option::as_ref) {
            Some(path) => {
                frame.draw_image(
                    Rectangle::new(Point::new(x, 0.0), size),
                    canvas::Image::new(path),
                );
            }
            None => {
                frame.fill_rectangle(Point::new(x, 0.0), size, theme::surface(theme));
                frame.fill_text(canvas::Text {
                    content: self.missing_label.to_string(),
                    position: Point::new(x + 24.0, size.height / 2.0 - 10.0),
                    color: theme::text_muted(theme),
                    size: 16.0.into(),
                    ..canvas::Text::default()
                });
            }
        }

        // Caption band
        let band_top = size.height - CAPTION_HEIGHT;
        frame.fill_rectangle(
            Point::new(x, band_top),
            Size::new(size.width, CAPTION_HEIGHT),
            Color::from_rgba(0.0, 0.0, 0.0, 0.45),
        );
        frame.fill_text(canvas::Text {
            content: slide.caption.clone(),
            position: Point::new(x + 24.0, band_top + 16.0),
            color: Color::WHITE,
            size: 18.0.into(),
            font: iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            },
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{}/{}", index + 1, self.slides.len()),
            position: Point::new(x + 24.0, band_top + 42.0),
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.75),
            size: 13.0.into(),
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for SlideTrack<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let (x, pointer) = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                (cursor.position_over(bounds)?.x, PointerId::Mouse)
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position })
                if bounds.contains(*position) =>
            {
                (position.x, PointerId::Finger(id.0))
            }
            _ => return None,
        };
        let message = Message::Carousel(self.id, CarouselMessage::PointerDown(x, pointer));
        Some(canvas::Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();

        for index in 0..self.slides.len() {
            let x = index as f32 * size.width + self.offset;
            // Only slides intersecting the viewport
            if x + size.width <= 0.0 || x >= size.width {
                continue;
            }
            self.draw_slide(&mut frame, theme, index, x, size);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn nav_button<'a>(icon: &'static str, message: Message) -> Element<'a, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(24)
            .height(24)
            .style(|_theme, _status| svg::Style {
                color: Some(Color::WHITE),
            }),
    )
    .padding(12)
    .style(theme::carousel_nav_button)
    .on_press(message)
    .into()
}

/// Build one carousel block: label, slides with arrows, indicator dots
pub fn view<'a>(
    carousel: &'a MountedCarousel,
    locale: Locale,
    width: f32,
    height: f32,
    now: Instant,
) -> Element<'a, Message> {
    let id = carousel.id;
    let state = &carousel.state;

    let track: Element<'a, Message> = canvas(SlideTrack {
        id,
        slides: state.items(),
        images: &carousel.images,
        offset: state.offset_at(now),
        missing_label: locale.get(Key::ImageMissing),
    })
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .into();

    let arrows = row![
        container(nav_button(
            icons::CHEVRON_LEFT,
            Message::Carousel(id, CarouselMessage::Previous)
        ))
        .height(Fill)
        .align_y(Alignment::Center)
        .padding(8),
        Space::new().width(Fill),
        container(nav_button(
            icons::CHEVRON_RIGHT,
            Message::Carousel(id, CarouselMessage::Next)
        ))
        .height(Fill)
        .align_y(Alignment::Center)
        .padding(8),
    ]
    .width(Length::Fixed(width))
    .height(Length::Fixed(height));

    let slides = container(stack![track, arrows])
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .clip(true)
        .style(theme::carousel_frame);

    let indicators = row(state
        .indicators()
        .into_iter()
        .enumerate()
        .map(|(i, active)| {
            button(
                container(Space::new().width(INDICATOR_SIZE).height(INDICATOR_SIZE))
                    .style(move |theme| theme::indicator(theme, active)),
            )
            .padding(4)
            .style(theme::bare_button)
            .on_press(Message::Carousel(id, CarouselMessage::GoTo(i)))
            .into()
        })
        .collect::<Vec<_>>())
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center);

    let label = text(locale.get(id.label()))
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    column![
        label,
        slides,
        container(indicators).center_x(Length::Fixed(width)),
    ]
    .spacing(12)
    .padding(Padding::new(0.0).bottom(16.0))
    .width(Length::Fixed(width))
    .into()
}
