//! Reveal-on-visible wrappers
//!
//! Revealed content rises into place while fading in. The wrapper keeps a
//! constant height so the page geometry never shifts.

use iced::widget::container;
use iced::{Element, Padding};

use crate::app::Message;
use crate::ui::theme;

/// Distance the content rises while revealing
const RISE: f32 = 24.0;

fn rise_padding(progress: f32) -> Padding {
    let lift = (1.0 - progress.clamp(0.0, 1.0)) * RISE;
    Padding::ZERO.top(lift).bottom(RISE - lift)
}

/// Plain text block
pub fn block<'a>(content: impl Into<Element<'a, Message>>, progress: f32) -> Element<'a, Message> {
    container(content)
        .padding(rise_padding(progress))
        .style(move |theme| container::Style {
            text_color: Some(theme::fade(theme::text_primary(theme), progress)),
            ..Default::default()
        })
        .into()
}

/// Card with surface and border
pub fn card<'a>(content: impl Into<Element<'a, Message>>, progress: f32) -> Element<'a, Message> {
    container(
        container(content)
            .padding(24)
            .style(move |theme| theme::card(theme, progress)),
    )
    .padding(rise_padding(progress))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rise_padding_keeps_total_height() {
        for p in [0.0, 0.3, 1.0, 1.5] {
            let padding = rise_padding(p);
            assert!((padding.top + padding.bottom - RISE).abs() < 1e-4);
        }
        assert_eq!(rise_padding(1.0).top, 0.0);
        assert_eq!(rise_padding(0.0).top, RISE);
    }
}
