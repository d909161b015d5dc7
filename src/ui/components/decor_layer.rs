//! Floating tools background canvas

use iced::advanced::svg::Svg;
use iced::widget::{canvas, svg};
use iced::{Degrees, Element, Fill, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};
use once_cell::sync::Lazy;

use crate::app::Message;
use crate::features::DecorLayer;
use crate::features::decor::ToolGlyph;
use crate::ui::{icons, theme};

/// Parsed once; every frame draws from these handles
static TOOL_HANDLES: Lazy<Vec<(ToolGlyph, svg::Handle)>> = Lazy::new(|| {
    ToolGlyph::ALL
        .iter()
        .map(|glyph| (*glyph, svg::Handle::from_memory(icons::tool(*glyph).as_bytes())))
        .collect()
});

fn handle_for(glyph: ToolGlyph) -> Option<&'static svg::Handle> {
    TOOL_HANDLES
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|(_, handle)| handle)
}

struct FloatingTools<'a> {
    layer: &'a DecorLayer,
}

impl canvas::Program<Message> for FloatingTools<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let viewport = bounds.size();
        let base_tint = theme::decor_tint(theme);

        for (icon, transform) in self.layer.icons().iter().zip(self.layer.transforms()) {
            let Some(handle) = handle_for(icon.glyph) else {
                continue;
            };
            let origin = icon.origin(viewport);
            let rect = Rectangle::new(
                Point::new(origin.x + transform.translate.x, origin.y + transform.translate.y),
                Size::new(icon.size, icon.size),
            );
            let color = if icon.highlighted {
                theme::DECOR_HIGHLIGHT
            } else {
                base_tint
            };

            frame.draw_svg(
                rect,
                Svg::new(handle.clone())
                    .color(color)
                    .rotation(Radians::from(Degrees(transform.rotation_deg)))
                    .opacity(icon.base_opacity),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Full-window layer behind the page content
pub fn view(layer: &DecorLayer) -> Element<'_, Message> {
    canvas(FloatingTools { layer }).width(Fill).height(Fill).into()
}
