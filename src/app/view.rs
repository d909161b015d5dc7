// src/app/view.rs
//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, container, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages, theme};

impl App {
    /// Build the view for a specific window
    ///
    /// Layers, back to front: background, floating tools, the page, the
    /// header, the open menu and the floating controls.
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = Instant::now();
        let locale = self.core.locale;
        let ui = &self.ui;

        let background = container(Space::new().width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        let mut layers = stack![background].width(Fill).height(Fill);

        if let Some(decor) = &ui.decor {
            layers = layers.push(components::decor_layer::view(decor));
        }

        layers = layers.push(pages::landing::view(ui, locale, now));

        // Fully hidden header is not rendered so it cannot take clicks
        let header_opacity = ui.header_fade.progress();
        if header_opacity > 0.01 {
            layers = layers.push(components::header::view(
                locale,
                ui.layout.is_mobile(),
                ui.header.is_scrolled(),
                header_opacity,
                ui.menu.is_open(),
            ));
        }

        if ui.menu.is_open() && ui.layout.is_mobile() {
            layers = layers.push(components::header::menu_overlay(locale));
        }

        let mini_cta_fade = ui.mini_cta.is_some().then_some(&ui.mini_cta_fade);
        layers = layers.push(components::floating::view(
            locale,
            ui.back_to_top.as_ref(),
            mini_cta_fade,
        ));

        layers.into()
    }
}
