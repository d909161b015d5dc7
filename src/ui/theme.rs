//! Theme system for the showcase
//! Warm wood palette in dark and light variants

use iced::color;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x14100d);
    pub const SURFACE: Color = color!(0x1f1914);
    pub const SURFACE_RAISED: Color = color!(0x2a221b);
    pub const BORDER: Color = color!(0x3a2f25);
    pub const TEXT_MUTED: Color = color!(0x8f8072);
    pub const TEXT_SECONDARY: Color = color!(0xc4b5a5);
    pub const TEXT_PRIMARY: Color = color!(0xf6efe6);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfaf6f0);
    pub const SURFACE: Color = color!(0xf1e9de);
    pub const SURFACE_RAISED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe0d3c2);
    pub const TEXT_MUTED: Color = color!(0x8a7a6a);
    pub const TEXT_SECONDARY: Color = color!(0x5c4d3f);
    pub const TEXT_PRIMARY: Color = color!(0x241a12);
}

/// Walnut accent (same for both modes)
pub const ACCENT: Color = color!(0xc7864b);
pub const ACCENT_HOVER: Color = color!(0xd99a5f);

/// WhatsApp green for contact calls to action
pub const CONTACT_GREEN: Color = color!(0x25d366);
pub const CONTACT_GREEN_HOVER: Color = color!(0x3ee07a);

/// Tint of a highlighted floating tool
pub const DECOR_HIGHLIGHT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.78);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn surface_raised(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_RAISED
    } else {
        light::SURFACE_RAISED
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Base color of a non-highlighted floating tool
pub fn decor_tint(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color { a: 0.55, ..ACCENT }
    } else {
        Color { a: 0.35, ..ACCENT }
    }
}

/// Same color with its alpha scaled by `factor`
pub fn fade(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Sticky header; `solid` once the page has scrolled
pub fn header(theme: &Theme, solid: bool, opacity: f32) -> container::Style {
    let bg = if solid {
        fade(surface(theme), 0.96 * opacity)
    } else {
        Color::TRANSPARENT
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(fade(text_primary(theme), opacity)),
        border: Border {
            width: if solid { 1.0 } else { 0.0 },
            color: fade(border_color(theme), opacity),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Mobile menu panel
pub fn menu_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_raised(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Card revealed on scroll; `progress` drives opacity
pub fn card(theme: &Theme, progress: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(surface(theme), progress))),
        text_color: Some(fade(text_primary(theme), progress)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: fade(border_color(theme), progress),
        },
        ..Default::default()
    }
}

/// Slide frame for a carousel
pub fn carousel_frame(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating mini call-to-action
pub fn floating_card(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(surface_raised(theme), opacity))),
        text_color: Some(fade(text_primary(theme), opacity)),
        border: Border {
            radius: 14.0.into(),
            width: 1.0,
            color: fade(border_color(theme), opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4 * opacity),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

pub fn indicator(theme: &Theme, active: bool) -> container::Style {
    container::Style {
        background: Some(Background::Color(if active {
            ACCENT
        } else {
            border_color(theme)
        })),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary call-to-action
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Contact (WhatsApp) call-to-action
pub fn contact_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(CONTACT_GREEN)),
        text_color: color!(0x0b2614),
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(CONTACT_GREEN_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Outlined secondary action
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            border: Border {
                color: ACCENT,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Text-only navigation link
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT,
        _ => text_secondary(theme),
    };
    button::Style {
        background: None,
        text_color: color,
        ..Default::default()
    }
}

/// Round icon button (menu toggle, close, back to top)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(surface_raised(theme))),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(surface(theme))),
            ..base
        },
        _ => base,
    }
}

/// Carousel prev/next arrows over the slide
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        _ => base,
    }
}

/// Indicator dots are buttons without chrome
pub fn bare_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar of the page column
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
