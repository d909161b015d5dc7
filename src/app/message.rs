// src/app/message.rs
//! Application message definitions

use iced::time::Instant;
use iced::{Point, Size};

use crate::content::CarouselId;
use crate::features::{PointerId, Section};

/// Carousel input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    Previous,
    Next,
    /// Indicator pressed
    GoTo(usize),
    /// Mouse button or finger pressed on the slides (window x)
    PointerDown(f32, PointerId),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Carousels
    Carousel(CarouselId, CarouselMessage),

    // Navigation
    /// Anchor link pressed (menu, hero and footer links)
    NavigateTo(Section),
    /// Logo pressed
    ScrollHome,
    BackToTop,
    ToggleMenu,
    /// Click on the backdrop behind the open mobile menu
    MenuBackdropPressed,

    // Scrolling and frames
    PageScrolled(f32),
    AnimationTick(Instant),

    // Window-wide pointer stream
    PointerMoved(Point, PointerId),
    PointerReleased(PointerId),

    // Window
    WindowResized(Size),
    RequestClose,

    // Tracking and floating controls
    /// Tracked call-to-action pressed, carrying its action name
    Track(&'static str),
    DismissMiniCta,
}
