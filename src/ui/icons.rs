//! Inline SVG icons
//!
//! All icons are 24x24 stroke drawings in `currentColor` so the svg style
//! color (or the canvas tint) decides how they render.

use crate::features::decor::ToolGlyph;

pub const HAMMER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M14 3l3 3-3 3-3-3 3-3Z" stroke="currentColor" stroke-width="1.6"/>
<path d="M11 7l-7 7 3 3 7-7" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/>
<path d="M6 17l-2 2" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/>
</svg>"#;

pub const SAW: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M4 14c4-7 10-9 16-10-2 7-5 13-12 16-2 1-4 0-4-2 0-1 .2-2 .8-4Z" stroke="currentColor" stroke-width="1.6" stroke-linejoin="round"/>
<path d="M7 15l1 1M9 14l1 1M11 13l1 1M13 12l1 1" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/>
</svg>"#;

pub const RULER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M4 8l12-4 4 12-12 4L4 8Z" stroke="currentColor" stroke-width="1.6" stroke-linejoin="round"/>
<path d="M8 9l.8 2.4M10 8.3l.6 1.8M12 7.6l.8 2.4M14 6.9l.6 1.8" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/>
</svg>"#;

pub const DRILL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M6 10h9a3 3 0 0 1 3 3v1H6v-4Z" stroke="currentColor" stroke-width="1.6" stroke-linejoin="round"/>
<path d="M6 14v4h4v-4" stroke="currentColor" stroke-width="1.6" stroke-linejoin="round"/>
<path d="M15 10V8h2V6h-4v2" stroke="currentColor" stroke-width="1.6" stroke-linejoin="round"/>
<path d="M18 12h2" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/>
</svg>"#;

pub const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M5 5h14v4H9v10H5V5Z" stroke="currentColor" stroke-width="1.6" stroke-linejoin="round"/>
<path d="M9 9h6" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/>
</svg>"#;

pub const CHEVRON_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M15 6l-6 6 6 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

pub const CHEVRON_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M9 6l6 6-6 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

pub const ARROW_UP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M12 19V5M6 11l6-6 6 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

pub const MENU: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M4 7h16M4 12h16M4 17h16" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
</svg>"#;

pub const CLOSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M6 6l12 12M18 6L6 18" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
</svg>"#;

pub const CHAT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none">
<path d="M4 19l1.4-4A8 8 0 1 1 9 18.6L4 19Z" stroke="currentColor" stroke-width="1.8" stroke-linejoin="round"/>
</svg>"#;

/// SVG source for a floating tool
pub fn tool(glyph: ToolGlyph) -> &'static str {
    match glyph {
        ToolGlyph::Hammer => HAMMER,
        ToolGlyph::Saw => SAW,
        ToolGlyph::Ruler => RULER,
        ToolGlyph::Drill => DRILL,
        ToolGlyph::Square => SQUARE,
    }
}
