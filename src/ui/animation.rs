//! UI animations built on `iced_anim`
//!
//! Track and scroll motion uses the cubic-bezier tweens in
//! `features::tween`; this module only covers opacity fades.

mod fade;

pub use fade::Fade;
