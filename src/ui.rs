//! UI module for the showcase
//! Warm wood palette in dark and light variants
//!
//! # Architecture
//!
//! - **Animation** (`animation`): Opacity fades driven by frame ticks
//! - **Components** (`components`): Page parts with Message handling
//! - **Pages** (`pages`): The landing page composed from components

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
