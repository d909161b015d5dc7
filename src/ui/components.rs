//! UI Components module - page-specific composite components
//!
//! Components map user input to `crate::app::Message` and read the feature
//! state they render. Pages compose them.

pub mod carousel;
pub mod decor_layer;
pub mod floating;
pub mod header;
pub mod reveal;
