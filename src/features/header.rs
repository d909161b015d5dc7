//! Sticky header: "scrolled" styling and hide-on-scroll-down

/// Past this offset the header gets its solid style
pub const SCROLLED_AFTER: f32 = 10.0;
/// Within this offset the header is always shown
pub const NEAR_TOP: f32 = 120.0;
/// Minimum downward step that hides the header
pub const HIDE_STEP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    last_y: f32,
    scrolled: bool,
    hidden: bool,
}

impl HeaderState {
    pub fn new(initial_y: f32) -> Self {
        let mut state = Self {
            last_y: initial_y,
            ..Self::default()
        };
        state.update(initial_y);
        state
    }

    /// Apply a new scroll offset
    pub fn update(&mut self, y: f32) {
        self.scrolled = y > SCROLLED_AFTER;

        let going_down = y > self.last_y;
        let near_top = y < NEAR_TOP;

        if !near_top && going_down && y - self.last_y > HIDE_STEP {
            self.hidden = true;
        }
        if !going_down || near_top {
            self.hidden = false;
        }

        self.last_y = y;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
