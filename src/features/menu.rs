//! Mobile navigation menu

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip the menu; returns the new open state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere; close unless it was on the menu or its toggle
    ///
    /// Returns true if the click closed the menu.
    pub fn click_outside(&mut self, inside_menu_or_toggle: bool) -> bool {
        if !self.open || inside_menu_or_toggle {
            return false;
        }
        self.open = false;
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle's expanded attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menu = MenuState::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
    }

    #[test]
    fn test_click_outside() {
        let mut menu = MenuState::default();
        assert!(!menu.click_outside(false), "closed menu ignores clicks");

        menu.toggle();
        assert!(!menu.click_outside(true));
        assert!(menu.is_open());
        assert!(menu.click_outside(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
