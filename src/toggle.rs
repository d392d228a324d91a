/// Edge-triggered visibility toggle, evaluated once per tick on the tick
/// thread only.
///
/// `previous_down` starts out pressed so that a toggle key already held
/// when the overlay comes up does not flip it on the very first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub visible: bool,
    pub previous_down: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            visible: false,
            previous_down: true,
        }
    }
}

impl ToggleState {
    /// Feed the current key state. Visibility flips only on the
    /// released-to-pressed transition; holding the key does nothing further.
    pub fn tick(&mut self, key_down: bool) -> bool {
        if key_down && !self.previous_down {
            self.visible = !self.visible;
            tracing::debug!(visible = self.visible, "overlay visibility toggled");
        }
        self.previous_down = key_down;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::ToggleState;

    fn released() -> ToggleState {
        ToggleState {
            visible: false,
            previous_down: false,
        }
    }

    #[test]
    fn holding_the_key_toggles_exactly_once() {
        let mut toggle = released();
        assert!(toggle.tick(true));
        assert!(toggle.tick(true));
        assert!(toggle.tick(true));
    }

    #[test]
    fn press_release_press_toggles_twice() {
        let mut toggle = released();
        assert!(toggle.tick(true));
        assert!(toggle.tick(false));
        assert!(!toggle.tick(true));
    }

    #[test]
    fn release_alone_never_toggles() {
        let mut toggle = released();
        assert!(!toggle.tick(false));
        assert!(!toggle.tick(false));
    }

    #[test]
    fn key_held_at_startup_is_ignored_until_released() {
        let mut toggle = ToggleState::default();
        assert!(!toggle.tick(true));
        assert!(!toggle.tick(true));
        assert!(!toggle.tick(false));
        assert!(toggle.tick(true));
    }
}
