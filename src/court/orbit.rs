use winit::keyboard::Key;

/// Whether the orbit camera accepts mouse input.
///
/// Two states, flipped by the "O" key. The flag is read once per frame and
/// pushed into the [`crate::camera::OrbitController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitToggle {
    enabled: bool,
}

impl OrbitToggle {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// "o" or "O"; modifiers are ignored, so Shift+O and Ctrl+O count too.
    pub fn is_toggle_key(key: &Key) -> bool {
        matches!(key, Key::Character(c) if c.eq_ignore_ascii_case("o"))
    }

    /// Toggles on the orbit key. Returns whether the key was consumed.
    ///
    /// Every pressed event counts, including auto-repeat.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        if !Self::is_toggle_key(key) {
            return false;
        }
        self.toggle();
        true
    }

    pub fn label(&self) -> &'static str {
        if self.enabled { "ON" } else { "OFF" }
    }
}

impl Default for OrbitToggle {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{NamedKey, SmolStr};

    #[test]
    fn named_keys_are_ignored() {
        let mut toggle = OrbitToggle::default();
        assert!(!toggle.handle_key(&Key::Named(NamedKey::Escape)));
        assert!(!toggle.handle_key(&Key::Character(SmolStr::new("oo"))));
        assert!(toggle.is_enabled());
    }

    #[test]
    fn label_follows_state() {
        let mut toggle = OrbitToggle::default();
        assert_eq!(toggle.label(), "ON");
        toggle.toggle();
        assert_eq!(toggle.label(), "OFF");
    }
}
