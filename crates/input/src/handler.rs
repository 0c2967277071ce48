//! Held-key sampling for terminal environments.
//!
//! The game applies every held key once per frame. Terminals report presses and
//! auto-repeats but often no releases, so a key also counts as released once no
//! press/repeat event arrived for `release_timeout_ms`.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{GameAction, KEY_RELEASE_TIMEOUT_MS};

/// Tracks which game keys are held, per action.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Milliseconds since the last press/repeat; `Some(0)` means an event arrived
    /// since the previous [`HeldKeys::update`].
    age_ms: [Option<u32>; 5],
    release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            age_ms: [None; 5],
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Record a press or auto-repeat
    pub fn press(&mut self, action: GameAction) {
        self.age_ms[action.index()] = Some(0);
    }

    pub fn release(&mut self, action: GameAction) {
        self.age_ms[action.index()] = None;
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.age_ms[action.index()].is_some()
    }

    /// Feed a terminal key event. Returns the game action it maps to, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(action),
            KeyEventKind::Release => self.release(action),
        }
        Some(action)
    }

    /// Forget every held key (e.g. when the game pauses).
    pub fn clear(&mut self) {
        self.age_ms = [None; 5];
    }

    /// Advance by one frame and return the actions held during it, in
    /// [`GameAction::ALL`] order.
    ///
    /// A key pressed since the last update is always reported once, even after a
    /// long frame.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 5> {
        let mut held = ArrayVec::new();

        for (slot, action) in self.age_ms.iter_mut().zip(GameAction::ALL) {
            let Some(age) = *slot else {
                continue;
            };
            let aged = age.saturating_add(elapsed_ms);
            if age == 0 || aged <= self.release_timeout_ms {
                held.push(action);
            }
            *slot = (aged <= self.release_timeout_ms).then_some(aged);
        }

        held
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn tap_is_reported_once_at_ten_fps() {
        let mut keys = HeldKeys::new();
        keys.press(GameAction::MoveLeft);

        assert_eq!(keys.update(100).as_slice(), &[GameAction::MoveLeft]);
        assert!(keys.update(100).is_empty());
        assert!(!keys.is_held(GameAction::MoveLeft));
    }

    #[test]
    fn repeats_keep_a_key_held() {
        let mut keys = HeldKeys::new();
        for _ in 0..5 {
            keys.handle_key_event(key(KeyCode::Right, KeyEventKind::Repeat));
            assert_eq!(keys.update(100).as_slice(), &[GameAction::MoveRight]);
        }
    }

    #[test]
    fn release_event_stops_the_key() {
        let mut keys = HeldKeys::with_release_timeout_ms(1000);
        keys.handle_key_event(key(KeyCode::Char(' '), KeyEventKind::Press));
        assert_eq!(keys.update(16).as_slice(), &[GameAction::SoftDrop]);
        assert_eq!(keys.update(16).as_slice(), &[GameAction::SoftDrop]);

        keys.handle_key_event(key(KeyCode::Char(' '), KeyEventKind::Release));
        assert!(keys.update(16).is_empty());
    }

    #[test]
    fn key_expires_after_the_release_timeout() {
        let mut keys = HeldKeys::new();
        let timeout = keys.release_timeout_ms();
        assert_eq!(timeout, KEY_RELEASE_TIMEOUT_MS);

        keys.press(GameAction::MoveRight);
        assert_eq!(keys.update(0).as_slice(), &[GameAction::MoveRight]);
        // Exactly at the timeout the key still counts as held.
        assert_eq!(keys.update(timeout).as_slice(), &[GameAction::MoveRight]);
        assert!(keys.update(1).is_empty());
        assert!(!keys.is_held(GameAction::MoveRight));

        assert_eq!(HeldKeys::with_release_timeout_ms(40).release_timeout_ms(), 40);
    }

    #[test]
    fn fresh_press_survives_a_long_frame() {
        let mut keys = HeldKeys::new();
        keys.press(GameAction::RotateCw);
        assert_eq!(keys.update(5000).as_slice(), &[GameAction::RotateCw]);
        assert!(keys.update(0).is_empty());
    }

    #[test]
    fn several_keys_come_out_in_frame_order() {
        let mut keys = HeldKeys::new();
        keys.press(GameAction::SoftDrop);
        keys.press(GameAction::RotateCcw);
        keys.press(GameAction::MoveLeft);
        assert_eq!(
            keys.update(10).as_slice(),
            &[GameAction::MoveLeft, GameAction::RotateCcw, GameAction::SoftDrop]
        );
    }

    #[test]
    fn non_game_keys_are_ignored() {
        let mut keys = HeldKeys::new();
        assert_eq!(keys.handle_key_event(key(KeyCode::Char('q'), KeyEventKind::Press)), None);
        assert!(keys.update(10).is_empty());

        keys.press(GameAction::MoveRight);
        keys.clear();
        assert!(keys.update(10).is_empty());
    }
}
