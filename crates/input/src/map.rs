//! Key mapping from terminal events to game actions and front-end controls.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that steer the front-end rather than the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Pause or resume (ignored once the game is over)
    TogglePause,
    /// Quit, honored only while paused or after game over
    Quit,
    /// Quit unconditionally
    ForceQuit,
    /// Start a new game after game over
    PlayAgain,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }

        // Rotation: up turns left, down turns right.
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::RotateCcw)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::RotateCw)
        }

        KeyCode::Char(' ') => Some(GameAction::SoftDrop),

        _ => None,
    }
}

/// Map keyboard input to front-end controls.
pub fn control_key(key: KeyEvent) -> Option<Control> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Control::ForceQuit);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(Control::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Control::Quit),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Control::PlayAgain),
        _ => None,
    }
}
