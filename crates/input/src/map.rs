//! Key mapping from terminal events to game actions.
//!
//! The button keys follow the 2x2 board layout:
//!
//! ```text
//! 1 / u   2 / i
//! 3 / j   4 / k
//! ```

use crate::types::{DifficultyTier, GameAction, Symbol};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Buttons
        KeyCode::Char('1') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(GameAction::Press(Symbol::Blue))
        }
        KeyCode::Char('2') | KeyCode::Char('i') | KeyCode::Char('I') => {
            Some(GameAction::Press(Symbol::Red))
        }
        KeyCode::Char('3') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Press(Symbol::Green))
        }
        KeyCode::Char('4') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Press(Symbol::Yellow))
        }

        // Tier menu
        KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(GameAction::Start(DifficultyTier::Beginner))
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(GameAction::Start(DifficultyTier::Medium))
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Start(DifficultyTier::Hard))
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameAction::Start(DifficultyTier::Pro))
        }

        // Dialog
        KeyCode::Enter => Some(GameAction::Acknowledge),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
