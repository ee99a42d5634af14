use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Action;
use crate::config::ControlsSettings;

/// What a key press asks the event loop to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    Player(Action),
}

/// Translate a key press into a command, using `controls` for step sizes.
pub fn command_for_key(key: KeyEvent, controls: &ControlsSettings) -> Option<KeyCommand> {
    let volume_step = i16::from(controls.volume_step);
    let scrub_step = i16::from(controls.scrub_step_percent);

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(KeyCommand::Quit);
        }
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyCommand::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::PlayPause,
        KeyCode::Char('h') | KeyCode::Left => Action::Previous,
        KeyCode::Char('l') | KeyCode::Right => Action::Next,
        KeyCode::Char('H') => Action::ScrubBy(-scrub_step),
        KeyCode::Char('L') => Action::ScrubBy(scrub_step),
        KeyCode::Char('-') | KeyCode::Down => Action::VolumeBy(-volume_step),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Action::VolumeBy(volume_step),
        KeyCode::Char('m') => Action::ToggleMute,
        KeyCode::Char('f') => Action::ToggleLike,
        KeyCode::Char('s') => Action::ToggleShuffle,
        KeyCode::Char('r') => Action::CycleRepeat,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char(c @ '1'..='9') => Action::Select(c as usize - '1' as usize),
        _ => return None,
    };
    Some(KeyCommand::Player(action))
}
