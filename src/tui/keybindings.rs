//! Key bindings: maps key events to control-surface actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Steps moved by a coarse (Shift / PageUp / PageDown) nudge.
pub const COARSE_STEPS: i32 = 10;

/// Control-surface actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Send a play request with the current parameters.
    Play,
    /// Move the dial selection down.
    SelectNextDial,
    /// Move the dial selection up.
    SelectPrevDial,
    /// Move the selected dial by a number of steps.
    NudgeDial(i32),
    /// Select the next waveform.
    NextWaveform,
    /// Select the previous waveform.
    PrevWaveform,
    /// Toggle help overlay.
    ToggleHelp,
    /// Show or hide the outcome console.
    ToggleConsole,
    /// Close overlays.
    Escape,
}

/// Map a key event to an action. While the help overlay is open only the keys
/// that close it (and quit) are live.
pub fn map_key(key: KeyEvent, help_visible: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if help_visible {
        return match key.code {
            KeyCode::Esc => Some(Action::Escape),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let nudge = if shift { COARSE_STEPS } else { 1 };

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') => Some(Action::Play),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevDial),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextDial),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::NudgeDial(-nudge)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NudgeDial(nudge)),
        KeyCode::Char('H') => Some(Action::NudgeDial(-COARSE_STEPS)),
        KeyCode::Char('L') => Some(Action::NudgeDial(COARSE_STEPS)),
        KeyCode::PageDown => Some(Action::NudgeDial(-COARSE_STEPS)),
        KeyCode::PageUp => Some(Action::NudgeDial(COARSE_STEPS)),
        KeyCode::Char('w') => Some(Action::NextWaveform),
        KeyCode::Char('W') => Some(Action::PrevWaveform),
        KeyCode::Char('c') => Some(Action::ToggleConsole),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn play_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('p')] {
            assert_eq!(map_key(key(code), false), Some(Action::Play));
        }
    }

    #[test]
    fn arrows_select_and_nudge() {
        assert_eq!(map_key(key(KeyCode::Up), false), Some(Action::SelectPrevDial));
        assert_eq!(map_key(key(KeyCode::Down), false), Some(Action::SelectNextDial));
        assert_eq!(map_key(key(KeyCode::Left), false), Some(Action::NudgeDial(-1)));
        assert_eq!(map_key(key(KeyCode::Right), false), Some(Action::NudgeDial(1)));
    }

    #[test]
    fn shift_nudges_coarse() {
        assert_eq!(
            map_key(with_mods(KeyCode::Right, KeyModifiers::SHIFT), false),
            Some(Action::NudgeDial(COARSE_STEPS))
        );
        assert_eq!(
            map_key(key(KeyCode::PageDown), false),
            Some(Action::NudgeDial(-COARSE_STEPS))
        );
    }

    #[test]
    fn waveform_cycle_keys() {
        assert_eq!(map_key(key(KeyCode::Char('w')), false), Some(Action::NextWaveform));
        assert_eq!(
            map_key(with_mods(KeyCode::Char('W'), KeyModifiers::SHIFT), false),
            Some(Action::PrevWaveform)
        );
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, true), Some(Action::Quit));
    }

    #[test]
    fn help_overlay_swallows_other_keys() {
        assert_eq!(map_key(key(KeyCode::Char(' ')), true), None);
        assert_eq!(map_key(key(KeyCode::Left), true), None);
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Action::Escape));
        assert_eq!(map_key(key(KeyCode::Char('?')), true), Some(Action::ToggleHelp));
    }

    #[test]
    fn unbound_key_is_none() {
        assert_eq!(map_key(key(KeyCode::Char('z')), false), None);
    }
}
