//! Keyboard and pointer input.
//!
//! This module handles:
//! - Normalizing raw crossterm events into logical [`Key`]s
//! - Mapping keys to clock [`Command`]s
//!
//! Raw mode already keeps the terminal from acting on the keys, so no
//! default-action suppression happens here.

use std::fmt;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

// ============================================================================
// Key
// ============================================================================

/// A normalized key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Esc,
    /// Ctrl-C
    Interrupt,
    /// Anything the clock has no binding for
    Other,
}

// ============================================================================
// Command
// ============================================================================

/// Operations reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleTimer,
    Reset,
    SwitchMode,
    ToggleFullscreen,
    CycleFont,
    CycleTheme,
    ToggleUiHidden,
    /// `true` increments, `false` decrements
    AdjustTime(bool),
    ToggleEditScope,
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::ToggleTimer => "toggle_timer",
            Command::Reset => "reset",
            Command::SwitchMode => "switch_mode",
            Command::ToggleFullscreen => "toggle_fullscreen",
            Command::CycleFont => "cycle_font",
            Command::CycleTheme => "cycle_theme",
            Command::ToggleUiHidden => "toggle_ui_hidden",
            Command::AdjustTime(true) => "adjust_time_up",
            Command::AdjustTime(false) => "adjust_time_down",
            Command::ToggleEditScope => "toggle_edit_scope",
            Command::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Maps a key to its command. Letters are case-insensitive.
pub fn map_key(key: Key) -> Option<Command> {
    match key {
        Key::Space => Some(Command::ToggleTimer),
        Key::Up => Some(Command::AdjustTime(true)),
        Key::Down => Some(Command::AdjustTime(false)),
        Key::Left | Key::Right => Some(Command::ToggleEditScope),
        Key::Esc | Key::Interrupt => Some(Command::Quit),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'r' => Some(Command::Reset),
            's' => Some(Command::SwitchMode),
            'f' => Some(Command::ToggleFullscreen),
            't' => Some(Command::CycleFont),
            'c' => Some(Command::CycleTheme),
            'h' => Some(Command::ToggleUiHidden),
            'q' => Some(Command::Quit),
            ' ' => Some(Command::ToggleTimer),
            _ => None,
        },
        Key::Other => None,
    }
}

// ============================================================================
// crossterm adapter
// ============================================================================

/// An input event the clock cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    PointerMoved,
    Resize,
}

/// Normalizes a crossterm key event.
///
/// Presses and auto-repeats pass through so held arrows keep adjusting;
/// releases are dropped.
pub fn from_crossterm(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Key::Interrupt
        }
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    };
    Some(key)
}

/// Converts any crossterm event into an [`InputEvent`].
pub fn from_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => from_crossterm(key).map(InputEvent::Key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved),
            _ => None,
        },
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent};

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    // ------------------------------------------------------------------------
    // map_key Tests
    // ------------------------------------------------------------------------

    mod map_key_tests {
        use super::*;

        #[test]
        fn test_letter_bindings_case_insensitive() {
            let table = [
                ('r', Command::Reset),
                ('s', Command::SwitchMode),
                ('f', Command::ToggleFullscreen),
                ('t', Command::CycleFont),
                ('c', Command::CycleTheme),
                ('h', Command::ToggleUiHidden),
                ('q', Command::Quit),
            ];
            for (c, command) in table {
                assert_eq!(map_key(Key::Char(c)), Some(command));
                assert_eq!(map_key(Key::Char(c.to_ascii_uppercase())), Some(command));
            }
        }

        #[test]
        fn test_special_keys() {
            assert_eq!(map_key(Key::Space), Some(Command::ToggleTimer));
            assert_eq!(map_key(Key::Up), Some(Command::AdjustTime(true)));
            assert_eq!(map_key(Key::Down), Some(Command::AdjustTime(false)));
            assert_eq!(map_key(Key::Left), Some(Command::ToggleEditScope));
            assert_eq!(map_key(Key::Right), Some(Command::ToggleEditScope));
            assert_eq!(map_key(Key::Esc), Some(Command::Quit));
            assert_eq!(map_key(Key::Interrupt), Some(Command::Quit));
        }

        #[test]
        fn test_unbound_keys() {
            assert_eq!(map_key(Key::Char('x')), None);
            assert_eq!(map_key(Key::Char('1')), None);
            assert_eq!(map_key(Key::Other), None);
        }

        #[test]
        fn test_command_display() {
            assert_eq!(Command::AdjustTime(true).to_string(), "adjust_time_up");
            assert_eq!(Command::ToggleTimer.to_string(), "toggle_timer");
        }
    }

    // ------------------------------------------------------------------------
    // crossterm adapter Tests
    // ------------------------------------------------------------------------

    mod adapter_tests {
        use super::*;

        #[test]
        fn test_press_and_repeat_pass_through() {
            let press = key_event(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Press);
            let repeat = key_event(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Repeat);
            assert_eq!(from_crossterm(&press), Some(Key::Up));
            assert_eq!(from_crossterm(&repeat), Some(Key::Up));
        }

        #[test]
        fn test_release_dropped() {
            let release = key_event(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
            assert_eq!(from_crossterm(&release), None);
        }

        #[test]
        fn test_ctrl_c_is_interrupt() {
            let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
            assert_eq!(from_crossterm(&event), Some(Key::Interrupt));

            let plain = key_event(KeyCode::Char('c'), KeyModifiers::NONE, KeyEventKind::Press);
            assert_eq!(from_crossterm(&plain), Some(Key::Char('c')));
        }

        #[test]
        fn test_space_and_other() {
            let space = key_event(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Press);
            assert_eq!(from_crossterm(&space), Some(Key::Space));

            let tab = key_event(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Press);
            assert_eq!(from_crossterm(&tab), Some(Key::Other));
        }

        #[test]
        fn test_from_event() {
            let moved = Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 3,
                row: 4,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(from_event(&moved), Some(InputEvent::PointerMoved));

            let click = Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 3,
                row: 4,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(from_event(&click), None);

            assert_eq!(from_event(&Event::Resize(80, 24)), Some(InputEvent::Resize));
            assert_eq!(from_event(&Event::FocusGained), None);
        }
    }
}
