//! Keyboard/pointer input and the mode state machine
//!
//! Key events either flip held player flags or move between modes:
//!
//! ```text
//!   Run --p--> Menu --p--> (previous mode)
//!   Run --n--> FrameStep --p--> Run
//! ```
//!
//! The pause slot is a single remembered mode, not a stack. Going from
//! `FrameStep` to `Run` does not touch it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Log target for keyboard events
pub const INPUT_LOG_TARGET: &str = "rectfall::input";

/// Top-level mode driving what a host tick does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Paused; nothing advances
    Menu,
    /// Advance only on request (`n` once, `m` while held)
    FrameStep,
    /// Advance every tick
    Run,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::FrameStep => "frame",
            Mode::Run => "run",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to interpret a mode name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("Unknown state: {0}")]
    Unknown(String),
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Mode::Menu),
            "frame" => Ok(Mode::FrameStep),
            "run" => Ok(Mode::Run),
            other => Err(ModeError::Unknown(other.to_string())),
        }
    }
}

/// Current mode plus the single slot used by pause/unpause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    pub mode: Mode,
    pub previous: Mode,
}

impl ModeState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            previous: Mode::Run,
        }
    }

    /// Remember the current mode and enter the menu
    pub fn pause(&mut self) {
        self.previous = self.mode;
        self.mode = Mode::Menu;
        log::info!("Paused (was {})", self.previous);
    }

    /// Swap back to the remembered mode
    pub fn unpause(&mut self) {
        std::mem::swap(&mut self.mode, &mut self.previous);
        log::info!("Unpaused to {}", self.mode);
    }

    fn enter(&mut self, mode: Mode) {
        log::info!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(Mode::Run)
    }
}

/// Key identity as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Named keys ("Escape", "ArrowUp", ...); never bound
    Other,
}

impl Key {
    /// Interpret a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyKind,
    pub key: Key,
    /// Auto-repeat from a held key
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(c: char) -> Self {
        Self {
            kind: KeyKind::Down,
            key: Key::Char(c),
            repeat: false,
        }
    }

    pub fn repeat(c: char) -> Self {
        Self {
            repeat: true,
            ..Self::down(c)
        }
    }

    pub fn up(c: char) -> Self {
        Self {
            kind: KeyKind::Up,
            key: Key::Char(c),
            repeat: false,
        }
    }

    #[inline]
    fn is_down(&self) -> bool {
        self.kind == KeyKind::Down
    }
}

/// Held/one-shot flags sampled by the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub jump: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// One-shot single step in frame-step mode; cleared by the tick that uses it
    pub step_once: bool,
    /// Step every tick while held in frame-step mode
    pub step_held: bool,
}

/// Route a key event according to the current mode
pub fn handle_key(modes: &mut ModeState, flags: &mut InputFlags, event: &KeyEvent) {
    log::debug!(
        target: INPUT_LOG_TARGET,
        "{:?}:{} {:?}",
        event.kind,
        if event.repeat { "(repeat)" } else { "" },
        event.key
    );

    match modes.mode {
        Mode::Menu => menu_key(modes, event),
        Mode::FrameStep => frame_key(modes, flags, event),
        Mode::Run => run_key(modes, flags, event),
    }
}

fn menu_key(modes: &mut ModeState, event: &KeyEvent) {
    if event.key == Key::Char('p') && event.is_down() {
        modes.unpause();
    }
}

fn frame_key(modes: &mut ModeState, flags: &mut InputFlags, event: &KeyEvent) {
    match event.key {
        Key::Char('p') => {
            if event.is_down() {
                modes.enter(Mode::Run);
            }
        }
        Key::Char('n') => flags.step_once = event.is_down() && !event.repeat,
        Key::Char('m') => flags.step_held = event.is_down(),
        _ => player_key(flags, event),
    }
}

fn run_key(modes: &mut ModeState, flags: &mut InputFlags, event: &KeyEvent) {
    match event.key {
        Key::Char('p') => {
            if event.is_down() {
                modes.pause();
            }
        }
        Key::Char('n') => {
            if event.is_down() {
                modes.enter(Mode::FrameStep);
            }
        }
        _ => player_key(flags, event),
    }
}

fn player_key(flags: &mut InputFlags, event: &KeyEvent) {
    let down = event.is_down();
    match event.key {
        Key::Char('w') => flags.jump = down,
        Key::Char('a') => flags.move_left = down,
        Key::Char('d') => flags.move_right = down,
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

/// Last known pointer state; recorded but not read by the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    /// Button state changed on the last event
    pub changed: bool,
}

impl PointerState {
    pub fn handle(&mut self, event: &PointerEvent) {
        self.x = event.x;
        self.y = event.y;
        self.changed = false;
        match event.kind {
            PointerKind::Move => {}
            PointerKind::Down => {
                self.down = true;
                self.changed = true;
            }
            PointerKind::Up => {
                self.down = false;
                self.changed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(modes: &mut ModeState, flags: &mut InputFlags, event: KeyEvent) {
        handle_key(modes, flags, &event);
    }

    #[test]
    fn test_pause_unpause_round_trip() {
        let mut modes = ModeState::default();
        let mut flags = InputFlags::default();

        press(&mut modes, &mut flags, KeyEvent::down('p'));
        assert_eq!(modes.mode, Mode::Menu);
        assert_eq!(modes.previous, Mode::Run);

        press(&mut modes, &mut flags, KeyEvent::down('p'));
        assert_eq!(modes.mode, Mode::Run);
    }

    #[test]
    fn test_frame_to_run_bypasses_pause_slot() {
        let mut modes = ModeState::default();
        let mut flags = InputFlags::default();

        press(&mut modes, &mut flags, KeyEvent::down('n'));
        assert_eq!(modes.mode, Mode::FrameStep);

        press(&mut modes, &mut flags, KeyEvent::down('p'));
        assert_eq!(modes.mode, Mode::Run);
        assert_eq!(modes.previous, Mode::Run);
    }

    #[test]
    fn test_key_up_never_changes_mode() {
        let mut modes = ModeState::default();
        let mut flags = InputFlags::default();

        for c in ['p', 'n'] {
            press(&mut modes, &mut flags, KeyEvent::up(c));
            assert_eq!(modes.mode, Mode::Run);
        }
        modes.pause();
        press(&mut modes, &mut flags, KeyEvent::up('p'));
        assert_eq!(modes.mode, Mode::Menu);
    }

    #[test]
    fn test_step_flags_in_frame_mode() {
        let mut modes = ModeState::new(Mode::FrameStep);
        let mut flags = InputFlags::default();

        press(&mut modes, &mut flags, KeyEvent::down('n'));
        assert!(flags.step_once);
        press(&mut modes, &mut flags, KeyEvent::repeat('n'));
        assert!(!flags.step_once);

        press(&mut modes, &mut flags, KeyEvent::down('m'));
        press(&mut modes, &mut flags, KeyEvent::repeat('m'));
        assert!(flags.step_held);
        press(&mut modes, &mut flags, KeyEvent::up('m'));
        assert!(!flags.step_held);
    }

    #[test]
    fn test_movement_keys_held_flags() {
        let mut modes = ModeState::default();
        let mut flags = InputFlags::default();

        press(&mut modes, &mut flags, KeyEvent::down('w'));
        press(&mut modes, &mut flags, KeyEvent::down('a'));
        press(&mut modes, &mut flags, KeyEvent::down('d'));
        assert!(flags.jump && flags.move_left && flags.move_right);

        press(&mut modes, &mut flags, KeyEvent::up('a'));
        assert!(!flags.move_left);
        assert!(flags.jump && flags.move_right);
    }

    #[test]
    fn test_menu_ignores_movement() {
        let mut modes = ModeState::new(Mode::Menu);
        let mut flags = InputFlags::default();

        press(&mut modes, &mut flags, KeyEvent::down('w'));
        press(&mut modes, &mut flags, KeyEvent::down('n'));
        assert_eq!(flags, InputFlags::default());
        assert_eq!(modes.mode, Mode::Menu);
    }

    #[test]
    fn test_mode_names() {
        for mode in [Mode::Menu, Mode::FrameStep, Mode::Run] {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        }
        let err = "paused".parse::<Mode>().unwrap_err();
        assert_eq!(err, ModeError::Unknown("paused".into()));
        assert_eq!(err.to_string(), "Unknown state: paused");
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("w"), Key::Char('w'));
        assert_eq!(Key::from_dom("Escape"), Key::Other);
        assert_eq!(Key::from_dom(""), Key::Other);
    }

    #[test]
    fn test_pointer_state_tracks_button() {
        let mut pointer = PointerState::default();
        pointer.handle(&PointerEvent { kind: PointerKind::Down, x: 3.0, y: 4.0 });
        assert!(pointer.down && pointer.changed);
        pointer.handle(&PointerEvent { kind: PointerKind::Move, x: 5.0, y: 6.0 });
        assert!(pointer.down && !pointer.changed);
        assert_eq!((pointer.x, pointer.y), (5.0, 6.0));
        pointer.handle(&PointerEvent { kind: PointerKind::Up, x: 5.0, y: 6.0 });
        assert!(!pointer.down && pointer.changed);
    }
}
