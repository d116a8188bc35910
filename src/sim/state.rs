//! Simulation context
//!
//! Everything a tick, a key handler or the renderer touches lives in one
//! `SimState`, passed by reference.

use super::body::{BodyKind, Rect};
use crate::input::{self, InputFlags, KeyEvent, Mode, ModeState, PointerEvent, PointerState};
use crate::viewport::Viewport;

/// First id handed out to a body
pub const FIRST_BODY_ID: u32 = 1000;

/// Starting layout as (x, y, w, h) top-left rectangles, in meters
pub const PLAYER_START: (f32, f32, f32, f32) = (5.0, 2.0, 1.0, 1.0);
pub const BLOCK_STARTS: [(f32, f32, f32, f32); 3] = [
    (10.0, 2.0, 1.0, 1.0),
    (12.0, 2.0, 1.0, 1.0),
    (14.0, 2.0, 1.0, 1.0),
];

#[derive(Debug, Clone)]
pub struct SimState {
    pub player: Rect,
    pub blocks: Vec<Rect>,
    /// Accumulated simulation time, in steps of `dt`
    pub frame_counter: f32,
    pub modes: ModeState,
    pub input: InputFlags,
    pub pointer: PointerState,
    pub viewport: Viewport,
    /// Extra message appended to the HUD line
    pub hud_text: Option<String>,
    next_id: u32,
}

impl SimState {
    /// Default scene: one player and three blocks hanging above the floor
    pub fn new(viewport: Viewport, mode: Mode) -> Self {
        let mut state = Self::empty(viewport, mode);
        for (x, y, w, h) in BLOCK_STARTS {
            let block = state.spawn(BodyKind::Block, x, y, w, h);
            state.blocks.push(block);
        }
        state
    }

    /// A scene with a player at the default spot and no blocks
    pub fn empty(viewport: Viewport, mode: Mode) -> Self {
        let (x, y, w, h) = PLAYER_START;
        Self {
            player: Rect::new(FIRST_BODY_ID, BodyKind::Player, x, y, w, h),
            blocks: Vec::new(),
            frame_counter: 0.0,
            modes: ModeState::new(mode),
            input: InputFlags::default(),
            pointer: PointerState::default(),
            viewport,
            hud_text: None,
            next_id: FIRST_BODY_ID + 1,
        }
    }

    /// Allocate a new body id
    pub fn next_body_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Build a body with a fresh id
    pub fn spawn(&mut self, kind: BodyKind, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(self.next_body_id(), kind, x, y, w, h)
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.modes.mode
    }

    /// Floor height in simulation units for the current viewport
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.viewport.floor_y
    }

    pub fn handle_key(&mut self, event: &KeyEvent) {
        input::handle_key(&mut self.modes, &mut self.input, event);
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        self.pointer.handle(event);
    }

    /// All bodies in draw order (blocks, then the player)
    pub fn bodies(&self) -> impl Iterator<Item = &Rect> {
        self.blocks.iter().chain(std::iter::once(&self.player))
    }
}
