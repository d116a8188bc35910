//! Host tick and simulation step
//!
//! The host calls [`tick`] at a fixed rate. Depending on the mode a tick
//! takes zero or one simulation step via [`run_tick`].

use super::force::Force;
use super::state::SimState;
use super::vector::Vector2D;
use crate::consts::*;
use crate::input::Mode;

/// Advance one host tick; returns whether the simulation stepped
pub fn tick(state: &mut SimState) -> bool {
    match state.mode() {
        Mode::Menu => {
            menu_tick(state);
            false
        }
        Mode::FrameStep => {
            if state.input.step_once {
                state.input.step_once = false;
                run_tick(state, SIM_DT);
                true
            } else if state.input.step_held {
                run_tick(state, SIM_DT);
                true
            } else {
                false
            }
        }
        Mode::Run => {
            run_tick(state, SIM_DT);
            true
        }
    }
}

fn menu_tick(_state: &mut SimState) {}

/// One simulation step: blocks, then player input, then the player
pub fn run_tick(state: &mut SimState, dt: f32) {
    state.frame_counter += dt;
    let floor_y = state.floor_y();

    for block in &mut state.blocks {
        block.update(dt, floor_y);
    }

    if state.input.jump {
        player_jump(state);
    }
    if state.input.move_left {
        player_move(state, -MOVE_FORCE);
    }
    if state.input.move_right {
        player_move(state, MOVE_FORCE);
    }
    state.player.update(dt, floor_y);
}

/// Queue a jump if the player is standing on the floor
pub fn player_jump(state: &mut SimState) {
    if state.player.touching_floor {
        state
            .player
            .apply_force(Force::new(Vector2D::new(0.0, -JUMP_FORCE), INPUT_FORCE_TIME));
    }
}

/// Queue a horizontal push; applies on the floor and in the air alike
pub fn player_move(state: &mut SimState, dx: f32) {
    state
        .player
        .apply_force(Force::new(Vector2D::new(dx, 0.0), INPUT_FORCE_TIME));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;
    use crate::viewport::Viewport;

    fn landed_state(mode: Mode) -> SimState {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        for _ in 0..100 {
            tick(&mut state);
        }
        assert!(state.player.resting && state.player.touching_floor);
        state.modes.mode = mode;
        state
    }

    #[test]
    fn test_run_mode_steps_every_tick() {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        for _ in 0..5 {
            assert!(tick(&mut state));
        }
        assert_eq!(state.frame_counter, 5.0);
    }

    #[test]
    fn test_menu_freezes_everything() {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        tick(&mut state);
        state.handle_key(&KeyEvent::down('p'));
        assert_eq!(state.mode(), Mode::Menu);

        let player = state.player.center;
        for _ in 0..10 {
            assert!(!tick(&mut state));
        }
        assert_eq!(state.frame_counter, 1.0);
        assert_eq!(state.player.center, player);

        state.handle_key(&KeyEvent::down('p'));
        assert_eq!(state.mode(), Mode::Run);
        assert!(tick(&mut state));
        assert_eq!(state.frame_counter, 2.0);
    }

    #[test]
    fn test_single_step_advances_once() {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        state.handle_key(&KeyEvent::down('n'));
        assert_eq!(state.mode(), Mode::FrameStep);

        for _ in 0..3 {
            assert!(!tick(&mut state));
        }
        assert_eq!(state.frame_counter, 0.0);

        state.handle_key(&KeyEvent::down('n'));
        let stepped = (0..10).filter(|_| tick(&mut state)).count();
        assert_eq!(stepped, 1);
        assert_eq!(state.frame_counter, 1.0);
        assert!(!state.input.step_once);
    }

    #[test]
    fn test_held_step_advances_every_tick() {
        let mut state = SimState::new(Viewport::default(), Mode::FrameStep);
        state.handle_key(&KeyEvent::down('m'));
        for _ in 0..4 {
            assert!(tick(&mut state));
        }
        state.handle_key(&KeyEvent::up('m'));
        assert!(!tick(&mut state));
        assert_eq!(state.frame_counter, 4.0);
    }

    #[test]
    fn test_jump_only_from_floor() {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        assert!(!state.player.touching_floor);
        player_jump(&mut state);
        assert!(state.player.forces().is_empty());

        let mut state = landed_state(Mode::Run);
        player_jump(&mut state);
        assert_eq!(state.player.forces().len(), 1);
        assert_eq!(state.player.forces()[0].direction, Vector2D::new(0.0, -JUMP_FORCE));
        assert!(!state.player.resting);
    }

    #[test]
    fn test_held_jump_lifts_player_off_the_floor() {
        let mut state = landed_state(Mode::Run);
        let ground = state.player.center.y;

        state.handle_key(&KeyEvent::down('w'));
        tick(&mut state);
        assert!(state.player.center.y < ground);
        assert!(!state.player.touching_floor);
        assert!(state.player.forces().is_empty());

        // Still held, but airborne: no further jump forces
        tick(&mut state);
        assert!(state.player.forces().is_empty());
        assert!(state.player.velocity.y < 0.0);
    }

    #[test]
    fn test_held_move_requeues_every_step() {
        let mut state = landed_state(Mode::FrameStep);
        state.handle_key(&KeyEvent::down('d'));

        let start_x = state.player.center.x;
        let mut last_vx = 0.0;
        for _ in 0..3 {
            state.input.step_once = true;
            assert!(tick(&mut state));
            assert!(state.player.velocity.x > last_vx);
            last_vx = state.player.velocity.x;
        }
        assert!(state.player.center.x > start_x);

        state.handle_key(&KeyEvent::up('d'));
        state.input.step_once = true;
        tick(&mut state);
        assert!(state.player.velocity.x < last_vx);
    }

    #[test]
    fn test_move_left_in_the_air() {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        state.handle_key(&KeyEvent::down('a'));
        tick(&mut state);
        assert!(!state.player.touching_floor);
        assert!(state.player.velocity.x < 0.0);
    }

    #[test]
    fn test_blocks_settle_on_floor() {
        let mut state = SimState::new(Viewport::default(), Mode::Run);
        for _ in 0..500 {
            tick(&mut state);
        }
        for body in state.bodies() {
            assert!(body.resting, "body {} still moving", body.id);
            assert!(body.touching_floor);
            assert!(body.bottom() <= state.floor_y() + EPSILON);
        }
    }
}
