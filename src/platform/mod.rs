//! Platform abstraction layer
//!
//! Handles the collaborators the simulation consumes but does not own:
//! - Frame time
//! - Input polling
//! - The fixed-step driver that turns frames into ticks

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{Renderer, SceneOptions, draw_scene};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Source of frame timing
pub trait FrameClock {
    /// Seconds elapsed since the previous frame
    fn frame_delta_time(&mut self) -> f32;
}

/// A clock that reports the same delta every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub const fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl FrameClock for FixedClock {
    fn frame_delta_time(&mut self) -> f32 {
        self.dt
    }
}

/// Player actions the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    ThrustForward,
    ThrustBackward,
    Fire,
    Confirm,
}

/// Keyboard/gamepad polling
pub trait InputDevice {
    /// Level-sensed: held right now
    fn is_down(&self, action: Action) -> bool;
    /// Edge-triggered: went down since the previous frame
    fn was_pressed(&self, action: Action) -> bool;

    /// Snapshot this frame's input
    fn sample(&self) -> TickInput {
        TickInput {
            rotate_left: self.is_down(Action::RotateLeft),
            rotate_right: self.is_down(Action::RotateRight),
            thrust_forward: self.is_down(Action::ThrustForward),
            thrust_backward: self.is_down(Action::ThrustBackward),
            fire: self.is_down(Action::Fire),
            reset: self.was_pressed(Action::Confirm),
        }
    }
}

/// Game instance: state plus fixed-step accumulator
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    accumulator: f32,
    /// Reset pressed on a frame too short to run a tick
    pending_reset: bool,
    /// Thrust held on the last frame, for the exhaust flame
    thrusting: bool,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            accumulator: 0.0,
            pending_reset: false,
            thrusting: false,
        }
    }

    /// Run as many fixed ticks as `frame_dt` covers.
    ///
    /// Long frames are capped so a stall cannot trigger a burst of catch-up
    /// ticks. One-shot inputs apply to the first tick only.
    pub fn update(&mut self, frame_dt: f32, input: &TickInput) -> Vec<GameEvent> {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;
        self.thrusting = input.thrust_forward;
        self.pending_reset |= input.reset;

        let mut events = Vec::new();
        let mut input = input.clone();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            input.reset = self.pending_reset;
            events.extend(tick(&mut self.state, &input, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.pending_reset = false;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::trace!("Dropping {:.4}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// Pull one frame from the collaborators and advance
    pub fn run_frame<C, I>(&mut self, clock: &mut C, device: &I) -> Vec<GameEvent>
    where
        C: FrameClock + ?Sized,
        I: InputDevice + ?Sized,
    {
        let dt = clock.frame_delta_time();
        let input = device.sample();
        self.update(dt, &input)
    }

    /// Draw the current state
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let options = SceneOptions {
            thrusting: self.thrusting && !self.state.ship.is_dead(),
            show_hitboxes: false,
        };
        draw_scene(&self.state, renderer, options);
    }
}
