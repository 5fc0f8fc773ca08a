//! Frame driver
//!
//! One `frame` call per display refresh: simulate, render, then tell the host
//! whether to schedule another frame. A session that ends notifies once and
//! halts.

use crate::platform::EndNotifier;
use crate::renderer::{Renderer, Scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// What the host scheduler should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Request another frame
    Next,
    /// Session over; stop requesting frames
    Halt,
}

pub struct Driver<R: Renderer, N: EndNotifier> {
    state: GameState,
    renderer: R,
    notifier: N,
    /// Events from the most recent frame
    events: Vec<GameEvent>,
}

impl<R: Renderer, N: EndNotifier> Driver<R, N> {
    pub fn new(settings: Settings, seed: u64, renderer: R, notifier: N) -> Self {
        log::info!(
            "Starting {} game with seed {}",
            settings.variant.as_str(),
            seed
        );
        Self {
            state: GameState::new(settings, seed),
            renderer,
            notifier,
            events: Vec::new(),
        }
    }

    /// Run one frame
    pub fn frame(&mut self, input: &TickInput) -> Schedule {
        if self.state.phase.is_terminal() {
            return Schedule::Halt;
        }

        self.events = tick(&mut self.state, input);
        for event in &self.events {
            log::trace!("frame {}: {:?}", self.state.frame, event);
        }

        self.renderer.draw(&Scene::capture(&self.state));

        if let Some(message) = self.state.end_message() {
            self.notifier.notify(&message);
            return Schedule::Halt;
        }
        Schedule::Next
    }

    /// Throw away the session and start over (score, lives and round reset)
    pub fn restart(&mut self, seed: u64) {
        let settings = self.state.settings.clone();
        log::info!("Restarting with seed {seed}");
        self.state = GameState::new(settings, seed);
        self.events.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
