//! Platform abstraction layer
//!
//! Host-side adapters that sit between event handlers and the simulation:
//! - Key and pointer tracking, sampled once per frame
//! - End-of-session notification

use crate::sim::TickInput;

/// Input gathered from host event handlers between frames.
///
/// Handlers may fire at any point between frames; the last write before
/// `snapshot` wins.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    /// Latest pointer-derived paddle center, consumed by the next snapshot
    pointer_x: Option<f32>,
    pause: bool,
    idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed. Returns true if the key is bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "Left" | "ArrowLeft" => self.left = true,
            "Right" | "ArrowRight" => self.right = true,
            "p" | "P" => self.pause = true,
            "i" | "I" => {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }
            _ => return false,
        }
        true
    }

    /// Key released. Returns true if the key is bound.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            "Left" | "ArrowLeft" => self.left = false,
            "Right" | "ArrowRight" => self.right = false,
            _ => return false,
        }
        true
    }

    /// Pointer moved to `client_x`. Only positions strictly inside the
    /// canvas steer the paddle.
    pub fn pointer_moved(&mut self, client_x: f32, canvas_left: f32, canvas_width: f32) {
        let x = client_x - canvas_left;
        if x > 0.0 && x < canvas_width {
            self.pointer_x = Some(x);
        } else {
            log::warn!("Ignoring pointer outside canvas at x={x}");
        }
    }

    pub fn idle_mode(&self) -> bool {
        self.idle_mode
    }

    pub fn set_idle_mode(&mut self, on: bool) {
        self.idle_mode = on;
    }

    /// Sample input for one frame; pointer moves and pause presses are
    /// one-shot and cleared here
    pub fn snapshot(&mut self, time_ms: f64) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
            pointer_x: self.pointer_x.take(),
            time_ms,
            pause: std::mem::take(&mut self.pause),
            idle_mode: self.idle_mode,
        }
    }
}

/// Receives the end-of-session message ("Game Over. Final Score: N" or
/// "You Win!"). Presenting it and restarting are up to the host.
pub trait EndNotifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that writes to the log
#[derive(Debug, Default)]
pub struct LogNotifier {
    pub last_message: Option<String>,
}

impl EndNotifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{message}");
        self.last_message = Some(message.to_string());
    }
}
