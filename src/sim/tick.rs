//! Per-frame simulation step
//!
//! Order within a frame: ball, paddle, particles (update order), then brick
//! collisions against the ball. A ball that exhausts the last life ends the
//! frame immediately.

use rand::Rng;

use super::entity::Entity;
use super::particles::{spawn_burst, update_particles};
use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::Playfield;

/// Player intent sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left key held
    pub move_left: bool,
    /// Right key held
    pub move_right: bool,
    /// Pointer x since the last frame (centers the paddle, overrides keys)
    pub pointer_x: Option<f32>,
    /// Host clock (ms), used for the paddle bounce cooldown
    pub time_ms: f64,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the paddle follows the ball
    pub idle_mode: bool,
}

/// Advance the game by one frame. Returns the events the frame produced.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::InPlay | GamePhase::Serving => {
                state.resume_phase = state.phase;
                state.phase = GamePhase::Paused;
                return events;
            }
            GamePhase::Paused => state.phase = state.resume_phase,
            _ => {}
        }
    }

    // Don't tick if paused or the session has ended
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver | GamePhase::Won => return events,
        GamePhase::Serving => state.phase = GamePhase::InPlay,
        GamePhase::InPlay => {}
    }

    state.frame += 1;

    let pointer_x = if input.idle_mode {
        Some(autopilot_target(state))
    } else {
        input.pointer_x
    };

    if !update_ball(state, input.time_ms, &mut events) {
        return events;
    }

    let Playfield { width, .. } = state.settings.playfield;
    let paddle_speed = state.settings.paddle_speed;
    state
        .paddle
        .steer(input.move_left, input.move_right, pointer_x, paddle_speed, width);

    let bounds = state.bounds();
    update_particles(&mut state.particles, &bounds);

    resolve_brick_collisions(state, &mut events);

    events
}

/// Pointer x for idle mode: track the ball with a slow drift so paddle
/// english varies the return angle
fn autopilot_target(state: &GameState) -> f32 {
    let t = state.frame as f32 * 0.01;
    let drift = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * state.paddle.size.x / 2.0;
    state.ball.pos.x + drift
}

/// Ball physics for one frame.
///
/// Reflections are decided against the next position before any movement.
/// Returns false when the ball took the last life and the frame must stop.
fn update_ball(state: &mut GameState, now_ms: f64, events: &mut Vec<GameEvent>) -> bool {
    let Playfield { width, height } = state.settings.playfield;
    let variant = state.settings.variant;
    let paddle_ready = state.paddle_ready(now_ms);

    let ball = &mut state.ball;
    let r = ball.radius;
    let next = ball.next_pos();

    // Side walls
    if next.x < r || next.x > width - r {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    let paddle = &state.paddle;
    let on_paddle = ball.aabb().overlaps(&paddle.aabb())
        || (variant.paddle_english() && paddle.touches_top(ball));

    if next.y < r {
        // Ceiling
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    } else if paddle_ready && on_paddle {
        ball.vel.y = -ball.vel.y;
        state.paddle_cooldown_until = now_ms + state.settings.paddle_cooldown_ms;

        if variant.paddle_english() {
            let speed = state.ball_speed;
            let bias = if ball.pos.x > paddle.center_x() { 1.0 } else { -1.0 };
            let dx = ball.vel.x + bias * state.rng.random_range(0.0..=speed);
            let magnitude = dx.abs().clamp(speed * 0.5, speed * 2.0);
            ball.vel.x = if dx < 0.0 { -magnitude } else { magnitude };
        }
        events.push(GameEvent::PaddleBounce);
    } else if next.y > height - r {
        // Floor
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });

        if state.lives > 0 {
            log::debug!("Life lost, {} remaining", state.lives);
            state.serve();
            return true;
        }

        log::info!("Game over with score {}", state.score);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
        return false;
    }

    ball.update();
    true
}

/// Destroy every present brick the ball overlaps this frame.
///
/// Each hit reflects the ball vertically; hitting two bricks in one frame
/// reflects twice.
fn resolve_brick_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball_box = state.ball.aabb();
    let hits: Vec<_> = state
        .bricks
        .iter()
        .filter(|brick| brick.aabb().overlaps(&ball_box))
        .collect();

    if hits.is_empty() {
        return;
    }

    let variant = state.settings.variant;
    for brick in hits {
        state.ball.vel.y = -state.ball.vel.y;
        state.bricks.destroy(brick.column, brick.row);

        let points = variant.brick_points(state.round);
        state.score += points;
        events.push(GameEvent::BrickDestroyed {
            column: brick.column,
            row: brick.row,
            points,
        });
        log::debug!(
            "Brick ({}, {}) destroyed, score {}",
            brick.column,
            brick.row,
            state.score
        );

        if variant.spawns_particles() {
            spawn_burst(
                &mut state.particles,
                &mut state.rng,
                brick.center(),
                state.settings.particles_per_brick,
                state.settings.particle_max_speed,
            );
        }
    }

    if state.bricks.is_cleared() {
        clear_round(state, events);
    }
}

/// The grid is empty: win, or start the next round faster
fn clear_round(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.settings.is_final_round(state.round) {
        log::info!("All bricks cleared in round {}, score {}", state.round, state.score);
        state.phase = GamePhase::Won;
        events.push(GameEvent::Won { score: state.score });
        return;
    }

    state.round += 1;
    state.ball_speed += state.round as f32 / 2.0;
    state.bricks.repopulate();
    state.serve();
    log::debug!(
        "Round {} begins, ball speed {}",
        state.round,
        state.ball_speed
    );
    events.push(GameEvent::RoundCleared { round: state.round });
}
