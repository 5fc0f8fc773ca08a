//! Game settings
//!
//! Host-supplied dimensions plus the tunables that differ between the
//! game's rule variants. The brick layout is fixed and lives in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::bricks;

/// Rule variant presets, one per iteration of the game's design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// One grid, +1 per brick, cleared grid wins
    Classic,
    /// Endless rounds with escalating speed, bricks worth the round number
    Rounds,
    /// Rounds plus particle bursts and paddle english
    #[default]
    Advanced,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Rounds => "Rounds",
            Variant::Advanced => "Advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "simple" => Some(Variant::Classic),
            "rounds" => Some(Variant::Rounds),
            "advanced" | "adv" => Some(Variant::Advanced),
            _ => None,
        }
    }

    /// Points awarded for one brick in the given round
    pub fn brick_points(&self, round: u32) -> u64 {
        match self {
            Variant::Classic => 1,
            Variant::Rounds | Variant::Advanced => round as u64,
        }
    }

    /// Whether clearing the grid starts another round
    pub fn advances_rounds(&self) -> bool {
        !matches!(self, Variant::Classic)
    }

    /// Whether destroyed bricks burst into particles
    pub fn spawns_particles(&self) -> bool {
        matches!(self, Variant::Advanced)
    }

    /// Whether paddle hits perturb the horizontal speed (angle control)
    pub fn paddle_english(&self) -> bool {
        matches!(self, Variant::Advanced)
    }

    /// Whether the serve picks a random horizontal direction
    pub fn random_serve(&self) -> bool {
        !matches!(self, Variant::Classic)
    }
}

/// Playfield dimensions, supplied by the host (canvas size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rule variant
    pub variant: Variant,
    /// Canvas size
    pub playfield: Playfield,

    // === Session ===
    pub starting_lives: u8,
    /// Rounds to play before a cleared grid counts as a win (None = endless)
    pub max_rounds: Option<u32>,
    /// RNG seed (None = host picks one)
    pub seed: Option<u64>,

    // === Tuning ===
    /// Initial ball speed per axis (px/frame)
    pub ball_speed: f32,
    /// Keyboard paddle speed (px/frame)
    pub paddle_speed: f32,
    /// Paddle bounce cooldown window (ms)
    pub paddle_cooldown_ms: f64,
    pub particles_per_brick: usize,
    pub particle_max_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            playfield: Playfield::default(),

            starting_lives: STARTING_LIVES,
            max_rounds: None,
            seed: None,

            ball_speed: BALL_SPEED,
            paddle_speed: PADDLE_SPEED,
            paddle_cooldown_ms: PADDLE_COOLDOWN_MS,
            particles_per_brick: PARTICLES_PER_BRICK,
            particle_max_speed: PARTICLE_MAX_SPEED,
        }
    }
}

impl Settings {
    /// Create settings for a variant (other values default)
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Override the playfield with the host's canvas size
    pub fn with_playfield(mut self, width: f32, height: f32) -> Self {
        self.playfield = Playfield { width, height };
        self
    }

    /// Whether a cleared grid in `round` ends the session with a win
    pub fn is_final_round(&self, round: u32) -> bool {
        !self.variant.advances_rounds() || self.max_rounds.is_some_and(|max| round >= max)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} variant)",
            path.as_ref().display(),
            settings.variant.as_str()
        );
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let Playfield { width, height } = self.playfield;
        let (grid_right, grid_bottom) = bricks::grid_extent();

        if !(width.is_finite() && height.is_finite()) {
            return Err(Error::Config("playfield size must be finite".into()));
        }
        if width < grid_right || width < PADDLE_WIDTH {
            return Err(Error::Config(format!(
                "playfield width {width} cannot hold the brick grid ({grid_right})"
            )));
        }
        if height <= grid_bottom + SERVE_HEIGHT + 2.0 * BALL_RADIUS {
            return Err(Error::Config(format!(
                "playfield height {height} leaves no room below the brick grid ({grid_bottom})"
            )));
        }
        if self.starting_lives == 0 {
            return Err(Error::Config("starting_lives must be at least 1".into()));
        }
        if self.max_rounds == Some(0) {
            return Err(Error::Config("max_rounds must be at least 1".into()));
        }
        if !(self.ball_speed > 0.0 && self.paddle_speed > 0.0) {
            return Err(Error::Config("ball and paddle speeds must be positive".into()));
        }
        if self.paddle_cooldown_ms < 0.0 {
            return Err(Error::Config("paddle_cooldown_ms must not be negative".into()));
        }
        if self.particle_max_speed < PARTICLE_MIN_SPEED {
            return Err(Error::Config(format!(
                "particle_max_speed must be at least {PARTICLE_MIN_SPEED}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
        for variant in [Variant::Classic, Variant::Rounds, Variant::Advanced] {
            assert!(Settings::from_variant(variant).validate().is_ok());
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("CLASSIC"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("adv"), Some(Variant::Advanced));
        assert_eq!(Variant::from_str("rounds"), Some(Variant::Rounds));
        assert_eq!(Variant::from_str("arcade"), None);
        assert_eq!(Variant::from_str(Variant::Rounds.as_str()), Some(Variant::Rounds));
    }

    #[test]
    fn test_brick_points() {
        assert_eq!(Variant::Classic.brick_points(4), 1);
        assert_eq!(Variant::Rounds.brick_points(4), 4);
        assert_eq!(Variant::Advanced.brick_points(1), 1);
    }

    #[test]
    fn test_from_json_partial() {
        let settings =
            Settings::from_json(r#"{"variant":"Classic","starting_lives":5}"#).unwrap();
        assert_eq!(settings.variant, Variant::Classic);
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.playfield, Playfield::default());
        assert_eq!(settings.ball_speed, BALL_SPEED);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(Settings::from_json("{not json"), Err(Error::Json(_))));
        assert!(matches!(
            Settings::from_json(r#"{"starting_lives":0}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"playfield":{"width":200.0,"height":320.0}}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"playfield":{"width":480.0,"height":120.0}}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_final_round() {
        assert!(Settings::from_variant(Variant::Classic).is_final_round(1));
        let mut settings = Settings::from_variant(Variant::Advanced);
        assert!(!settings.is_final_round(10));
        settings.max_rounds = Some(2);
        assert!(!settings.is_final_round(1));
        assert!(settings.is_final_round(2));
    }
}
