//! Tapioca - a falling-block dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (block stacking, player physics, projectiles)
//! - `config`: Data-driven game rules (lanes, timers, crush/scoring policies)
//! - `highscores`: Persisted high-score store

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{Config, CrushPolicy, ScorePolicy};
pub use highscores::HighScoreStore;

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate; all speeds below are per tick
    pub const TICK_HZ: u32 = 60;

    /// Block square edge length
    pub const BLOCK_SIZE: f32 = 50.0;
    /// Block fall speed
    pub const BLOCK_FALL_SPEED: f32 = 3.0;

    /// Screen height; width derives from the lane count
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Reserved band at the bottom of the screen
    pub const FLOOR_HEIGHT: f32 = 10.0;
    /// Nothing falls past this line
    pub const FLOOR_LINE: f32 = SCREEN_HEIGHT - FLOOR_HEIGHT;

    /// Player dimensions
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    /// Player run speed
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Jump impulse (negative = up)
    pub const JUMP_SPEED: f32 = -20.0;

    /// Downward acceleration per tick, shared by player and projectile
    pub const GRAVITY: f32 = 1.5;

    /// Projectile square edge length
    pub const BULLET_SIZE: f32 = 50.0;
    /// Projectile launch speed on each axis
    pub const BULLET_SPEED: f32 = 20.0;
}
