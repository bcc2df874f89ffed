//! Game state and core simulation types
//!
//! Everything needed to replay a session deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// Waiting for a start input
    Title,
    /// Active session
    Playing,
    /// Session ended; waiting for restart
    GameOver,
}

/// Why the last session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// The block stack reached the top of the screen
    ToppedOut,
    /// A falling block crushed the player
    Crushed,
}

/// A falling square that stacks on the floor or on other blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Vertical speed; 0 once resting
    pub speed: f32,
    /// False once the block has come to rest. A resting block never
    /// moves again, it can only be destroyed.
    pub moving: bool,
    /// Set when the block comes to rest with its top edge at or above y = 0
    pub touching_top: bool,
    /// Marks the block for removal at the end of the tick
    pub destroyed: bool,
}

impl Block {
    /// Spawn one block-height above the visible area at the given x
    pub fn new(x: f32) -> Self {
        Self {
            rect: Rect::new(x, -BLOCK_SIZE, BLOCK_SIZE, BLOCK_SIZE),
            speed: BLOCK_FALL_SPEED,
            moving: true,
            touching_top: false,
            destroyed: false,
        }
    }

    pub fn intersects(&self, rect: &Rect) -> bool {
        self.rect.intersects(rect)
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// How high the block sits: 0 at the floor line, approaching 1 at the
    /// top of the screen. Feeds the altitude scoring policy.
    pub fn altitude(&self) -> f32 {
        (1.0 - self.rect.bottom() / FLOOR_LINE).clamp(0.0, 1.0)
    }

    /// True if advancing by the fall speed would push the bottom edge past
    /// the floor line or overlap another block. `self_idx` excludes this
    /// block from the scan.
    pub fn would_collide(&self, blocks: &[Block], self_idx: usize) -> bool {
        if self.rect.bottom() + BLOCK_FALL_SPEED > FLOOR_LINE {
            return true;
        }
        let next = self.rect.translated(Vec2::new(0.0, BLOCK_FALL_SPEED));
        blocks
            .iter()
            .enumerate()
            .any(|(i, other)| i != self_idx && next.intersects(&other.rect))
    }

    /// Come to rest, recording the top-out loss condition
    pub fn settle(&mut self) {
        if self.rect.top() <= 0.0 {
            self.touching_top = true;
        }
        self.moving = false;
        self.speed = 0.0;
    }

    /// Keep falling one tick
    pub fn advance(&mut self) {
        self.speed = BLOCK_FALL_SPEED;
        self.rect.pos.y += self.speed;
    }
}

/// A player-fired projectile on a parabolic arc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    pub velocity: Vec2,
    pub active: bool,
}

impl Bullet {
    /// Fire from `origin` (the player's top-center), horizontal direction
    /// signed by `facing_right`
    pub fn new(origin: Vec2, facing_right: bool) -> Self {
        let vx = if facing_right {
            BULLET_SPEED
        } else {
            -BULLET_SPEED
        };
        Self {
            rect: Rect::new(
                origin.x - BULLET_SIZE / 2.0,
                origin.y - BULLET_SIZE,
                BULLET_SIZE,
                BULLET_SIZE,
            ),
            velocity: Vec2::new(vx, -BULLET_SPEED),
            active: true,
        }
    }

    /// Advance one tick: despawn off-screen, destroy the first block hit
    /// (first-hit-wins, one block per projectile), otherwise integrate.
    pub fn update(&mut self, blocks: &mut [Block], screen_width: f32) {
        if !self.active {
            return;
        }

        if self.rect.right() <= 0.0 || self.rect.left() > screen_width {
            self.active = false;
            return;
        }

        for block in blocks.iter_mut() {
            if block.intersects(&self.rect) {
                block.destroy();
                self.active = false;
                return;
            }
        }

        self.velocity.y += GRAVITY;
        self.rect.pos += self.velocity;
    }
}

/// Keyboard-driven actor: lane movement, gravity, jump, single-slot firing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity
    pub vy: f32,
    pub facing_right: bool,
    pub grounded: bool,
    /// Terminal for the session once set
    pub dead: bool,
    /// Single projectile slot. A spent bullet stays here inactive so the
    /// cooldown can tell "never fired" from "just fired".
    pub bullet: Option<Bullet>,
    /// Ticks until re-fire is allowed
    pub fire_cooldown: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(50.0, 50.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            facing_right: true,
            grounded: false,
            dead: false,
            bullet: None,
            fire_cooldown: 0,
        }
    }

    /// A shot is allowed when the slot is empty, or its projectile is spent
    /// and the cooldown has elapsed
    pub fn can_fire(&self) -> bool {
        match &self.bullet {
            None => true,
            Some(bullet) => !bullet.active && self.fire_cooldown == 0,
        }
    }

    /// Launch a projectile from the top-center and restart the cooldown
    pub fn fire(&mut self, cooldown_ticks: u32) {
        self.bullet = Some(Bullet::new(self.rect.top_center(), self.facing_right));
        self.fire_cooldown = cooldown_ticks;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Lane RNG; the stream carries across restarts within a run
    pub rng: Pcg32,
    pub scene: Scene,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks since the last block spawn
    pub spawn_timer: u32,
    pub blocks: Vec<Block>,
    pub player: Player,
    pub score: u64,
    /// High-water score, monotonic across sessions
    pub high_score: u64,
    /// Why the last session ended
    pub loss: Option<LossCause>,
}

impl GameState {
    /// Create a new run at the title scene
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            scene: Scene::Title,
            time_ticks: 0,
            spawn_timer: 0,
            blocks: Vec::new(),
            player: Player::new(),
            score: 0,
            high_score: 0,
            loss: None,
        }
    }

    /// Begin a fresh session: blocks, player, score and timers reset; the
    /// RNG stream and high score carry over.
    pub fn start_session(&mut self) {
        self.blocks.clear();
        self.player = Player::new();
        self.score = 0;
        self.spawn_timer = 0;
        self.loss = None;
        self.scene = Scene::Playing;
    }
}
