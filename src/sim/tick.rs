//! Fixed timestep simulation tick
//!
//! Advances a session deterministically: block spawning and stacking,
//! player physics, projectile resolution, scoring, scene transitions.

use glam::Vec2;
use rand::Rng;

use super::state::{Block, GameState, LossCause, Scene};
use crate::config::{Config, CrushPolicy};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Jump (edge-triggered this tick)
    pub jump: bool,
    /// Fire (edge-triggered this tick)
    pub fire: bool,
    /// Start or restart a session (edge-triggered this tick)
    pub restart: bool,
    /// Demo mode - the built-in bot supplies movement and fire
    pub idle_mode: bool,
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, config: &Config) {
    match state.scene {
        Scene::Title => {
            if input.fire || input.jump || input.restart || input.idle_mode {
                log::info!("Session started (seed {})", state.seed);
                state.start_session();
            }
        }
        Scene::GameOver => {
            if input.restart || input.idle_mode {
                state.start_session();
            }
        }
        Scene::Playing => {
            let resolved = if input.idle_mode {
                idle_input(state, config)
            } else {
                *input
            };
            step_session(state, &resolved, config);
        }
    }
}

/// One tick of active play, in fixed order: spawn, blocks, player,
/// removal and scoring, loss transition.
fn step_session(state: &mut GameState, input: &TickInput, config: &Config) {
    state.time_ticks += 1;

    // Spawn on a fixed interval at a uniformly random lane.
    state.spawn_timer += 1;
    if state.spawn_timer >= config.spawn_interval_ticks {
        let lane = state.rng.random_range(0..config.lanes);
        state.blocks.push(Block::new(config.lane_x(lane)));
        state.spawn_timer = 0;
    }

    // Settle or advance every block, insertion order. Each scan sees a mix
    // of already- and not-yet-updated neighbors within this tick; stacking
    // timing depends on that order.
    let mut topped_out = false;
    for i in 0..state.blocks.len() {
        if !state.blocks[i].moving {
            continue;
        }
        let resting = state.blocks[i].would_collide(&state.blocks, i);
        let block = &mut state.blocks[i];
        if resting {
            block.settle();
            topped_out |= block.touching_top;
        } else {
            block.advance();
        }
    }
    // A stack at the ceiling ends the session; the tick still completes so
    // that pending destructions score.
    let mut loss = topped_out.then_some(LossCause::ToppedOut);

    update_player(state, input, config);
    if state.player.dead {
        loss = loss.or(Some(LossCause::Crushed));
    }

    // Drop destroyed blocks, rewarding each at the height it was hit.
    let mut gained = 0u64;
    let policy = config.score_policy;
    state.blocks.retain(|block| {
        if block.destroyed {
            gained += policy.reward(block.altitude());
            false
        } else {
            true
        }
    });
    if gained > 0 {
        state.score += gained;
        log::debug!("+{} points (score {})", gained, state.score);
    }

    state.high_score = state.high_score.max(state.score);

    // A loss is a normal transition, never an error; the scene layer takes
    // over from here.
    if let Some(cause) = loss {
        state.loss = Some(cause);
        state.scene = Scene::GameOver;
        log::info!(
            "Session over after {} ticks: {:?}, score {}",
            state.time_ticks,
            cause,
            state.score
        );
    }
}

/// Player step. Phase order is load-bearing: fire, projectile, horizontal
/// move, jump, gravity with vertical resolution, crush check.
fn update_player(state: &mut GameState, input: &TickInput, config: &Config) {
    let screen_width = config.screen_width();
    let player = &mut state.player;
    if player.dead {
        return;
    }

    if player.fire_cooldown > 0 {
        player.fire_cooldown -= 1;
    }

    // One projectile at a time, rate-limited once the slot is spent.
    if input.fire && player.can_fire() {
        player.fire(config.fire_cooldown_ticks);
    }
    if let Some(bullet) = player.bullet.as_mut() {
        bullet.update(&mut state.blocks, screen_width);
    }

    // Horizontal: exclusive held input, clamped to the screen, cancelled if
    // the displaced rect would newly overlap a block (wall-slide stop).
    let mut vx = 0.0;
    if input.left != input.right {
        vx = if input.left {
            -PLAYER_SPEED
        } else {
            PLAYER_SPEED
        };
        player.facing_right = input.right;
    }
    vx = vx.clamp(
        -player.rect.left(),
        (screen_width - player.rect.right()).max(0.0),
    );
    if vx != 0.0 {
        let next = player.rect.translated(Vec2::new(vx, 0.0));
        for block in &state.blocks {
            if !block.intersects(&player.rect) && block.intersects(&next) {
                vx = 0.0;
                break;
            }
        }
    }
    player.rect.pos.x += vx;

    if player.grounded && input.jump {
        player.vy = JUMP_SPEED;
        player.grounded = false;
    }

    // Gravity, then resolve the displaced rect against the first block it
    // touches: ride a still-falling block down at its own speed, land on a
    // resting one. The floor only catches the player when no block did.
    player.vy += GRAVITY;
    let mut touching = false;
    let next = player.rect.translated(Vec2::new(0.0, player.vy));
    for block in &state.blocks {
        if block.intersects(&next) {
            if block.moving {
                if player.vy > 0.0 {
                    player.grounded = true;
                    touching = true;
                }
                player.vy = block.speed;
            } else {
                player.grounded = true;
                touching = true;
                player.vy = 0.0;
            }
            break;
        }
    }
    if !touching && player.rect.bottom() + player.vy > FLOOR_LINE {
        player.grounded = true;
        player.vy = 0.0;
    }
    player.rect.pos.y += player.vy;

    let crushed = match config.crush_policy {
        CrushPolicy::Grounded => {
            player.grounded
                && state
                    .blocks
                    .iter()
                    .any(|block| block.moving && block.intersects(&player.rect))
        }
        CrushPolicy::Always => state
            .blocks
            .iter()
            .any(|block| block.intersects(&player.rect)),
    };
    if crushed {
        player.dead = true;
    }
}

/// Demo bot: walk toward the lane with the shortest stack and fire whenever
/// a falling block is ahead of the player.
fn idle_input(state: &GameState, config: &Config) -> TickInput {
    let player = &state.player;
    let px = player.rect.pos.x + player.rect.size.x / 2.0;

    // The lane whose resting stack tops out lowest on screen.
    let mut best_lane = 0u32;
    let mut best_top = f32::MIN;
    for lane in 0..config.lanes {
        let lane_left = config.lane_x(lane);
        let lane_right = lane_left + BLOCK_SIZE;
        let top = state
            .blocks
            .iter()
            .filter(|b| !b.moving && b.rect.left() < lane_right && b.rect.right() > lane_left)
            .map(|b| b.rect.top())
            .fold(FLOOR_LINE, f32::min);
        if top > best_top {
            best_top = top;
            best_lane = lane;
        }
    }
    let target = config.lane_x(best_lane) + BLOCK_SIZE / 2.0;

    let fire = player.can_fire()
        && state.blocks.iter().any(|b| {
            b.moving
                && b.rect.bottom() < player.rect.top()
                && if player.facing_right {
                    b.rect.left() >= player.rect.left()
                } else {
                    b.rect.right() <= player.rect.right()
                }
        });

    TickInput {
        left: px > target + PLAYER_SPEED,
        right: px < target - PLAYER_SPEED,
        jump: false,
        fire,
        restart: false,
        idle_mode: true,
    }
}
