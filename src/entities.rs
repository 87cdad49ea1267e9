//! Game entity types and the [`World`] aggregate — data plus the small
//! accessors the collision code reads (bounding boxes, score lookup).

use crate::config::*;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Strict overlap test: touching edges do not collide.
    pub fn intersects(self, other: Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Invaders ──────────────────────────────────────────────────────────────────

/// Row band an invader belongs to. Fixed at grid creation; decides the
/// sprite and the score it is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Top,
    Middle,
    Bottom,
}

impl Tier {
    pub fn score(self) -> u32 {
        match self {
            Tier::Top => SCORE_INVADER_TOP,
            Tier::Middle => SCORE_INVADER_MIDDLE,
            Tier::Bottom => SCORE_INVADER_BOTTOM,
        }
    }

    /// Row 0 is the top band, rows 1–2 the middle, everything below the bottom.
    pub fn for_row(row: usize) -> Tier {
        match row {
            0 => Tier::Top,
            1 | 2 => Tier::Middle,
            _ => Tier::Bottom,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invader {
    pub x: i32,
    pub y: i32,
    pub tier: Tier,
    /// Which of the two sprite frames is showing.
    pub anim_frame: u8,
    pub anim_timer: u32,
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: INVADER_WIDTH, h: INVADER_HEIGHT }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Who fired a bullet — fixes its direction, color, and what it can hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Invader,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Signed vertical velocity per tick; bullets never move sideways.
    pub dy: i32,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: BULLET_WIDTH, h: BULLET_HEIGHT }
    }
}

// ── Player & UFO ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: PLAYER_WIDTH, h: PLAYER_HEIGHT }
    }
}

/// Bonus saucer. Always crosses left-to-right along the top of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ufo {
    pub x: i32,
    pub y: i32,
}

impl Ufo {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: UFO_WIDTH, h: UFO_HEIGHT }
    }
}

// ── Barriers ──────────────────────────────────────────────────────────────────

/// Destructible shield: a grid of 4×4-pixel cells. Cells only ever go from
/// intact to destroyed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Barrier {
    pub x: i32,
    pub y: i32,
    /// `cells[row][col]`, true while the cell is intact.
    pub cells: Vec<Vec<bool>>,
}

// ── Game state ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the first start command.
    Idle,
    Running,
    GameOver,
}

/// Scoreboard and run-state, separate from the entity lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub status: GameStatus,
    /// Reserved pause switch; gameplay never reads it.
    pub paused: bool,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Shots fired this level; indexes the UFO reward cycle.
    pub shot_count: u32,
}

/// Continuous movement input sampled once per tick. Fire and start are
/// edge-triggered commands, not part of this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

/// Read-only scoreboard snapshot handed to the display sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything the simulation owns. One value, held by the tick driver and
/// passed into each subsystem; cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub player: Player,
    /// At most one player bullet is ever in flight.
    pub player_bullet: Option<Bullet>,
    pub invaders: Vec<Invader>,
    pub invader_bullets: Vec<Bullet>,
    pub barriers: Vec<Barrier>,
    /// At most one saucer is ever live.
    pub ufo: Option<Ufo>,
    /// Formation sweep direction, +1 right or −1 left. Shared by the grid.
    pub formation_dir: i32,
    /// Ticks accumulated toward the next formation step.
    pub formation_timer: u32,
    pub state: GameState,
}

impl World {
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.state.score,
            lives: self.state.lives,
            level: self.state.level,
        }
    }
}
