//! Fixed gameplay tuning values.
//!
//! All quantities are logical pixels and ticks; the kernel never deals in
//! wall-clock time or terminal cells.

pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 600;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 20;
pub const PLAYER_SPEED: i32 = 5;
/// Vertical offset of the cannon from the bottom of the canvas.
pub const PLAYER_BOTTOM_MARGIN: i32 = 60;
pub const STARTING_LIVES: u32 = 3;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: i32 = 4;
pub const BULLET_HEIGHT: i32 = 10;
/// Player bullets travel upward this many pixels per tick.
pub const BULLET_SPEED: i32 = 7;
/// Invader bullets travel downward this many pixels per tick.
pub const INVADER_BULLET_SPEED: i32 = 3;

// ── Invader grid ──────────────────────────────────────────────────────────────

pub const INVADER_ROWS: usize = 5;
pub const INVADER_COLS: usize = 11;
pub const INVADER_WIDTH: i32 = 32;
pub const INVADER_HEIGHT: i32 = 24;
pub const INVADER_SPACING_X: i32 = 60;
pub const INVADER_SPACING_Y: i32 = 50;
pub const INVADER_START_X: i32 = 100;
pub const INVADER_START_Y: i32 = 100;

/// Base horizontal step, scaled by the live-count speed multiplier.
pub const INVADER_SPEED: i32 = 1;
/// Vertical distance of one row-drop.
pub const INVADER_DROP_SPEED: i32 = 20;
/// The formation reverses when any invader gets this close to a wall.
pub const FORMATION_EDGE_MARGIN: i32 = 20;
/// Formation step interval before speed scaling kicks in.
pub const BASE_MOVE_DELAY: i32 = 60;
pub const MIN_MOVE_DELAY: i32 = 10;
/// Two-frame sprite animation toggles when the per-invader timer passes this.
pub const ANIM_TOGGLE_TICKS: u32 = 30;
/// Chance per tick that some invader fires, while any are alive.
pub const INVADER_FIRE_CHANCE: f64 = 0.02;

// ── UFO ───────────────────────────────────────────────────────────────────────

pub const UFO_WIDTH: i32 = 48;
pub const UFO_HEIGHT: i32 = 24;
pub const UFO_SPEED: i32 = 2;
pub const UFO_START_X: i32 = -50;
pub const UFO_Y: i32 = 50;
/// The UFO is gone once it travels this far past the right wall.
pub const UFO_DESPAWN_MARGIN: i32 = 50;
pub const UFO_SPAWN_CHANCE: f64 = 0.001;

// ── Barriers ──────────────────────────────────────────────────────────────────

pub const BARRIER_COUNT: usize = 4;
pub const BARRIER_WIDTH: i32 = 80;
pub const BARRIER_HEIGHT: i32 = 60;
pub const BARRIER_Y: i32 = CANVAS_HEIGHT - 200;
/// Side length of one destructible bitmap cell.
pub const BARRIER_CELL_SIZE: i32 = 4;
pub const BARRIER_ROWS: usize = (BARRIER_HEIGHT / BARRIER_CELL_SIZE) as usize;
pub const BARRIER_COLS: usize = (BARRIER_WIDTH / BARRIER_CELL_SIZE) as usize;
/// Euclidean radius, in cells, cleared around an impact.
pub const BARRIER_DAMAGE_RADIUS: i32 = 2;

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const SCORE_INVADER_TOP: u32 = 30;
pub const SCORE_INVADER_MIDDLE: u32 = 20;
pub const SCORE_INVADER_BOTTOM: u32 = 10;
/// UFO reward cycle, indexed by the level's shot count modulo its length.
pub const UFO_SCORES: [u32; 4] = [50, 100, 150, 300];
