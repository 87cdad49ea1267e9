//! Pure game-logic functions.
//!
//! Public entry points take an immutable reference to the current [`World`]
//! (and, where needed, an RNG handle) and return a brand-new `World`. Side
//! effects are limited to the injected RNG, so a seeded generator replays a
//! whole game deterministically.

use rand::Rng;

use crate::config::*;
use crate::entities::{
    Barrier, Bullet, BulletOwner, GameState, GameStatus, InputState, Invader, Player, Tier, Ufo,
    World,
};

// ── Formation pacing ──────────────────────────────────────────────────────────

/// Fewer live invaders ⇒ bigger horizontal steps.
pub fn speed_multiplier(live: usize) -> i32 {
    (6 - live as i32 / 10).max(1)
}

/// Fewer live invaders ⇒ shorter wait between formation steps.
pub fn move_delay(live: usize) -> u32 {
    (BASE_MOVE_DELAY - speed_multiplier(live) * 5).max(MIN_MOVE_DELAY) as u32
}

/// The saucer's worth cycles with the number of shots fired this level.
pub fn ufo_score(shot_count: u32) -> u32 {
    UFO_SCORES[shot_count as usize % UFO_SCORES.len()]
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A world waiting on the start command: empty field, full lives, level 1.
pub fn new_world() -> World {
    World {
        player: Player {
            x: CANVAS_WIDTH / 2 - PLAYER_WIDTH / 2,
            y: CANVAS_HEIGHT - PLAYER_BOTTOM_MARGIN,
        },
        player_bullet: None,
        invaders: Vec::new(),
        invader_bullets: Vec::new(),
        barriers: Vec::new(),
        ufo: None,
        formation_dir: 1,
        formation_timer: 0,
        state: GameState {
            status: GameStatus::Idle,
            paused: false,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            shot_count: 0,
        },
    }
}

/// Start-or-restart command: a full reset into a running round. The same
/// call serves the first start and every post-game-over restart.
pub fn start_game() -> World {
    let mut world = new_world();
    world.state.status = GameStatus::Running;
    world.invaders = spawn_invaders();
    world.barriers = spawn_barriers();
    world
}

/// Level transition: fresh grid and barriers, bullets and saucer cleared,
/// shot count rewound. Score and lives carry over.
pub fn next_level(world: &World) -> World {
    let mut next = world.clone();
    next.state.level += 1;
    next.state.shot_count = 0;
    next.invaders = spawn_invaders();
    next.barriers = spawn_barriers();
    next.invader_bullets.clear();
    next.player_bullet = None;
    next.ufo = None;
    next
}

fn spawn_invaders() -> Vec<Invader> {
    let mut invaders = Vec::with_capacity(INVADER_ROWS * INVADER_COLS);
    for row in 0..INVADER_ROWS {
        for col in 0..INVADER_COLS {
            invaders.push(Invader {
                x: INVADER_START_X + col as i32 * INVADER_SPACING_X,
                y: INVADER_START_Y + row as i32 * INVADER_SPACING_Y,
                tier: Tier::for_row(row),
                anim_frame: 0,
                anim_timer: 0,
            });
        }
    }
    invaders
}

fn spawn_barriers() -> Vec<Barrier> {
    let spacing = CANVAS_WIDTH / (BARRIER_COUNT as i32 + 1);
    (0..BARRIER_COUNT)
        .map(|i| Barrier {
            x: spacing * (i as i32 + 1) - BARRIER_WIDTH / 2,
            y: BARRIER_Y,
            cells: vec![vec![true; BARRIER_COLS]; BARRIER_ROWS],
        })
        .collect()
}

// ── Input-driven commands (pure) ─────────────────────────────────────────────

/// Fire the cannon. A no-op while a player bullet is already in flight —
/// the one-bullet rule is structural, not an error.
pub fn player_shoot(world: &World) -> World {
    if world.state.status != GameStatus::Running || world.player_bullet.is_some() {
        return world.clone();
    }
    let mut next = world.clone();
    next.player_bullet = Some(Bullet {
        x: next.player.x + PLAYER_WIDTH / 2 - BULLET_WIDTH / 2,
        y: next.player.y,
        dy: -BULLET_SPEED,
        owner: BulletOwner::Player,
    });
    next.state.shot_count += 1;
    next
}

// ── Per-tick driver ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick. Does nothing unless the world is
/// running. All randomness (saucer spawn, invader fire, shooter choice)
/// comes through `rng`.
pub fn tick(world: &World, input: &InputState, rng: &mut impl Rng) -> World {
    if world.state.status != GameStatus::Running {
        return world.clone();
    }
    let mut next = world.clone();

    move_player(&mut next, input);
    advance_player_bullet(&mut next);
    advance_formation(&mut next, rng);
    advance_invader_bullets(&mut next);
    advance_ufo(&mut next, rng);
    resolve_collisions(&mut next);
    check_level_clear(&mut next);

    next
}

fn move_player(world: &mut World, input: &InputState) {
    if input.left {
        world.player.x = (world.player.x - PLAYER_SPEED).max(0);
    }
    if input.right {
        world.player.x = (world.player.x + PLAYER_SPEED).min(CANVAS_WIDTH - PLAYER_WIDTH);
    }
}

fn advance_player_bullet(world: &mut World) {
    if let Some(bullet) = &mut world.player_bullet {
        bullet.y += bullet.dy;
    }
    let gone = world
        .player_bullet
        .as_ref()
        .map_or(false, |b| b.y < 0 || b.y > CANVAS_HEIGHT);
    if gone {
        world.player_bullet = None;
    }
}

fn advance_invader_bullets(world: &mut World) {
    for bullet in &mut world.invader_bullets {
        bullet.y += bullet.dy;
    }
    world
        .invader_bullets
        .retain(|b| b.y >= 0 && b.y <= CANVAS_HEIGHT);
}

// ── Formation controller ─────────────────────────────────────────────────────

/// One tick of the lock-step sweep: accumulate the move timer, step or
/// drop-and-reverse when it expires, run the two-frame animation, and maybe
/// let one invader fire. Safe on an empty grid.
fn advance_formation(world: &mut World, rng: &mut impl Rng) {
    world.formation_timer += 1;

    let mult = speed_multiplier(world.invaders.len());
    let delay = move_delay(world.invaders.len());

    if world.formation_timer >= delay {
        world.formation_timer = 0;

        let dir = world.formation_dir;
        let at_edge = world.invaders.iter().any(|inv| {
            (dir > 0 && inv.x + INVADER_WIDTH >= CANVAS_WIDTH - FORMATION_EDGE_MARGIN)
                || (dir < 0 && inv.x <= FORMATION_EDGE_MARGIN)
        });

        if at_edge {
            // Drop a row and turn around; no horizontal move this step.
            for inv in &mut world.invaders {
                inv.y += INVADER_DROP_SPEED;
            }
            world.formation_dir = -dir;
        } else {
            for inv in &mut world.invaders {
                inv.x += INVADER_SPEED * dir * mult;
            }
        }
    }

    // Animation runs every tick, independent of the move gate.
    for inv in &mut world.invaders {
        inv.anim_timer += 1;
        if inv.anim_timer > ANIM_TOGGLE_TICKS {
            inv.anim_frame = 1 - inv.anim_frame;
            inv.anim_timer = 0;
        }
    }

    if !world.invaders.is_empty() && rng.gen_bool(INVADER_FIRE_CHANCE) {
        let shooter = &world.invaders[rng.gen_range(0..world.invaders.len())];
        world.invader_bullets.push(Bullet {
            x: shooter.x + INVADER_WIDTH / 2 - BULLET_WIDTH / 2,
            y: shooter.y + INVADER_HEIGHT,
            dy: INVADER_BULLET_SPEED,
            owner: BulletOwner::Invader,
        });
    }
}

// ── UFO ──────────────────────────────────────────────────────────────────────

fn advance_ufo(world: &mut World, rng: &mut impl Rng) {
    if world.ufo.is_none() && rng.gen_bool(UFO_SPAWN_CHANCE) {
        world.ufo = Some(Ufo { x: UFO_START_X, y: UFO_Y });
    }
    if let Some(ufo) = &mut world.ufo {
        ufo.x += UFO_SPEED;
    }
    let gone = world
        .ufo
        .as_ref()
        .map_or(false, |u| u.x > CANVAS_WIDTH + UFO_DESPAWN_MARGIN);
    if gone {
        world.ufo = None;
    }
}

// ── Barrier damage model ─────────────────────────────────────────────────────

/// Test a bullet against one barrier. The bullet's box is mapped to a cell
/// range (clamped — bullets may overhang the bitmap); the first intact cell
/// found scanning row-major takes radius damage and absorbs the shot.
pub fn barrier_absorb(barrier: &mut Barrier, bullet: &Bullet) -> bool {
    let start_row = (bullet.y - barrier.y).div_euclid(BARRIER_CELL_SIZE);
    let end_row = (bullet.y + BULLET_HEIGHT - barrier.y).div_euclid(BARRIER_CELL_SIZE);
    let start_col = (bullet.x - barrier.x).div_euclid(BARRIER_CELL_SIZE);
    let end_col = (bullet.x + BULLET_WIDTH - barrier.x).div_euclid(BARRIER_CELL_SIZE);

    for row in start_row.max(0)..=end_row.min(BARRIER_ROWS as i32 - 1) {
        for col in start_col.max(0)..=end_col.min(BARRIER_COLS as i32 - 1) {
            if barrier.cells[row as usize][col as usize] {
                damage_area(barrier, row, col, BARRIER_DAMAGE_RADIUS);
                return true;
            }
        }
    }
    false
}

/// Clear every intact cell within Euclidean distance `radius` of the impact.
fn damage_area(barrier: &mut Barrier, center_row: i32, center_col: i32, radius: i32) {
    for row in center_row - radius..=center_row + radius {
        for col in center_col - radius..=center_col + radius {
            if row < 0 || row >= BARRIER_ROWS as i32 || col < 0 || col >= BARRIER_COLS as i32 {
                continue;
            }
            let d2 = (row - center_row).pow(2) + (col - center_col).pow(2);
            if d2 <= radius * radius {
                barrier.cells[row as usize][col as usize] = false;
            }
        }
    }
}

// ── Collision & resolution engine ────────────────────────────────────────────

/// Ordered collision pass for one tick. Each entity dies at most once:
/// player bullet vs invaders, then the surviving bullet vs the saucer, then
/// vs barriers; invader bullets vs player (one hit ends the pass) or
/// barriers; finally the invasion check.
fn resolve_collisions(world: &mut World) {
    // Player bullet vs invaders, in list order. One kill per shot.
    if let Some(bullet) = &world.player_bullet {
        let rect = bullet.rect();
        if let Some(idx) = world.invaders.iter().position(|inv| rect.intersects(inv.rect())) {
            let downed = world.invaders.remove(idx);
            world.state.score += downed.tier.score();
            world.player_bullet = None;
        }
    }

    // Surviving player bullet vs the saucer.
    let ufo_hit = match (&world.player_bullet, &world.ufo) {
        (Some(bullet), Some(ufo)) => bullet.rect().intersects(ufo.rect()),
        _ => false,
    };
    if ufo_hit {
        world.state.score += ufo_score(world.state.shot_count);
        world.ufo = None;
        world.player_bullet = None;
    }

    // Surviving player bullet vs barriers.
    if let Some(bullet) = world.player_bullet.clone() {
        for barrier in &mut world.barriers {
            if barrier_absorb(barrier, &bullet) {
                world.player_bullet = None;
                break;
            }
        }
    }

    // Invader bullets vs player, then vs barriers. Reverse iteration so
    // in-place removal is safe. A player hit ends the pass for this tick.
    let player_rect = world.player.rect();
    let mut i = world.invader_bullets.len();
    while i > 0 {
        i -= 1;
        let bullet = world.invader_bullets[i].clone();

        if bullet.rect().intersects(player_rect) {
            world.state.lives = world.state.lives.saturating_sub(1);
            world.invader_bullets.remove(i);
            if world.state.lives == 0 {
                world.state.status = GameStatus::GameOver;
            }
            break;
        }

        for barrier in &mut world.barriers {
            if barrier_absorb(barrier, &bullet) {
                world.invader_bullets.remove(i);
                break;
            }
        }
    }

    // Invasion: the grid reaching the cannon's row ends the game outright.
    if world
        .invaders
        .iter()
        .any(|inv| inv.y + INVADER_HEIGHT >= world.player.y)
    {
        world.state.status = GameStatus::GameOver;
    }
}

// ── Win check ────────────────────────────────────────────────────────────────

fn check_level_clear(world: &mut World) {
    if world.state.status == GameStatus::Running && world.invaders.is_empty() {
        *world = next_level(world);
    }
}
