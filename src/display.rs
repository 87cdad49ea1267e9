//! Rendering layer — all terminal I/O lives here.
//!
//! The simulation draws through the [`Surface`] trait (filled rectangles in
//! RGB, write-only); [`TermSurface`] backs it with a terminal cell buffer.
//! No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::*;
use crate::entities::{
    Barrier, Bullet, BulletOwner, GameStatus, HudSnapshot, Invader, Player, Ufo, World,
};
use crate::sprites::{invader_mask, SPRITE_SCALE};

pub type Rgb = (u8, u8, u8);

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Rgb = (0x00, 0xff, 0x00);
const C_INVADER: Rgb = (0x00, 0xff, 0x00);
const C_BARRIER: Rgb = (0x00, 0xff, 0x00);
const C_PLAYER_BULLET: Rgb = (0x00, 0xff, 0x00);
const C_INVADER_BULLET: Rgb = (0xff, 0x00, 0x00);
const C_UFO: Rgb = (0xff, 0x00, 0x00);
const C_UFO_WINDOW: Rgb = (0x00, 0x00, 0x00);

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

// ── Drawing surface ───────────────────────────────────────────────────────────

/// Write-only 2-D render target in canvas coordinates. The game never reads
/// pixels back.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);
}

// ── Per-entity draw contracts ─────────────────────────────────────────────────

pub fn draw_player(surface: &mut impl Surface, player: &Player) {
    let (x, y) = (player.x, player.y);
    // Turret, hull, base.
    surface.fill_rect(x + 15, y, 10, 5, C_PLAYER);
    surface.fill_rect(x + 5, y + 5, 30, 10, C_PLAYER);
    surface.fill_rect(x, y + 15, 40, 5, C_PLAYER);
}

pub fn draw_bullet(surface: &mut impl Surface, bullet: &Bullet) {
    let color = match bullet.owner {
        BulletOwner::Player => C_PLAYER_BULLET,
        BulletOwner::Invader => C_INVADER_BULLET,
    };
    surface.fill_rect(bullet.x, bullet.y, BULLET_WIDTH, BULLET_HEIGHT, color);
}

pub fn draw_invader(surface: &mut impl Surface, invader: &Invader) {
    let mask = invader_mask(invader.tier, invader.anim_frame);
    for row in 0..mask.height {
        for col in 0..mask.width {
            if mask.pixel(row, col) {
                surface.fill_rect(
                    invader.x + col as i32 * SPRITE_SCALE,
                    invader.y + row as i32 * SPRITE_SCALE,
                    SPRITE_SCALE,
                    SPRITE_SCALE,
                    C_INVADER,
                );
            }
        }
    }
}

pub fn draw_ufo(surface: &mut impl Surface, ufo: &Ufo) {
    let (x, y) = (ufo.x, ufo.y);
    // Saucer body, widening toward the base.
    surface.fill_rect(x + 8, y + 8, 32, 8, C_UFO);
    surface.fill_rect(x + 4, y + 12, 40, 4, C_UFO);
    surface.fill_rect(x, y + 16, 48, 8, C_UFO);
    // Cockpit windows.
    surface.fill_rect(x + 12, y + 4, 6, 6, C_UFO_WINDOW);
    surface.fill_rect(x + 20, y + 4, 6, 6, C_UFO_WINDOW);
    surface.fill_rect(x + 28, y + 4, 6, 6, C_UFO_WINDOW);
}

pub fn draw_barrier(surface: &mut impl Surface, barrier: &Barrier) {
    for (row, cells) in barrier.cells.iter().enumerate() {
        for (col, intact) in cells.iter().enumerate() {
            if *intact {
                surface.fill_rect(
                    barrier.x + col as i32 * BARRIER_CELL_SIZE,
                    barrier.y + row as i32 * BARRIER_CELL_SIZE,
                    BARRIER_CELL_SIZE,
                    BARRIER_CELL_SIZE,
                    C_BARRIER,
                );
            }
        }
    }
}

/// Draw every live entity for one frame.
pub fn draw_world(surface: &mut impl Surface, world: &World) {
    for barrier in &world.barriers {
        draw_barrier(surface, barrier);
    }
    for invader in &world.invaders {
        draw_invader(surface, invader);
    }
    for bullet in &world.invader_bullets {
        draw_bullet(surface, bullet);
    }
    if let Some(bullet) = &world.player_bullet {
        draw_bullet(surface, bullet);
    }
    if let Some(ufo) = &world.ufo {
        draw_ufo(surface, ufo);
    }
    draw_player(surface, &world.player);
}

// ── Terminal-backed surface ───────────────────────────────────────────────────

/// Canvas pixels covered by one terminal cell.
const CELL_WIDTH: i32 = 8;
const CELL_HEIGHT: i32 = 16;

/// Cell buffer mapping the logical canvas onto the terminal. Entities are
/// rasterized into it, then the whole grid is presented in one pass.
pub struct TermSurface {
    cols: usize,
    rows: usize,
    cells: Vec<Option<Rgb>>,
}

impl TermSurface {
    pub fn new() -> Self {
        let cols = ((CANVAS_WIDTH + CELL_WIDTH - 1) / CELL_WIDTH) as usize;
        let rows = ((CANVAS_HEIGHT + CELL_HEIGHT - 1) / CELL_HEIGHT) as usize;
        TermSurface { cols, rows, cells: vec![None; cols * rows] }
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Queue the buffer contents starting at terminal row `top`.
    fn present<W: Write>(&self, out: &mut W, top: u16) -> std::io::Result<()> {
        let mut last: Option<Rgb> = None;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, top + row as u16))?;
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some(rgb) => {
                        if last != Some(rgb) {
                            let (r, g, b) = rgb;
                            out.queue(style::SetForegroundColor(Color::Rgb { r, g, b }))?;
                            last = Some(rgb);
                        }
                        out.queue(Print('█'))?;
                    }
                    None => {
                        out.queue(Print(' '))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        TermSurface::new()
    }
}

impl Surface for TermSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        if w <= 0 || h <= 0 {
            return;
        }
        let col0 = x.div_euclid(CELL_WIDTH).max(0);
        let col1 = (x + w - 1).div_euclid(CELL_WIDTH).min(self.cols as i32 - 1);
        let row0 = y.div_euclid(CELL_HEIGHT).max(0);
        let row1 = (y + h - 1).div_euclid(CELL_HEIGHT).min(self.rows as i32 - 1);
        for row in row0..=row1 {
            for col in col0..=col1 {
                self.cells[row as usize * self.cols + col as usize] = Some(color);
            }
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: HUD, play field, hint row, and whichever
/// overlay the game status calls for.
pub fn render<W: Write>(
    out: &mut W,
    surface: &mut TermSurface,
    world: &World,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, surface.cols() as u16, &world.hud())?;

    surface.clear();
    draw_world(surface, world);
    surface.present(out, 1)?;

    draw_controls_hint(out, surface.rows() as u16 + 1)?;

    match world.state.status {
        GameStatus::Idle => draw_start_screen(out, surface)?,
        GameStatus::GameOver => draw_game_over(out, surface, world)?,
        GameStatus::Running => {}
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, surface.rows() as u16 + 1))?;
    out.flush()
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

/// The text sink for scoreboard changes; formats the read-only snapshot.
fn draw_hud<W: Write>(out: &mut W, width: u16, hud: &HudSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", hud.score)))?;

    let level_str = format!("Level:{:>2}", hud.level);
    let lx = (width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let hearts: String = "♥".repeat(hud.lives as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = width.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Controls hint ─────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   ENTER : Start   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    surface: &TermSurface,
    row: u16,
    color: Color,
    msg: &str,
) -> std::io::Result<()> {
    let cx = surface.cols() as u16 / 2;
    let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_start_screen<W: Write>(out: &mut W, surface: &TermSurface) -> std::io::Result<()> {
    let cy = surface.rows() as u16 / 2;
    draw_centered(out, surface, cy.saturating_sub(2), Color::Cyan, "★  SPACE  INVADERS  ★")?;
    draw_centered(out, surface, cy, Color::White, "Press ENTER to start")?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    surface: &TermSurface,
    world: &World,
) -> std::io::Result<()> {
    let cy = surface.rows() as u16 / 2;
    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║     GAME  OVER     ║",
        "╚════════════════════╝",
    ];
    for (i, msg) in lines.iter().enumerate() {
        draw_centered(out, surface, cy.saturating_sub(3) + i as u16, Color::Red, msg)?;
    }
    let score_line = format!("Final Score: {:>6}", world.state.score);
    draw_centered(out, surface, cy + 1, Color::Yellow, &score_line)?;
    draw_centered(out, surface, cy + 2, Color::White, "ENTER - Play Again   Q - Quit")?;
    Ok(())
}
