//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, score, the 2x2 button grid, a status line,
//! the tier menu (or restart hint), and the high-score list.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DifficultyTier, Phase, RoundState, Symbol, LEADERBOARD_CAPACITY};

/// Columns between the two button columns.
const GAP_X: u16 = 2;
/// Rows between the two button rows.
const GAP_Y: u16 = 1;

const TIER_MENU: &str = "[B]EGINNER  [M]EDIUM  [H]ARD  [P]RO";
const RESTART_HINT: &str = "  [R] RESTART";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where each part of the screen lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub block_x: u16,
    pub block_w: u16,
    pub title_y: u16,
    pub score_y: u16,
    pub grid_x: u16,
    pub grid_y: u16,
    pub status_y: u16,
    pub menu_y: u16,
    pub scores_y: u16,
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Button width in terminal columns.
    button_w: u16,
    /// Button height in terminal rows.
    button_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 12x5 keeps buttons roughly square with typical glyph aspect ratio.
        Self {
            button_w: 12,
            button_h: 5,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (self.button_w * 2 + GAP_X, self.button_h * 2 + GAP_Y)
    }

    /// Total rows used by the whole screen.
    pub fn content_height(&self) -> u16 {
        let (_, grid_h) = self.grid_size();
        // title(2) + gap + score + gap, grid, gap + status + menu + gap + header + entries
        5 + grid_h + 5 + LEADERBOARD_CAPACITY as u16
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let (grid_w, grid_h) = self.grid_size();
        let block_w = grid_w.max(TIER_MENU.len() as u16);
        let block_x = viewport.width.saturating_sub(block_w) / 2;
        let title_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(self.content_height()) / 2,
            AnchorY::Top => 0,
        };
        let grid_y = title_y + 5;
        let status_y = grid_y + grid_h + 1;

        Layout {
            block_x,
            block_w,
            title_y,
            score_y: title_y + 3,
            grid_x: block_x + (block_w - grid_w) / 2,
            grid_y,
            status_y,
            menu_y: status_y + 1,
            scores_y: status_y + 3,
        }
    }

    /// Top-left corner of a button.
    pub fn button_origin(&self, layout: &Layout, symbol: Symbol) -> (u16, u16) {
        let col = (symbol.index() % 2) as u16;
        let row = (symbol.index() / 2) as u16;
        (
            layout.grid_x + col * (self.button_w + GAP_X),
            layout.grid_y + row * (self.button_h + GAP_Y),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let bx = layout.block_x;
        let bw = layout.block_w;

        let title = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let subtitle = CellStyle::fg(Rgb::new(102, 102, 102));
        let text = CellStyle::fg(Rgb::new(255, 255, 255));
        let dim = CellStyle::fg(Rgb::new(150, 150, 150)).dim();

        fb.put_str_centered(bx, bw, layout.title_y, "MEMORY", title);
        fb.put_str_centered(bx, bw, layout.title_y + 1, "MASTER", subtitle);

        // "SCORE NN"
        let score_w = 6 + digits(snap.score).max(2);
        let sx = bx + bw.saturating_sub(score_w) / 2;
        fb.put_str(sx, layout.score_y, "SCORE ", text);
        fb.put_u32_padded(sx + 6, layout.score_y, snap.score, 2, text);

        for symbol in Symbol::ALL {
            self.draw_button(fb, &layout, snap, symbol);
        }

        self.draw_status(fb, &layout, snap, text);

        match snap.phase {
            Phase::NotStarted => fb.put_str_centered(bx, bw, layout.menu_y, TIER_MENU, dim),
            Phase::RoundInProgress => {
                // "ROUND n  [R] RESTART"
                let w = 6 + digits(snap.round) + RESTART_HINT.len() as u16;
                let mut x = bx + bw.saturating_sub(w) / 2;
                fb.put_str(x, layout.menu_y, "ROUND ", dim);
                x += 6;
                x += fb.put_u32(x, layout.menu_y, snap.round, dim);
                fb.put_str(x, layout.menu_y, RESTART_HINT, dim);
            }
            Phase::GameOverDialog => {
                fb.put_str_centered(bx, bw, layout.menu_y, "[ENTER] TRY AGAIN", dim)
            }
        }

        self.draw_high_scores(fb, &layout, snap);

        if snap.phase == Phase::GameOverDialog {
            self.draw_game_over(fb, &layout, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_button(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        symbol: Symbol,
    ) {
        let lit = snap.highlighted == Some(symbol);
        let (ch, style) = if snap.phase == Phase::NotStarted {
            if lit {
                ('█', CellStyle::fg(Rgb::new(255, 255, 255)))
            } else {
                ('▒', CellStyle::fg(Rgb::new(51, 51, 51)))
            }
        } else {
            let (base, active) = button_colors(symbol);
            if lit {
                ('█', CellStyle::fg(active).bold())
            } else {
                ('▒', CellStyle::fg(base))
            }
        };

        let (x, y) = self.button_origin(layout, symbol);
        fb.fill_rect(x, y, self.button_w, self.button_h, ch, style);

        // Key hint in the middle of the button.
        let hint = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: style.fg,
            bold: true,
            dim: false,
        };
        let key = char::from(b'1' + symbol.index());
        fb.put_char(x + self.button_w / 2, y + self.button_h / 2, key, hint);
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        style: CellStyle,
    ) {
        let (bx, bw, y) = (layout.block_x, layout.block_w, layout.status_y);
        match snap.round_state {
            RoundState::Idle => fb.put_str_centered(bx, bw, y, "PICK A TIER", style),
            RoundState::Playing => {
                // "WATCH · BEGINNER"
                let tier = tier_label(snap.tier);
                let w = 8 + tier.len() as u16;
                let x = bx + bw.saturating_sub(w) / 2;
                fb.put_str(x, y, "WATCH · ", style);
                fb.put_str(x + 8, y, tier, style);
            }
            RoundState::AwaitingInput => {
                // "YOUR TURN n/m"
                let n = snap.input_len as u32;
                let m = snap.sequence_len as u32;
                let w = 10 + digits(n) + 1 + digits(m);
                let mut x = bx + bw.saturating_sub(w) / 2;
                fb.put_str(x, y, "YOUR TURN ", style.bold());
                x += 10;
                x += fb.put_u32(x, y, n, style.bold());
                fb.put_char(x, y, '/', style.bold());
                fb.put_u32(x + 1, y, m, style.bold());
            }
            RoundState::GameOver => {
                let alert = CellStyle::fg(Rgb::new(224, 27, 36)).bold();
                fb.put_str_centered(bx, bw, y, "GAME OVER", alert)
            }
        }
    }

    fn draw_high_scores(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let header = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let entry = CellStyle::fg(Rgb::new(220, 220, 220));
        let (bx, bw) = (layout.block_x, layout.block_w);

        fb.put_str_centered(bx, bw, layout.scores_y, "HIGH SCORES", header);

        // "01 • 005"
        let x = bx + bw.saturating_sub(8) / 2;
        for (i, &score) in snap.leaderboard.iter().enumerate() {
            let y = layout.scores_y + 1 + i as u16;
            if y >= fb.height() {
                break;
            }
            fb.put_u32_padded(x, y, i as u32 + 1, 2, entry);
            fb.put_str(x + 2, y, " • ", entry);
            fb.put_u32_padded(x + 5, y, score, 3, entry);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout, final_score: u32) {
        let (grid_w, _) = self.grid_size();
        let box_style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        // Centered on the gap row between the two button rows.
        let mid_y = layout.grid_y + self.button_h;
        let box_w = grid_w.saturating_sub(4).max(16);
        let box_x = layout.grid_x + grid_w.saturating_sub(box_w) / 2;
        fb.fill_rect(box_x, mid_y.saturating_sub(1), box_w, 3, ' ', box_style);

        fb.put_str_centered(box_x, box_w, mid_y.saturating_sub(1), "GAME OVER", box_style);

        // "FINAL SCORE NN"
        let w = 12 + digits(final_score).max(2);
        let x = box_x + box_w.saturating_sub(w) / 2;
        fb.put_str(x, mid_y + 1, "FINAL SCORE ", box_style);
        fb.put_u32_padded(x + 12, mid_y + 1, final_score, 2, box_style);
    }
}

/// Normal and lit colors per button.
fn button_colors(symbol: Symbol) -> (Rgb, Rgb) {
    match symbol {
        Symbol::Blue => (Rgb::new(26, 95, 180), Rgb::new(53, 132, 228)),
        Symbol::Red => (Rgb::new(192, 28, 40), Rgb::new(224, 27, 36)),
        Symbol::Green => (Rgb::new(38, 162, 105), Rgb::new(51, 209, 122)),
        Symbol::Yellow => (Rgb::new(229, 165, 10), Rgb::new(246, 211, 45)),
    }
}

fn tier_label(tier: DifficultyTier) -> &'static str {
    match tier {
        DifficultyTier::Beginner => "BEGINNER",
        DifficultyTier::Medium => "MEDIUM",
        DifficultyTier::Hard => "HARD",
        DifficultyTier::Pro => "PRO",
    }
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
