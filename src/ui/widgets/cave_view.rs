//! Cave map widget for ratatui
//!
//! Draws the grid one character per cell with `y = height - 1` on the top
//! row, so `w` moves the avatar up the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::world::{Grid, Tile};

const HINT: &str = " wasd/arrows move · q quits ";

const TITLE: &str = " Cavewalk ";

/// Widget for rendering a cave grid
pub struct CaveView<'a> {
    grid: &'a Grid,
}

impl<'a> CaveView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Area needed to show the whole grid plus its border
    pub fn required_size(grid: &Grid) -> (u16, u16) {
        let side = |n: i32| u16::try_from(n).unwrap_or(u16::MAX).saturating_add(2);
        (side(grid.width()), side(grid.height()))
    }

    /// Whether `area` shows every cell of `grid`
    pub fn fits(grid: &Grid, area: Rect) -> bool {
        let (width, height) = Self::required_size(grid);
        area.width >= width && area.height >= height
    }
}

/// Shown instead of the map when the terminal is too small to hold it
pub struct TooSmallNotice {
    pub needed: (u16, u16),
}

impl Widget for TooSmallNotice {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.needed;
        let text = format!("Terminal too small: need {}x{}", width, height);
        let style = Style::default().fg(Color::Rgb(200, 80, 60)).add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);
    }
}

/// Glyph and style for a tile
fn tile_style(tile: Tile) -> (char, Style) {
    let (fr, fg, fb) = tile.fg_color();
    let (br, bg, bb) = tile.bg_color();
    let mut style = Style::default().fg(Color::Rgb(fr, fg, fb)).bg(Color::Rgb(br, bg, bb));
    if tile == Tile::Avatar {
        style = style.add_modifier(Modifier::BOLD);
    }
    (tile.glyph(), style)
}

impl<'a> Widget for CaveView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(TITLE)
            .title_bottom(HINT)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 90, 80)));

        let inner = block.inner(area);
        block.render(area, buf);

        let height = self.grid.height();
        for (pos, tile) in self.grid.iter() {
            let (Ok(row), Ok(col)) = (u16::try_from(height - 1 - pos.y), u16::try_from(pos.x)) else {
                continue;
            };
            if col >= inner.width || row >= inner.height {
                continue;
            }

            let (glyph, style) = tile_style(tile);
            if let Some(cell) = buf.cell_mut((inner.x + col, inner.y + row)) {
                cell.set_char(glyph).set_style(style);
            }
        }
    }
}
