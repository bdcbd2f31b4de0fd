//! Cell buffer the widget paints into.

use crate::rect::Rect;
use crate::style::{Rgb, Style, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Fill `rect` (clipped to the buffer) with blanks in the style's colors.
    pub fn fill(&mut self, rect: Rect, style: &Style) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.char = ' ';
                    cell.wide_continuation = false;
                    if let Some(bg) = style.background {
                        cell.bg = bg.to_rgb();
                    }
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)`, stopping at `max_x`.
    ///
    /// Colors the style leaves unset keep whatever is already in the cell.
    /// Returns the column after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, max_x: u16, text: &str, style: &Style) -> u16 {
        let max_x = max_x.min(self.width);
        let fg = style.foreground.map(|c| c.to_rgb());
        let bg = style.background.map(|c| c.to_rgb());
        let mut col = x;

        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > max_x {
                break;
            }
            if let Some(cell) = self.get_mut(col, y) {
                cell.char = ch;
                cell.style = style.text_style;
                cell.wide_continuation = false;
                if let Some(fg) = fg {
                    cell.fg = fg;
                }
                if let Some(bg) = bg {
                    cell.bg = bg;
                }
            }
            for extra in 1..w {
                if let Some(cell) = self.get_mut(col + extra, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            col += w;
        }
        col
    }

    /// The characters of row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
